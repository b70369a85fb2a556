//! Cutting an image into a grid of triangle pairs.

use glam::Vec2;

use super::fragment::{Fragment, TriangleVariant};
use super::trajectory::{blast_intensity, max_blast_distance};
use super::ShatterResult;
use crate::api::config::GridResolution;
use crate::components::sprite::TextureRect;
use crate::error::ShatterError;

/// Split an image of `image_size` into `2 * cols * rows` triangular fragments.
///
/// Fragments come out row-major (row 0 at the bottom, column 0 on the left),
/// upper-left triangle before lower-right within a cell. Index-based lookups
/// rely on that order.
///
/// `texture_rect` is the part of the texture the image occupies; pass
/// [`TextureRect::FULL`] for a texture that is not atlas-packed. The grid is
/// used as given; clamp it first with [`GridResolution::clamped`] to bound the
/// fragment count.
pub fn decompose(
    image_size: Vec2,
    texture_rect: TextureRect,
    grid: GridResolution,
) -> Result<ShatterResult, ShatterError> {
    if !image_size.is_finite() || image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Err(ShatterError::InvalidGeometry {
            width: image_size.x,
            height: image_size.y,
        });
    }
    if grid.cols < 1 || grid.rows < 1 {
        return Err(ShatterError::InvalidGrid { cols: grid.cols, rows: grid.rows });
    }

    let cols = grid.cols as u32;
    let rows = grid.rows as u32;
    let cell_size = Vec2::new(image_size.x / cols as f32, image_size.y / rows as f32);
    let half_image = image_size / 2.0;
    let half_cell = cell_size / 2.0;
    let max_distance = max_blast_distance(image_size, cell_size);

    let mut fragments =
        Vec::with_capacity(grid.fragment_count().min(GridResolution::MAX_FRAGMENTS));
    for y in 0..rows {
        for x in 0..cols {
            let source_region = texture_rect.cell(x, y, cols, rows);
            let rest_position = Vec2::new(
                x as f32 * cell_size.x - half_image.x + half_cell.x,
                y as f32 * cell_size.y - half_image.y + half_cell.y,
            );
            let intensity = blast_intensity(rest_position, max_distance);
            for variant in TriangleVariant::ALL {
                fragments.push(Fragment {
                    cell: (x, y),
                    variant,
                    source_region,
                    rest_position,
                    size: cell_size,
                    blast_intensity: intensity,
                    motion: None,
                });
            }
        }
    }

    log::debug!(
        "decomposed {}x{} image into {} fragments ({}x{} grid, max blast distance {:.2})",
        image_size.x, image_size.y, fragments.len(), cols, rows, max_distance
    );

    Ok(ShatterResult {
        image_size,
        cell_size,
        grid,
        max_distance,
        fragments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cols: i32, rows: i32) -> GridResolution {
        GridResolution::new(cols, rows)
    }

    #[test]
    fn fragment_count_and_order() {
        let result = decompose(Vec2::new(120.0, 90.0), TextureRect::FULL, grid(3, 4)).unwrap();
        assert_eq!(result.len(), 24);
        for (i, f) in result.fragments().iter().enumerate() {
            let cell = i / 2;
            assert_eq!(f.cell, ((cell % 3) as u32, (cell / 3) as u32));
            assert_eq!(f.variant.index(), i % 2);
        }
    }

    #[test]
    fn two_by_two_rest_positions() {
        let result = decompose(Vec2::new(100.0, 100.0), TextureRect::FULL, grid(2, 2)).unwrap();
        let centers: Vec<Vec2> = result.fragments().iter().step_by(2).map(|f| f.rest_position).collect();
        assert_eq!(
            centers,
            vec![
                Vec2::new(-25.0, -25.0),
                Vec2::new(25.0, -25.0),
                Vec2::new(-25.0, 25.0),
                Vec2::new(25.0, 25.0),
            ]
        );
    }

    #[test]
    fn triangle_pairs_share_region_and_position() {
        let result = decompose(Vec2::new(64.0, 32.0), TextureRect::FULL, grid(4, 2)).unwrap();
        for pair in result.fragments().chunks(2) {
            assert_eq!(pair[0].source_region, pair[1].source_region);
            assert_eq!(pair[0].rest_position, pair[1].rest_position);
            assert_eq!(pair[0].variant, TriangleVariant::UpperLeft);
            assert_eq!(pair[1].variant, TriangleVariant::LowerRight);
        }
    }

    #[test]
    fn regions_tile_the_texture_rect() {
        let rect = TextureRect::new(0.25, 0.5, 0.5, 0.25);
        let result = decompose(Vec2::new(300.0, 200.0), rect, grid(7, 5)).unwrap();
        let cells: Vec<TextureRect> = result.fragments().iter().step_by(2).map(|f| f.source_region).collect();

        let area: f32 = cells.iter().map(TextureRect::area).sum();
        assert!((area - rect.area()).abs() < 1e-5, "area {} vs {}", area, rect.area());

        for row in 0..5 {
            for col in 0..7 {
                let c = &cells[row * 7 + col];
                if col + 1 < 7 {
                    let right = &cells[row * 7 + col + 1];
                    assert!((c.max_x() - right.x).abs() < 1e-6);
                    assert_eq!(c.y, right.y);
                }
                if row + 1 < 5 {
                    let above = &cells[(row + 1) * 7 + col];
                    assert!((c.max_y() - above.y).abs() < 1e-6);
                    assert_eq!(c.x, above.x);
                }
            }
        }
        assert_eq!(cells[0].x, rect.x);
        assert_eq!(cells[0].y, rect.y);
        assert!((cells[34].max_x() - rect.max_x()).abs() < 1e-6);
        assert!((cells[34].max_y() - rect.max_y()).abs() < 1e-6);
    }

    #[test]
    fn power_of_two_grid_edges_are_exact() {
        let result = decompose(Vec2::new(64.0, 64.0), TextureRect::FULL, grid(4, 4)).unwrap();
        let cells: Vec<TextureRect> = result.fragments().iter().step_by(2).map(|f| f.source_region).collect();
        for col in 0..3 {
            assert_eq!(cells[col].max_x(), cells[col + 1].x);
        }
    }

    #[test]
    fn rest_positions_reassemble_the_image() {
        let size = Vec2::new(90.0, 60.0);
        let result = decompose(size, TextureRect::FULL, grid(3, 2)).unwrap();
        let half = result.cell_size() / 2.0;
        let (mut min, mut max) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
        for f in result.fragments() {
            min = min.min(f.rest_position - half);
            max = max.max(f.rest_position + half);
        }
        assert_eq!(min, -size / 2.0);
        assert_eq!(max, size / 2.0);
    }

    #[test]
    fn center_pieces_feel_the_blast_more_than_corners() {
        let result = decompose(Vec2::new(100.0, 100.0), TextureRect::FULL, grid(5, 5)).unwrap();
        let fragments = result.fragments();
        let nearest = fragments
            .iter()
            .min_by(|a, b| a.rest_position.length().total_cmp(&b.rest_position.length()))
            .unwrap();
        assert_eq!(fragments[0].blast_intensity, 0.0);
        for corner in [0, 8, 40, 48] {
            assert!(fragments[corner].blast_intensity < 1e-5);
            assert!(nearest.blast_intensity > fragments[corner].blast_intensity);
        }
    }

    #[test]
    fn bad_grid_is_rejected() {
        let err = decompose(Vec2::new(100.0, 100.0), TextureRect::FULL, grid(0, 5)).unwrap_err();
        assert!(matches!(err, ShatterError::InvalidGrid { cols: 0, rows: 5 }));
        let err = decompose(Vec2::new(100.0, 100.0), TextureRect::FULL, grid(3, -1)).unwrap_err();
        assert!(matches!(err, ShatterError::InvalidGrid { .. }));
    }

    #[test]
    fn bad_geometry_is_rejected() {
        let err = decompose(Vec2::new(0.0, 50.0), TextureRect::FULL, grid(2, 2)).unwrap_err();
        assert!(matches!(err, ShatterError::InvalidGeometry { .. }));
        let err = decompose(Vec2::new(10.0, f32::NAN), TextureRect::FULL, grid(2, 2)).unwrap_err();
        assert!(matches!(err, ShatterError::InvalidGeometry { .. }));
    }

    #[test]
    fn single_cell_is_allowed() {
        let result = decompose(Vec2::new(10.0, 10.0), TextureRect::FULL, grid(1, 1)).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.fragments()[0].rest_position, Vec2::ZERO);
        assert_eq!(result.fragments()[0].blast_intensity, 1.0);
    }
}
