//! Sprite shattering: cut a sprite into triangle pairs and give every piece
//! its own outward trajectory.
//!
//! `decompose` produces the static pieces, `generate_trajectories` draws their
//! motion, and `MotionProfile::evaluate` places them at any progress.
//! `shatter_sprite` runs the whole pipeline for a textured sprite.

mod rng;
mod fragment;
mod decompose;
mod trajectory;
mod motion;
mod heatmap;

use glam::Vec2;

pub use rng::Rng;
pub use fragment::{Fragment, TriangleVariant};
pub use decompose::decompose;
pub use trajectory::{blast_intensity, generate_trajectory, max_blast_distance};
pub use motion::{FragmentPose, MotionProfile, DEFAULT_FLOOR_Y};
pub use heatmap::{heatmap_color, NO_TINT};

use crate::api::config::{AnimationMode, GridResolution, ShatterConfig, ShatterTuning};
use crate::components::sprite::ShatterSprite;
use crate::error::ShatterError;
use crate::renderer::traits::TextureProvider;

/// All fragments of one shatter, owned together and dropped together.
#[derive(Debug, Clone)]
pub struct ShatterResult {
    image_size: Vec2,
    cell_size: Vec2,
    grid: GridResolution,
    max_distance: f32,
    fragments: Vec<Fragment>,
}

impl ShatterResult {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn image_size(&self) -> Vec2 {
        self.image_size
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn grid(&self) -> GridResolution {
        self.grid
    }

    /// Blast intensity reference: distance of the corner cell centers.
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Look up the fragment for a cell half.
    pub fn fragment(&self, col: u32, row: u32, variant: TriangleVariant) -> Option<&Fragment> {
        if col >= self.grid.cols as u32 || row >= self.grid.rows as u32 {
            return None;
        }
        let cell = row as usize * self.grid.cols as usize + col as usize;
        self.fragments.get(cell * 2 + variant.index())
    }

    /// Whether every fragment carries a motion profile.
    pub fn has_trajectories(&self) -> bool {
        self.fragments.iter().all(|f| f.motion.is_some())
    }

    /// Draw a motion profile for every fragment, in fragment order.
    ///
    /// Profiles are drawn once; calling this again leaves existing profiles
    /// untouched and consumes no randomness.
    pub fn generate_trajectories(&mut self, tuning: &ShatterTuning, rng: &mut Rng) {
        for fragment in &mut self.fragments {
            if fragment.motion.is_none() {
                fragment.motion = Some(generate_trajectory(fragment, tuning, rng));
            }
        }
    }

    /// Poses of all fragments at `progress`, in fragment order.
    pub fn poses(&self, progress: f32, floor_y: Option<f32>) -> impl Iterator<Item = FragmentPose> + '_ {
        self.fragments.iter().map(move |f| f.pose(progress, floor_y))
    }
}

/// A sprite after shattering: the pieces, one sub-texture per piece, and the
/// transform of the sprite they replace.
#[derive(Debug, Clone)]
pub struct ShatteredSprite<T> {
    /// World position of the shatter root (the old sprite center).
    pub pos: Vec2,
    /// Root rotation in radians.
    pub rotation: f32,
    pub z: f32,
    pub animation: AnimationMode,
    pub show_heatmap: bool,
    pub result: ShatterResult,
    /// Parallel to `result.fragments()`.
    pub textures: Vec<T>,
}

impl<T> ShatteredSprite<T> {
    /// Tint for fragment `index`: the heatmap gradient if enabled, white otherwise.
    pub fn tint(&self, index: usize) -> [f32; 3] {
        match self.result.fragments().get(index) {
            Some(f) if self.show_heatmap => heatmap_color(f.blast_intensity),
            _ => NO_TINT,
        }
    }

    /// Move a pose from shatter-local space into world space.
    pub fn to_world(&self, pose: FragmentPose) -> FragmentPose {
        FragmentPose {
            position: self.pos + Vec2::from_angle(self.rotation).rotate(pose.position),
            rotation: self.rotation + pose.rotation,
            ..pose
        }
    }
}

/// Shatter a textured sprite.
///
/// Clamps the configured grid, cuts the sprite's texture region into
/// fragments, requests one sub-texture per fragment from `provider`, draws all
/// trajectories from `rng`, and hides the sprite. Fails before touching
/// anything if the sprite has no texture or a degenerate size.
pub fn shatter_sprite<P: TextureProvider>(
    sprite: &mut ShatterSprite,
    config: &ShatterConfig,
    rng: &mut Rng,
    provider: &mut P,
) -> Result<ShatteredSprite<P::SubTexture>, ShatterError> {
    let texture = sprite.texture.ok_or(ShatterError::MissingTexture)?;
    let grid = config.grid.clamped();

    let mut result = decompose(sprite.size, texture.rect, grid)?;
    result.generate_trajectories(&config.tuning, rng);

    let textures = result
        .fragments()
        .iter()
        .map(|f| provider.sub_texture(texture.atlas, f.source_region))
        .collect();

    sprite.visible = false;
    log::debug!(
        "shattered sprite at ({:.1}, {:.1}) into {} pieces, {:?} animation",
        sprite.pos.x, sprite.pos.y, result.len(), config.animation
    );

    Ok(ShatteredSprite {
        pos: sprite.pos,
        rotation: sprite.rotation,
        z: sprite.z,
        animation: config.animation,
        show_heatmap: config.show_heatmap,
        result,
        textures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::{AtlasId, TextureRect};

    fn sprite() -> ShatterSprite {
        ShatterSprite::new(Vec2::new(100.0, 100.0))
            .with_pos(Vec2::new(300.0, 200.0))
            .with_texture(AtlasId(2), TextureRect::new(0.0, 0.0, 0.5, 1.0))
    }

    fn regions() -> impl FnMut(AtlasId, TextureRect) -> (AtlasId, TextureRect) {
        |atlas, rect| (atlas, rect)
    }

    #[test]
    fn shatter_requests_one_texture_per_fragment() {
        let mut sprite = sprite();
        let config = ShatterConfig::default().with_grid(2, 3);
        let shattered = shatter_sprite(&mut sprite, &config, &mut Rng::new(1), &mut regions()).unwrap();

        assert_eq!(shattered.result.len(), 12);
        assert_eq!(shattered.textures.len(), 12);
        for (f, (atlas, rect)) in shattered.result.fragments().iter().zip(&shattered.textures) {
            assert_eq!(*atlas, AtlasId(2));
            assert_eq!(*rect, f.source_region);
        }
        assert!(shattered.result.has_trajectories());
        assert!(!sprite.visible);
        assert_eq!(shattered.pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn missing_texture_fails_without_side_effects() {
        let mut sprite = ShatterSprite::new(Vec2::new(100.0, 100.0));
        let mut calls = 0;
        let err = shatter_sprite(
            &mut sprite,
            &ShatterConfig::default(),
            &mut Rng::new(1),
            &mut |_: AtlasId, _: TextureRect| calls += 1,
        )
        .unwrap_err();
        assert!(matches!(err, ShatterError::MissingTexture));
        assert_eq!(calls, 0);
        assert!(sprite.visible);
    }

    #[test]
    fn degenerate_sprite_is_rejected() {
        let mut sprite = sprite();
        sprite.size = Vec2::new(0.0, 50.0);
        let err = shatter_sprite(&mut sprite, &ShatterConfig::default(), &mut Rng::new(1), &mut regions())
            .unwrap_err();
        assert!(matches!(err, ShatterError::InvalidGeometry { .. }));
        assert!(sprite.visible);
    }

    #[test]
    fn configured_grid_is_clamped() {
        let mut sprite = sprite();
        let config = ShatterConfig::default().with_grid(1, 40);
        let shattered = shatter_sprite(&mut sprite, &config, &mut Rng::new(1), &mut regions()).unwrap();
        assert_eq!(shattered.result.grid(), GridResolution::new(2, 24));
        assert_eq!(shattered.result.len(), 96);
    }

    #[test]
    fn same_seed_same_shatter() {
        let config = ShatterConfig::default().with_grid(6, 6);
        let a = shatter_sprite(&mut sprite(), &config, &mut Rng::new(77), &mut regions()).unwrap();
        let b = shatter_sprite(&mut sprite(), &config, &mut Rng::new(77), &mut regions()).unwrap();
        let c = shatter_sprite(&mut sprite(), &config, &mut Rng::new(78), &mut regions()).unwrap();
        assert_eq!(a.result.fragments(), b.result.fragments());
        assert_ne!(a.result.fragments(), c.result.fragments());
    }

    #[test]
    fn trajectories_are_drawn_once() {
        let mut result = decompose(Vec2::new(40.0, 40.0), TextureRect::FULL, GridResolution::new(2, 2)).unwrap();
        let mut rng = Rng::new(3);
        result.generate_trajectories(&ShatterTuning::default(), &mut rng);
        let first = result.fragments().to_vec();
        result.generate_trajectories(&ShatterTuning::default(), &mut rng);
        assert_eq!(result.fragments(), &first[..]);
    }

    #[test]
    fn fragment_lookup_follows_row_major_order() {
        let result = decompose(Vec2::new(30.0, 20.0), TextureRect::FULL, GridResolution::new(3, 2)).unwrap();
        let f = result.fragment(2, 1, TriangleVariant::LowerRight).unwrap();
        assert_eq!(f.cell, (2, 1));
        assert_eq!(f.variant, TriangleVariant::LowerRight);
        assert!(result.fragment(3, 0, TriangleVariant::UpperLeft).is_none());
    }

    #[test]
    fn poses_start_at_rest() {
        let mut sprite = sprite();
        let shattered =
            shatter_sprite(&mut sprite, &ShatterConfig::default(), &mut Rng::new(9), &mut regions()).unwrap();
        for (pose, f) in shattered.result.poses(0.0, Some(DEFAULT_FLOOR_Y)).zip(shattered.result.fragments()) {
            assert_eq!(pose.position, f.rest_position);
            assert_eq!(pose.alpha, 1.0);
        }
        assert!(shattered.result.poses(1.0, None).all(|p| p.alpha == 0.0));
    }

    #[test]
    fn heatmap_tint_only_when_enabled() {
        let config = ShatterConfig::default().with_grid(2, 2);
        let plain = shatter_sprite(&mut sprite(), &config, &mut Rng::new(1), &mut regions()).unwrap();
        assert_eq!(plain.tint(0), NO_TINT);

        let heat = shatter_sprite(&mut sprite(), &config.with_heatmap(true), &mut Rng::new(1), &mut regions())
            .unwrap();
        assert_eq!(heat.tint(0), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn world_transform_follows_root() {
        let mut sprite = sprite().with_rotation(std::f32::consts::FRAC_PI_2);
        let shattered =
            shatter_sprite(&mut sprite, &ShatterConfig::default(), &mut Rng::new(1), &mut regions()).unwrap();
        let world = shattered.to_world(FragmentPose::at_rest(Vec2::new(10.0, 0.0)));
        assert!((world.position - Vec2::new(300.0, 210.0)).length() < 1e-4);
        assert!((world.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
