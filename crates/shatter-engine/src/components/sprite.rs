use glam::Vec2;

/// Identifies which texture atlas a sprite belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Normalized rectangle inside a texture (origin + size, unit interval).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextureRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextureRect {
    /// The whole texture. Used when the image is not atlas-packed.
    pub const FULL: TextureRect = TextureRect { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Sub-rectangle for grid cell (`col`, `row`) of a `cols` x `rows` split.
    ///
    /// Both edges come from the same boundary formula, so neighbouring cells
    /// share their edge coordinates bit for bit.
    pub fn cell(&self, col: u32, row: u32, cols: u32, rows: u32) -> TextureRect {
        let edge_x = |i: u32| i as f32 / cols as f32 * self.width + self.x;
        let edge_y = |i: u32| i as f32 / rows as f32 * self.height + self.y;
        let (x0, x1) = (edge_x(col), edge_x(col + 1));
        let (y0, y1) = (edge_y(row), edge_y(row + 1));
        TextureRect { x: x0, y: y0, width: x1 - x0, height: y1 - y0 }
    }
}

/// Texture binding for a sprite: which atlas, and where in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTexture {
    pub atlas: AtlasId,
    pub rect: TextureRect,
}

/// A textured sprite that can be shattered.
///
/// `pos`, `rotation` and `z` are carried over to the shatter root so the
/// fragments appear exactly where the sprite stood.
#[derive(Debug, Clone)]
pub struct ShatterSprite {
    /// Rendered size in world units.
    pub size: Vec2,
    /// Center position in world space.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Draw order.
    pub z: f32,
    /// Texture to cut from. `None` means nothing to shatter.
    pub texture: Option<SpriteTexture>,
    /// Hidden once shattered.
    pub visible: bool,
}

impl ShatterSprite {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            pos: Vec2::ZERO,
            rotation: 0.0,
            z: 0.0,
            texture: None,
            visible: true,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    pub fn with_texture(mut self, atlas: AtlasId, rect: TextureRect) -> Self {
        self.texture = Some(SpriteTexture { atlas, rect });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rect_cells_share_edges() {
        let a = TextureRect::FULL.cell(0, 0, 4, 2);
        let b = TextureRect::FULL.cell(1, 0, 4, 2);
        assert_eq!(a.max_x(), b.x);
        assert_eq!(a.height, 0.5);
    }

    #[test]
    fn atlas_cell_is_offset_into_rect() {
        let rect = TextureRect::new(0.5, 0.25, 0.5, 0.5);
        let cell = rect.cell(1, 1, 2, 2);
        assert_eq!(cell, TextureRect::new(0.75, 0.5, 0.25, 0.25));
    }

    #[test]
    fn new_sprite_has_no_texture() {
        let sprite = ShatterSprite::new(Vec2::new(10.0, 20.0));
        assert!(sprite.texture.is_none());
        assert!(sprite.visible);
    }
}
