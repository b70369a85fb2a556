//! Contracts with the external renderer.
//!
//! The engine never loads or draws textures itself. It asks a
//! [`TextureProvider`] for a drawable sub-image per fragment and hands the
//! renderer flat buffers (see `instance.rs`).

use crate::components::sprite::{AtlasId, TextureRect};

/// Produces a drawable sub-image of an atlas texture.
///
/// Called once per fragment, in fragment order, while shattering.
pub trait TextureProvider {
    type SubTexture;

    fn sub_texture(&mut self, atlas: AtlasId, region: TextureRect) -> Self::SubTexture;
}

impl<F, T> TextureProvider for F
where
    F: FnMut(AtlasId, TextureRect) -> T,
{
    type SubTexture = T;

    fn sub_texture(&mut self, atlas: AtlasId, region: TextureRect) -> T {
        self(atlas, region)
    }
}

/// Provider for GPU renderers that sample the atlas directly: the sub-texture
/// is just the UV rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtlasRegions;

impl TextureProvider for AtlasRegions {
    type SubTexture = TextureRect;

    fn sub_texture(&mut self, _atlas: AtlasId, region: TextureRect) -> TextureRect {
        region
    }
}
