pub mod geometry;
pub mod instance;
pub mod traits;

pub use geometry::{build_fragment_vertices, FRAGMENT_VERTEX_FLOATS};
pub use instance::{FragmentBuffer, FragmentInstance};
pub use traits::{AtlasRegions, TextureProvider};
