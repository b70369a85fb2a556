pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::{AnimationMode, GridResolution, PlaybackConfig, ShatterConfig, ShatterTuning};
pub use components::sprite::{AtlasId, ShatterSprite, SpriteTexture, TextureRect};
pub use crate::core::time::ProgressClock;
pub use error::ShatterError;
pub use systems::shatter::{
    decompose, shatter_sprite, generate_trajectory, blast_intensity, max_blast_distance,
    heatmap_color, Fragment, FragmentPose, MotionProfile, Rng, ShatterResult, ShatteredSprite,
    TriangleVariant, DEFAULT_FLOOR_Y,
};
pub use renderer::{
    build_fragment_vertices, AtlasRegions, FragmentBuffer, FragmentInstance, TextureProvider,
};

// Extensions: optional playback layer
pub use extensions::{AutoPlayback, Easing};
