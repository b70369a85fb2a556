// extensions/mod.rs
//
// Optional playback helpers layered over the pure motion evaluator.
// Drivers that supply their own progress never need these.

pub mod easing;
pub mod playback;

pub use easing::{Easing, lerp_vec2};
pub use playback::AutoPlayback;
