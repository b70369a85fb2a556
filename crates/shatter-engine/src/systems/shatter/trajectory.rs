//! Random outward trajectories for shattered fragments.
//!
//! Random draws per fragment, always in this order: distance, speed,
//! fly-out check, rotation, scale. Keeping the order fixed makes a seeded
//! shatter replay bit-for-bit.

use glam::Vec2;

use super::fragment::Fragment;
use super::motion::MotionProfile;
use super::rng::Rng;
use crate::api::config::ShatterTuning;

/// Distance from the blast origin to the corner-most cell center.
///
/// Computed once per shatter so every fragment is normalized against the
/// same reference.
pub fn max_blast_distance(image_size: Vec2, cell_size: Vec2) -> f32 {
    Vec2::new(
        -(image_size.x / 2.0) + cell_size.x / 2.0,
        -(image_size.y / 2.0) + cell_size.y / 2.0,
    )
    .length()
}

/// How hard the blast hits a piece at `rest_position`: 1 at the origin,
/// 0 at the corners. A single-cell grid has nothing farther out, so its one
/// cell takes the full blast.
pub fn blast_intensity(rest_position: Vec2, max_distance: f32) -> f32 {
    if max_distance <= f32::EPSILON {
        return 1.0;
    }
    (1.0 - rest_position.length() / max_distance).clamp(0.0, 1.0)
}

/// Draw a motion profile for one fragment.
pub fn generate_trajectory(
    fragment: &Fragment,
    tuning: &ShatterTuning,
    rng: &mut Rng,
) -> MotionProfile {
    let start = fragment.rest_position;
    let angle = start.y.atan2(start.x);

    let distance = tuning.distance_min + tuning.distance_range * rng.next_f32();

    let mut speed = tuning.speed_base
        + tuning.speed_intensity * fragment.blast_intensity
        + tuning.speed_random * rng.next_f32();
    // Always drawn, even when disabled, so later draws stay aligned.
    let fly_out = rng.next_int(tuning.fly_out_chance.max(1)) == 0;
    if fly_out && tuning.fly_out_chance > 0 {
        speed += tuning.fly_out_bonus;
    }

    let rotation = angle * tuning.spin * rng.next_f32() * fragment.variant.spin_sign();
    let scale = rng.next_f32() * 2.0 - 1.0;

    MotionProfile {
        start_position: start,
        distance,
        angle,
        speed,
        scale,
        rotation,
    }
}
