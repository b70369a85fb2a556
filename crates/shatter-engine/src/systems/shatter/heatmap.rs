//! Debug colorization of fragments by blast intensity.

/// Tint for a piece hit with `intensity` in [0, 1]: red at the blast
/// origin, cyan at the corners.
pub fn heatmap_color(intensity: f32) -> [f32; 3] {
    let i = intensity.clamp(0.0, 1.0);
    [i, 1.0 - i, 1.0 - i]
}

/// Untinted fragments multiply by white.
pub const NO_TINT: [f32; 3] = [1.0, 1.0, 1.0];
