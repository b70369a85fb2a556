//! Closed-form fragment motion over a normalized progress axis.

use glam::Vec2;

/// Default soft floor for falling pieces.
///
/// For a piece that starts below it, the floor sits at the piece's own start
/// height instead.
pub const DEFAULT_FLOOR_Y: f32 = -160.0;

/// Effective progress after which a piece starts to fade.
const FADE_FROM: f32 = 0.9;
const FADE_SPAN: f32 = 0.1;

/// Fraction of the overshoot a piece is pushed back up by the floor.
const FLOOR_BOUNCE: f32 = -0.5;

/// Per-fragment animation parameters, drawn once at shatter time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// Rest position of the fragment.
    pub start_position: Vec2,
    /// Travel distance at full effective progress.
    pub distance: f32,
    /// Direction of travel in radians, away from the blast origin.
    pub angle: f32,
    /// Faster pieces reach their end position earlier.
    pub speed: f32,
    /// Scale delta reached at progress 1, in [-1, 1].
    pub scale: f32,
    /// Total spin in radians reached at progress 1.
    pub rotation: f32,
}

/// Where a fragment is and how it looks at a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentPose {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl FragmentPose {
    pub fn at_rest(position: Vec2) -> Self {
        Self { position, rotation: 0.0, scale: 1.0, alpha: 1.0 }
    }
}

impl MotionProfile {
    /// Unit vector of travel.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Position at full travel, ignoring the floor.
    pub fn end_position(&self) -> Vec2 {
        self.start_position + self.direction() * self.distance
    }

    /// Per-fragment progress: reaches 1 after `1 / (2 * speed)` of the global axis.
    pub fn effective_progress(&self, progress: f32) -> f32 {
        (progress * 2.0 * self.speed).min(1.0)
    }

    /// Evaluate with the default floor.
    pub fn evaluate(&self, progress: f32) -> FragmentPose {
        self.evaluate_with_floor(progress, Some(DEFAULT_FLOOR_Y))
    }

    /// Pose at global `progress` in [0, 1].
    ///
    /// Pure: any progress can be asked for in any order. Values outside
    /// [0, 1] trip a debug assertion and are clamped in release builds.
    ///
    /// A piece that drops below `floor_y` is reflected back up by half its
    /// overshoot. The floor never sits above the start position, so a piece
    /// always begins exactly at rest.
    pub fn evaluate_with_floor(&self, progress: f32, floor_y: Option<f32>) -> FragmentPose {
        debug_assert!(
            (0.0..=1.0).contains(&progress),
            "progress {} outside [0, 1]",
            progress
        );
        let progress = clamp_progress(progress);
        let effective = self.effective_progress(progress);
        let travel = self.distance * effective;

        let x = self.start_position.x + self.angle.cos() * travel;
        let mut y = self.start_position.y + self.angle.sin() * travel;
        if let Some(floor) = floor_y {
            let floor = floor.min(self.start_position.y);
            if y < floor {
                y = floor + (y - floor) * FLOOR_BOUNCE;
            }
        }

        // Slow pieces never reach full effective progress; the global axis
        // still finishes their fade.
        let fade = effective.max(progress);
        let alpha = (1.0 - (fade - FADE_FROM).max(0.0) / FADE_SPAN).clamp(0.0, 1.0);

        FragmentPose {
            position: Vec2::new(x, y),
            rotation: self.rotation * progress,
            scale: 1.0 + progress * self.scale,
            alpha,
        }
    }
}

/// NaN and infinities map to the start of the axis.
fn clamp_progress(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
