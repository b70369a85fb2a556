use serde::{Deserialize, Serialize};

use crate::error::ShatterError;
use crate::extensions::easing::Easing;

/// Number of columns and rows a sprite is cut into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResolution {
    pub cols: i32,
    pub rows: i32,
}

impl GridResolution {
    /// Smallest grid the configuration surface allows per axis.
    pub const MIN: i32 = 2;
    /// Largest grid per axis; bounds a shatter to 24 * 24 * 2 fragments.
    pub const MAX: i32 = 24;

    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// Clamp both axes into [`Self::MIN`, `Self::MAX`].
    pub fn clamped(self) -> Self {
        let clamped = Self {
            cols: self.cols.clamp(Self::MIN, Self::MAX),
            rows: self.rows.clamp(Self::MIN, Self::MAX),
        };
        if clamped != self {
            log::warn!(
                "grid {}x{} clamped to {}x{}",
                self.cols, self.rows, clamped.cols, clamped.rows
            );
        }
        clamped
    }

    /// Largest fragment count a clamped grid can produce.
    pub const MAX_FRAGMENTS: usize = (Self::MAX * Self::MAX * 2) as usize;

    /// Saturates instead of overflowing for unclamped grids.
    pub fn fragment_count(&self) -> usize {
        (self.cols.max(0) as usize)
            .saturating_mul(self.rows.max(0) as usize)
            .saturating_mul(2)
    }
}

impl Default for GridResolution {
    fn default() -> Self {
        Self { cols: 8, rows: 16 }
    }
}

/// How the fragments are animated once the sprite is shattered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// One-shot time-based playback (see [`crate::extensions::playback::AutoPlayback`]).
    #[default]
    Automatic,
    /// Progress is supplied from outside, e.g. a scrub bar.
    Manual,
}

/// Constants that shape the trajectory of every fragment.
///
/// Defaults reproduce the classic look: pieces travel 100..200 units, about
/// one in six gets a large speed bonus, and anything falling below y = -160
/// bounces back up by half its overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShatterTuning {
    /// Minimum travel distance.
    pub distance_min: f32,
    /// Random extra distance on top of `distance_min`.
    pub distance_range: f32,
    /// Speed every fragment gets.
    pub speed_base: f32,
    /// Speed added at full blast intensity.
    pub speed_intensity: f32,
    /// Random extra speed.
    pub speed_random: f32,
    /// One in `fly_out_chance` fragments gets `fly_out_bonus`. 0 disables it.
    pub fly_out_chance: u32,
    pub fly_out_bonus: f32,
    /// Spin multiplier applied to the blast angle.
    pub spin: f32,
    /// Soft floor for the falling pieces. `None` lets them fall freely.
    pub floor_y: Option<f32>,
}

impl Default for ShatterTuning {
    fn default() -> Self {
        Self {
            distance_min: 100.0,
            distance_range: 100.0,
            speed_base: 0.3,
            speed_intensity: 0.6,
            speed_random: 1.5,
            fly_out_chance: 6,
            fly_out_bonus: 4.0,
            spin: 24.0,
            floor_y: Some(-160.0),
        }
    }
}

/// Timing for the automatic player and the manual progress clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Total automatic animation length in seconds.
    pub duration: f32,
    /// Fraction of `duration` after which pieces start to fade.
    pub fade_start: f32,
    /// Easing for automatic movement and spin.
    pub easing: Easing,
    /// Fixed tick length used when a driver auto-advances manual progress.
    pub fixed_dt: f32,
    /// Progress added per fixed tick in that mode.
    pub progress_step: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            fade_start: 0.75,
            easing: Easing::Linear,
            fixed_dt: 1.0 / 60.0,
            progress_step: 0.008,
        }
    }
}

/// Everything a caller can tweak about a shatter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShatterConfig {
    pub grid: GridResolution,
    pub animation: AnimationMode,
    /// Tint each fragment by its blast intensity.
    pub show_heatmap: bool,
    pub tuning: ShatterTuning,
    pub playback: PlaybackConfig,
}

impl ShatterConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ShatterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_grid(mut self, cols: i32, rows: i32) -> Self {
        self.grid = GridResolution::new(cols, rows);
        self
    }

    pub fn with_animation(mut self, animation: AnimationMode) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_heatmap(mut self, show_heatmap: bool) -> Self {
        self.show_heatmap = show_heatmap;
        self
    }
}
