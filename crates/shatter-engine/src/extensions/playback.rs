// extensions/playback.rs
//
// Automatic, time-driven shatter playback.
// Every piece travels its full distance and spin over one fixed duration and
// fades out over the tail, independent of its speed.
//
// Usage:
//   let mut playback = AutoPlayback::new(&config.playback);
//   playback.tick(dt);
//   let pose = playback.sample(&profile);

use super::easing::{lerp_vec2, Easing};
use crate::api::config::PlaybackConfig;
use crate::systems::shatter::{FragmentPose, MotionProfile};

/// One-shot playback clock shared by every fragment of a shatter.
#[derive(Debug, Clone)]
pub struct AutoPlayback {
    /// Duration in seconds.
    pub duration: f32,
    /// Fraction of the duration after which pieces start fading.
    pub fade_start: f32,
    /// Easing for movement and spin.
    pub easing: Easing,
    /// Whether currently playing (can be paused).
    pub playing: bool,
    elapsed: f32,
}

impl AutoPlayback {
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            duration: config.duration,
            fade_start: config.fade_start.clamp(0.0, 1.0),
            easing: config.easing,
            playing: true,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns true while the animation is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.playing && !self.is_finished() {
            self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        }
        !self.is_finished()
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Rewind to the start and play again.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Jump to normalized time `t`.
    pub fn seek(&mut self, t: f32) {
        self.elapsed = t.clamp(0.0, 1.0) * self.duration.max(0.0);
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized time [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Pieces are removed once the duration has passed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Pose of `profile` at the current time.
    pub fn sample(&self, profile: &MotionProfile) -> FragmentPose {
        self.sample_at(profile, self.progress())
    }

    /// Pose of `profile` at normalized time `t`.
    ///
    /// Moves toward the full-distance end point and spins by the full
    /// rotation; scale is left alone in this mode.
    pub fn sample_at(&self, profile: &MotionProfile, t: f32) -> FragmentPose {
        let t = t.clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        let alpha = if t <= self.fade_start || self.fade_start >= 1.0 {
            1.0
        } else {
            (1.0 - (t - self.fade_start) / (1.0 - self.fade_start)).clamp(0.0, 1.0)
        };
        FragmentPose {
            position: lerp_vec2(profile.start_position, profile.end_position(), eased),
            rotation: profile.rotation * eased,
            scale: 1.0,
            alpha: if t >= 1.0 { 0.0 } else { alpha },
        }
    }
}
