/// Fixed-step progress driver.
///
/// Turns variable frame deltas into whole ticks of `dt` and advances a
/// normalized progress value by `step` per tick, so playback speed does not
/// depend on frame rate. Used to auto-play a manually scrubbable shatter.
#[derive(Debug, Clone)]
pub struct ProgressClock {
    /// The fixed delta time per tick.
    dt: f32,
    /// Progress added per tick.
    step: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    progress: f32,
    running: bool,
}

impl ProgressClock {
    /// Most ticks run for a single frame, so a stalled tab does not jump
    /// straight to the end.
    const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32, step: f32) -> Self {
        Self {
            dt,
            step,
            accumulator: 0.0,
            progress: 0.0,
            running: false,
        }
    }

    pub fn from_config(config: &crate::api::config::PlaybackConfig) -> Self {
        Self::new(config.fixed_dt, config.progress_step)
    }

    /// Add frame time. Returns the number of fixed ticks that advanced progress.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !self.running || self.dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;

        self.progress = (self.progress + steps as f32 * self.step).min(1.0);
        if self.progress >= 1.0 {
            self.running = false;
        }
        steps
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Jump to `progress` (e.g. from a scrub bar). Stops auto-advancing.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Start auto-advancing from the current progress.
    pub fn start(&mut self) {
        self.running = self.progress < 1.0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Back to progress 0, stopped.
    pub fn reset(&mut self) {
        self.set_progress(0.0);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
