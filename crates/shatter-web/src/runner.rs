use glam::Vec2;
use shatter_engine::{
    shatter_sprite, AnimationMode, AtlasId, AtlasRegions, AutoPlayback, FragmentBuffer,
    FragmentPose, ProgressClock, Rng, ShatterConfig, ShatterError, ShatterSprite,
    ShatteredSprite, TextureRect,
};

/// Drives one shattered sprite for the browser.
///
/// The page supplies frame deltas and scrub positions; the runner keeps the
/// render buffers up to date for SharedArrayBuffer reads.
pub struct ShatterRunner {
    config: ShatterConfig,
    sprite: ShatterSprite,
    rng: Rng,
    shattered: Option<ShatteredSprite<TextureRect>>,
    playback: AutoPlayback,
    clock: ProgressClock,
    buffer: FragmentBuffer,
}

impl ShatterRunner {
    pub fn new(config: ShatterConfig, size: Vec2, seed: u64) -> Self {
        let sprite = ShatterSprite::new(size).with_texture(AtlasId(0), TextureRect::FULL);
        let max_fragments = config.grid.clamped().fragment_count();
        Self {
            playback: AutoPlayback::new(&config.playback),
            clock: ProgressClock::from_config(&config.playback),
            buffer: FragmentBuffer::with_capacity(max_fragments),
            rng: Rng::new(seed),
            shattered: None,
            sprite,
            config,
        }
    }

    /// Restrict the sprite to part of its atlas. Applies on the next shatter.
    pub fn set_texture_rect(&mut self, rect: TextureRect) {
        self.sprite = self.sprite.clone().with_texture(AtlasId(0), rect);
    }

    /// Throw away the current pieces and shatter the sprite again.
    pub fn shatter(&mut self) -> Result<(), ShatterError> {
        self.shattered = None;
        self.sprite.visible = true;
        self.playback.restart();
        self.clock.reset();

        let shattered =
            shatter_sprite(&mut self.sprite, &self.config, &mut self.rng, &mut AtlasRegions)?;
        self.shattered = Some(shattered);
        self.rebuild();
        Ok(())
    }

    /// Reseed the random source, e.g. from the page clock.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }

    /// Scrub to `progress`. Stops any running playback.
    pub fn set_progress(&mut self, progress: f32) {
        match self.config.animation {
            AnimationMode::Manual => self.clock.set_progress(progress),
            AnimationMode::Automatic => {
                self.playback.seek(progress);
                self.playback.pause();
            }
        }
        self.rebuild();
    }

    pub fn play(&mut self) {
        match self.config.animation {
            AnimationMode::Manual => self.clock.start(),
            AnimationMode::Automatic => self.playback.resume(),
        }
    }

    pub fn pause(&mut self) {
        self.clock.stop();
        self.playback.pause();
    }

    /// Advance playback by one frame and rebuild the render buffers.
    pub fn tick(&mut self, dt: f32) {
        if self.shattered.is_none() {
            return;
        }
        match self.config.animation {
            AnimationMode::Manual => {
                self.clock.advance(dt);
            }
            AnimationMode::Automatic => {
                self.playback.tick(dt);
            }
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let Some(shattered) = &self.shattered else {
            self.buffer.clear();
            return;
        };
        match shattered.animation {
            AnimationMode::Manual => {
                let poses = shattered
                    .result
                    .poses(self.clock.progress(), self.config.tuning.floor_y);
                self.buffer.write_poses(shattered, poses);
            }
            AnimationMode::Automatic if self.playback.is_finished() => {
                // Finished pieces are removed from the scene.
                self.buffer.clear();
            }
            AnimationMode::Automatic => {
                let playback = &self.playback;
                let poses = shattered.result.fragments().iter().map(|f| match &f.motion {
                    Some(motion) => playback.sample(motion),
                    None => FragmentPose::at_rest(f.rest_position),
                });
                self.buffer.write_poses(shattered, poses);
            }
        }
    }

    pub fn progress(&self) -> f32 {
        match self.config.animation {
            AnimationMode::Manual => self.clock.progress(),
            AnimationMode::Automatic => self.playback.progress(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn fragment_count(&self) -> u32 {
        self.shattered.as_ref().map_or(0, |s| s.result.len() as u32)
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.buffer.vertices_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.buffer.vertex_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(animation: AnimationMode) -> ShatterRunner {
        let config = ShatterConfig::default().with_grid(4, 4).with_animation(animation);
        ShatterRunner::new(config, Vec2::new(200.0, 200.0), 42)
    }

    #[test]
    fn shatter_fills_buffers() {
        let mut r = runner(AnimationMode::Manual);
        assert_eq!(r.instance_count(), 0);
        r.shatter().unwrap();
        assert_eq!(r.fragment_count(), 32);
        assert_eq!(r.instance_count(), 32);
        assert_eq!(r.vertex_count(), 96);
    }

    #[test]
    fn manual_playback_advances_with_the_clock() {
        let mut r = runner(AnimationMode::Manual);
        r.shatter().unwrap();
        r.tick(1.0 / 60.0);
        assert_eq!(r.progress(), 0.0);

        r.play();
        for _ in 0..10 {
            r.tick(1.0 / 60.0);
        }
        assert!(r.progress() > 0.0);

        r.set_progress(1.0);
        assert!(r.is_finished());
        assert_eq!(r.instance_count(), 32);
    }

    #[test]
    fn automatic_pieces_are_removed_when_done() {
        let mut r = runner(AnimationMode::Automatic);
        r.shatter().unwrap();
        for _ in 0..60 {
            r.tick(0.1);
        }
        assert!(r.is_finished());
        assert_eq!(r.instance_count(), 0);

        r.shatter().unwrap();
        assert_eq!(r.progress(), 0.0);
        assert_eq!(r.instance_count(), 32);
    }

    #[test]
    fn atlas_packed_sprite_shatters() {
        let mut r = runner(AnimationMode::Manual);
        r.set_texture_rect(TextureRect::new(0.0, 0.0, 0.5, 0.5));
        r.shatter().unwrap();
        assert_eq!(r.fragment_count(), 32);
    }
}
