//! WASM bridge: lets a browser page shatter a sprite, scrub or play the
//! effect, and read the render buffers straight out of linear memory.
//!
//! Call `shatter_init` once, then `shatter_tick(dt)` every frame and read
//! `get_instances_ptr` / `get_instance_count` (16 floats per fragment) or
//! `get_vertices_ptr` / `get_vertex_count` (5 floats per vertex).

pub mod runner;

pub use runner::ShatterRunner;

use std::cell::RefCell;

use glam::Vec2;
use shatter_engine::{FragmentInstance, ShatterConfig, TextureRect};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ShatterRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ShatterRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

fn install(config: ShatterConfig, width: f32, height: f32) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = ShatterRunner::new(config, Vec2::new(width, height), clock_seed());
    let ok = match runner.shatter() {
        Ok(()) => {
            log::info!("shatter: {} fragments", runner.fragment_count());
            true
        }
        Err(err) => {
            log::error!("shatter: {}", err);
            false
        }
    };
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
    ok
}

/// Shatter a `width` x `height` sprite into a `cols` x `rows` grid
/// (clamped to 2..=24) with default settings.
#[wasm_bindgen]
pub fn shatter_init(width: f32, height: f32, cols: i32, rows: i32) -> bool {
    install(ShatterConfig::default().with_grid(cols, rows), width, height)
}

/// Same as `shatter_init`, with every setting taken from a JSON config.
#[wasm_bindgen]
pub fn shatter_init_with_config(width: f32, height: f32, json: &str) -> bool {
    match ShatterConfig::from_json(json) {
        Ok(config) => install(config, width, height),
        Err(err) => {
            log::error!("shatter: {}", err);
            false
        }
    }
}

/// Shatter again with fresh randomness.
#[wasm_bindgen]
pub fn shatter_reset() -> bool {
    with_runner(|r| {
        r.reseed(clock_seed());
        r.shatter()
    })
    .map_or(false, |result| result.is_ok())
}

/// Shatter again with a fixed seed, for reproducible captures.
#[wasm_bindgen]
pub fn shatter_reset_seeded(seed: f64) -> bool {
    with_runner(|r| {
        r.reseed(seed as u64);
        r.shatter()
    })
    .map_or(false, |result| result.is_ok())
}

/// Atlas region of the sprite texture, used from the next reset on.
#[wasm_bindgen]
pub fn shatter_set_texture_rect(x: f32, y: f32, width: f32, height: f32) {
    with_runner(|r| r.set_texture_rect(TextureRect::new(x, y, width, height)));
}

#[wasm_bindgen]
pub fn shatter_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn shatter_set_progress(progress: f32) {
    with_runner(|r| r.set_progress(progress));
}

#[wasm_bindgen]
pub fn shatter_play() {
    with_runner(|r| r.play());
}

#[wasm_bindgen]
pub fn shatter_pause() {
    with_runner(|r| r.pause());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_progress() -> f32 {
    with_runner(|r| r.progress()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn is_finished() -> bool {
    with_runner(|r| r.is_finished()).unwrap_or(true)
}

#[wasm_bindgen]
pub fn get_fragment_count() -> u32 {
    with_runner(|r| r.fragment_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    FragmentInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vertices_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_vertex_count() -> u32 {
    with_runner(|r| r.vertex_count()).unwrap_or(0)
}
