//! Marshmallow Roast core crate.
//!
//! Ten marshmallows roast over a fire: white, golden, done, burnt. Click one while it
//! is golden (+1) or done (+5); clicking a burnt one costs 2 points. The fire burns
//! hotter every frame.
//!
//! The game rules (`Game`, `Marshmallow`, grid layout, screen flow) are plain Rust and
//! run natively under `cargo test`; `web` wires them to a canvas, DOM events and
//! `requestAnimationFrame` for the browser build.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod grid;
pub mod marshmallow;
pub mod render;
pub mod screen;
pub mod web;

pub use audio::{AudioSink, Cue, RecordingAudio, SilentAudio};
pub use config::GameConfig;
pub use display::{MemoryScore, ScoreDisplay};
pub use error::GameError;
pub use game::{Game, StopToken};
pub use marshmallow::{Marshmallow, Stage, stage_for};
pub use screen::{Screen, ScreenAction};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start_with(GameConfig::default())
}

/// Start with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).inspect_err(|e| {
        web::cwarn(&format!("marshmallow-roast: rejected config: {e}"));
    })?;
    web::start_with(config)
}

#[wasm_bindgen]
pub fn stop_game() {
    web::stop();
}

#[wasm_bindgen]
pub fn is_running() -> bool {
    web::is_running()
}

#[wasm_bindgen]
pub fn current_score() -> i64 {
    web::score()
}
