// Browser smoke tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use marshmallow_roast::{GameConfig, current_score, is_running, start_game, stop_game};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_creates_canvas_and_score() {
    start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let cfg = GameConfig::default();
    assert!(doc.get_element_by_id(&cfg.canvas_id).is_some());
    let score = doc.get_element_by_id(&cfg.score_id).unwrap();
    assert_eq!(score.text_content().as_deref(), Some("0"));
    assert_eq!(current_score(), 0);
    stop_game();
}

#[wasm_bindgen_test]
fn restart_reuses_elements() {
    start_game().unwrap();
    start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas = doc
        .get_element_by_id(&GameConfig::default().canvas_id)
        .unwrap();
    assert!(canvas.has_attribute("data-mr-bound"));
    stop_game();
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen_test]
fn failed_restart_keeps_current_game_running() {
    use marshmallow_roast::start_game_with_config;

    start_game().unwrap();
    assert!(is_running());
    // the score element is a div, so it cannot become the canvas
    let id = GameConfig::default().score_id;
    let json = format!(r#"{{"canvas_id":"{id}"}}"#);
    assert!(start_game_with_config(&json).is_err());
    assert!(is_running());
    stop_game();
    assert!(!is_running());
}
