//! Browser glue: canvas / score element setup, pointer + keyboard listeners and the
//! `requestAnimationFrame` driver. All game rules live in `game`; this module only
//! wires DOM events to it.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, window};

use crate::audio::HtmlAudio;
use crate::config::GameConfig;
use crate::display::ElementScore;
use crate::error::GameError;
use crate::game::{Game, StopToken};

pub(crate) fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(crate) fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Convert viewport (client) coordinates to canvas-local ones using the canvas'
/// on-screen bounding rectangle.
pub fn surface_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

struct Running {
    game: Game,
    ctx: CanvasRenderingContext2d,
    stop: StopToken,
}

thread_local! {
    static GAME: RefCell<Option<Running>> = const { RefCell::new(None) };
    static KEYS_BOUND: Cell<bool> = const { Cell::new(false) };
}

const BOUND_ATTR: &str = "data-mr-bound";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn start_with(config: GameConfig) -> Result<(), JsValue> {
    config.validate()?;

    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas = ensure_canvas(&doc, &config)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()?;
    let score_el = ensure_score(&doc, &config)?;

    let audio = HtmlAudio::new(&config.click_sound, &config.burn_sound);
    if !audio.is_complete() {
        cwarn("marshmallow-roast: audio cue unavailable, playing silently");
    }
    let game = Game::new(
        config,
        Box::new(audio),
        Box::new(ElementScore::new(score_el)),
    )?;
    clog(&format!(
        "marshmallow-roast: {} marshmallows on {:?} screen",
        game.marshmallows().len(),
        game.screen()
    ));

    // Setup succeeded; only now retire the previous game's loop so a failed restart
    // leaves it running.
    stop();
    let stop = StopToken::new();
    GAME.with(|g| {
        g.replace(Some(Running {
            game,
            ctx,
            stop: stop.clone(),
        }))
    });

    install_click(&canvas)?;
    install_keys(&doc)?;
    start_loop(stop);
    Ok(())
}

/// Ask the running loop to stop after the current frame.
pub fn stop() {
    GAME.with(|g| {
        if let Some(running) = g.borrow().as_ref() {
            running.stop.stop();
        }
    });
}

/// True while a game is installed and its loop has not been asked to stop.
pub fn is_running() -> bool {
    GAME.with(|g| {
        g.borrow()
            .as_ref()
            .is_some_and(|r| !r.stop.is_stopped())
    })
}

pub fn score() -> i64 {
    GAME.with(|g| g.borrow().as_ref().map(|r| r.game.score()).unwrap_or(0))
}

fn ensure_canvas(doc: &Document, config: &GameConfig) -> Result<HtmlCanvasElement, JsValue> {
    // Create / reuse canvas with the configured id
    if let Some(el) = doc.get_element_by_id(&config.canvas_id) {
        let c: HtmlCanvasElement = el.dyn_into()?;
        c.set_width(config.surface_width);
        c.set_height(config.surface_height);
        return Ok(c);
    }
    let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    c.set_id(&config.canvas_id);
    c.set_width(config.surface_width);
    c.set_height(config.surface_height);
    c.set_attribute("style", "display:block; margin:24px auto; background:#2b1d14; border-radius:12px; border:2px solid #222;").ok();
    doc.body().ok_or(GameError::NoBody)?.append_child(&c)?;
    Ok(c)
}

fn ensure_score(doc: &Document, config: &GameConfig) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(&config.score_id) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(&config.score_id);
    div.set_attribute("style", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:18px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45;").ok();
    doc.body().ok_or(GameError::NoBody)?.append_child(&div)?;
    Ok(div)
}

/// Listeners read the game through `GAME`, so a restart reuses them; bind once per canvas.
fn install_click(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    if canvas.has_attribute(BOUND_ATTR) {
        return Ok(());
    }
    canvas.set_attribute(BOUND_ATTR, "1")?;
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let (x, y) = surface_point(
            evt.client_x() as f64,
            evt.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        GAME.with(|g| {
            if let Some(running) = g.borrow_mut().as_mut() {
                let before = running.game.screen();
                forward_click(&mut running.game, &running.stop, x, y);
                let after = running.game.screen();
                if before != after {
                    clog(&format!("marshmallow-roast: {before:?} -> {after:?}"));
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// A stopped game no longer repaints, so it must not take input either.
fn forward_click(game: &mut Game, stop: &StopToken, x: f64, y: f64) -> Option<i64> {
    if stop.is_stopped() {
        return None;
    }
    Some(game.click(x, y))
}

fn install_keys(doc: &Document) -> Result<(), JsValue> {
    if KEYS_BOUND.with(|b| b.replace(true)) {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if evt.key() != "Enter" {
            return;
        }
        GAME.with(|g| {
            if let Some(running) = g.borrow_mut().as_mut() {
                if running.stop.is_stopped() {
                    return;
                }
                if let Some(t) = running.game.advance_screen() {
                    clog(&format!("marshmallow-roast: {:?} -> {:?}", t.from, t.to));
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Once `stop` is set the callback returns without rescheduling. The closure itself stays
/// alive in its own `Rc` cycle, like the forgotten listeners; one is leaked per start.
fn start_loop(stop: StopToken) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if stop.is_stopped() {
            clog("marshmallow-roast: loop stopped");
            return;
        }
        GAME.with(|cell| {
            if let Some(running) = cell.borrow_mut().as_mut() {
                let Running { game, ctx, .. } = running;
                game.frame(ctx);
            }
        });
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
