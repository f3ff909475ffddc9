//! Drawing. Everything here is a pure function of game state painted onto a `Surface`;
//! nothing is mutated.

use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;

use crate::marshmallow::Marshmallow;
use crate::screen::Screen;

/// Minimal 2d drawing surface. Implemented for the browser canvas and for `DrawLog`.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    /// Filled circular sector from `start` to `end` (radians, clockwise on canvas).
    fn fill_arc(&mut self, x: f64, y: f64, r: f64, start: f64, end: f64, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: &str) {
        self.fill_arc(x, y, r, 0.0, TAU, color);
    }
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_arc(&mut self, x: f64, y: f64, r: f64, start: f64, end: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        self.arc(x, y, r, start, end).ok();
        self.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str) {
        self.set_font(font);
        self.set_text_align("center");
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Arc {
        x: f64,
        y: f64,
        r: f64,
        start: f64,
        end: f64,
        color: String,
    },
    Rect {
        color: String,
    },
    Text {
        text: String,
    },
}

/// Surface that records calls instead of painting. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct DrawLog {
    pub ops: Vec<DrawOp>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Clear).count()
    }
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawLog {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.ops.push(DrawOp::Clear);
    }
    fn fill_arc(&mut self, x: f64, y: f64, r: f64, start: f64, end: f64, color: &str) {
        self.ops.push(DrawOp::Arc {
            x,
            y,
            r,
            start,
            end,
            color: color.to_string(),
        });
    }
    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, color: &str) {
        self.ops.push(DrawOp::Rect {
            color: color.to_string(),
        });
    }
    fn fill_text(&mut self, text: &str, _x: f64, _y: f64, _font: &str, _color: &str) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
        });
    }
}

// --- Marshmallow -------------------------------------------------------------

const FACE_COLOR: &str = "#000";
const EYE_DX: f64 = 8.0;
const EYE_DY: f64 = -10.0;
const EYE_R: f64 = 3.0;
const MOUTH_DY: f64 = 5.0;
const MOUTH_R: f64 = 4.0;

/// Body coloured by stage, two dot eyes and a half-disc mouth, all centred on the
/// marshmallow's position.
pub fn draw_marshmallow<S: Surface + ?Sized>(s: &mut S, m: &Marshmallow) {
    let (x, y) = (m.x(), m.y());
    s.fill_circle(x, y, m.radius(), m.stage().color());
    s.fill_circle(x - EYE_DX, y + EYE_DY, EYE_R, FACE_COLOR);
    s.fill_circle(x + EYE_DX, y + EYE_DY, EYE_R, FACE_COLOR);
    s.fill_arc(x, y + MOUTH_DY, MOUTH_R, 0.0, PI, FACE_COLOR);
}

// --- Screen overlays ---------------------------------------------------------

const TITLE_FONT: &str = "32px 'Fira Code', monospace";
const HINT_FONT: &str = "16px 'Fira Code', monospace";

/// Dimmed backdrop plus text for the non-gameplay screens. Gameplay has no overlay.
pub fn draw_overlay<S: Surface + ?Sized>(s: &mut S, screen: Screen, score: i64, w: f64, h: f64) {
    let (title, hint) = match screen {
        Screen::Gameplay => return,
        Screen::Title => (
            "Marshmallow Roast".to_string(),
            "Click or press Enter to start",
        ),
        Screen::Ending => (
            format!("Congratulations! {score}"),
            "Click or press Enter to return to the title",
        ),
    };
    s.fill_rect(0.0, 0.0, w, h, "rgba(0,0,0,0.55)");
    s.fill_text(&title, w / 2.0, h / 2.0 - 20.0, TITLE_FONT, "#ffd166");
    s.fill_text(hint, w / 2.0, h / 2.0 + 24.0, HINT_FONT, "#dddddd");
}
