//! Game state plus the two entry points the host drives: `frame` (once per animation
//! frame) and `click` (per pointer event). Both run on the page's single thread and
//! never interleave, so `Game` needs no interior locking.

use std::cell::Cell;
use std::rc::Rc;

use crate::audio::{AudioSink, SilentAudio};
use crate::config::GameConfig;
use crate::display::{MemoryScore, ScoreDisplay};
use crate::error::GameError;
use crate::grid::create_marshmallows;
use crate::marshmallow::Marshmallow;
use crate::render::{Surface, draw_marshmallow, draw_overlay};
use crate::screen::{Screen, ScreenAction, ScreenFsm, Transition};

/// Cancellation flag shared between the frame driver and whoever wants it stopped.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn stop(&self) {
        self.0.set(true);
    }
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

pub struct Game {
    config: GameConfig,
    marshmallows: Vec<Marshmallow>,
    score: i64,
    multiplier: f64, // global difficulty, only ever grows
    fsm: ScreenFsm,
    audio: Box<dyn AudioSink>,
    display: Box<dyn ScoreDisplay>,
}

impl Game {
    pub fn new(
        config: GameConfig,
        audio: Box<dyn AudioSink>,
        mut display: Box<dyn ScoreDisplay>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let initial = if config.title_screen {
            Screen::Title
        } else {
            Screen::Gameplay
        };
        display.show(0);
        Ok(Self {
            marshmallows: create_marshmallows(&config),
            config,
            score: 0,
            multiplier: 1.0,
            fsm: ScreenFsm::new(initial),
            audio,
            display,
        })
    }

    /// No sound, score kept in memory. Handy for simulations.
    pub fn headless(config: GameConfig) -> Result<Self, GameError> {
        Self::new(config, Box::new(SilentAudio), Box::new(MemoryScore::new()))
    }

    pub fn score(&self) -> i64 {
        self.score
    }
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
    pub fn marshmallows(&self) -> &[Marshmallow] {
        &self.marshmallows
    }
    pub fn screen(&self) -> Screen {
        self.fsm.screen()
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advance state by one frame without drawing.
    pub fn tick(&mut self) {
        self.step(|_| {});
    }

    /// Clear, roast-and-draw each marshmallow in order, then raise difficulty.
    /// Off the gameplay screen the marshmallows are drawn frozen under an overlay.
    pub fn frame<S: Surface + ?Sized>(&mut self, s: &mut S) {
        let (w, h) = (
            self.config.surface_width as f64,
            self.config.surface_height as f64,
        );
        s.clear(w, h);
        self.step(|m| draw_marshmallow(&mut *s, m));
        if !self.fsm.is_playing() {
            draw_overlay(s, self.fsm.screen(), self.score, w, h);
        }
    }

    /// The one place a frame's state change happens: each marshmallow is roasted and
    /// then handed to `visit`, in order; the multiplier rises afterwards. Nothing moves
    /// off the gameplay screen.
    fn step(&mut self, mut visit: impl FnMut(&Marshmallow)) {
        let playing = self.fsm.is_playing();
        for m in &mut self.marshmallows {
            if playing {
                m.roast(self.multiplier);
            }
            visit(m);
        }
        if playing {
            self.multiplier += self.config.multiplier_step;
        }
    }

    /// Run up to `max_frames` frames, checking `token` before each. Returns how many ran.
    pub fn run_frames<S: Surface + ?Sized>(
        &mut self,
        s: &mut S,
        max_frames: u64,
        token: &StopToken,
    ) -> u64 {
        let mut ran = 0;
        while ran < max_frames && !token.is_stopped() {
            self.frame(s);
            ran += 1;
        }
        ran
    }

    /// Handle a click at surface-local coordinates; returns the total score change.
    ///
    /// Every marshmallow under the point is consumed (overlapping circles all count, in
    /// array order). On the Title / Ending screens a click advances the flow instead.
    pub fn click(&mut self, x: f64, y: f64) -> i64 {
        if !self.fsm.is_playing() {
            self.advance_screen();
            return 0;
        }
        let mut total = 0;
        for m in self.marshmallows.iter_mut().filter(|m| m.contains(x, y)) {
            let delta = m.clicked(self.audio.as_mut()) as i64;
            self.score += delta;
            total += delta;
            self.display.show(self.score);
        }
        if let Some(target) = self.config.target_score {
            if self.score >= target {
                self.fsm.transition(ScreenAction::TargetReached);
            }
        }
        total
    }

    /// Enter / click on a non-gameplay screen. Returning from Ending starts a fresh round.
    pub fn advance_screen(&mut self) -> Option<Transition> {
        let action = self.fsm.advance_action()?;
        let t = self.fsm.transition(action);
        if t.success && action == ScreenAction::Return {
            self.reset_round();
        }
        Some(t)
    }

    fn reset_round(&mut self) {
        self.marshmallows = create_marshmallows(&self.config);
        self.score = 0;
        self.multiplier = 1.0;
        self.display.show(0);
    }
}
