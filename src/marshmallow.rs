//! Marshmallow sprite: roasting-stage state machine and scoring.
//!
//! A single accumulated timer drives the stage through fixed thresholds; the roasting
//! speed only changes how quickly the timer climbs. Time alone never moves a
//! marshmallow backwards; only consumption (a click) resets it to `Raw`.

use crate::audio::{AudioSink, Cue};

pub const GOLDEN_AFTER: f64 = 100.0;
pub const DONE_AFTER: f64 = 200.0;
pub const BURNT_AFTER: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Raw,
    Golden,
    Done,
    Burnt,
}

impl Stage {
    /// Score delta for consuming a marshmallow in this stage.
    pub fn points(self) -> i32 {
        match self {
            Stage::Raw => 0,
            Stage::Golden => 1,
            Stage::Done => 5,
            Stage::Burnt => -2,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Stage::Raw => "#FFF",
            Stage::Golden => "#FFD700",
            Stage::Done => "#8B4513",
            Stage::Burnt => "#000",
        }
    }
}

/// Step function from timer to stage. Thresholds are exclusive: exactly 100 is still raw.
pub fn stage_for(timer: f64) -> Stage {
    if timer > BURNT_AFTER {
        Stage::Burnt
    } else if timer > DONE_AFTER {
        Stage::Done
    } else if timer > GOLDEN_AFTER {
        Stage::Golden
    } else {
        Stage::Raw
    }
}

#[derive(Clone, Debug)]
pub struct Marshmallow {
    x: f64,
    y: f64,
    radius: f64,
    roasting_speed: f64,
    timer: f64,
    stage: Stage,
    consumed: bool, // guards double scoring within one roast cycle
}

impl Marshmallow {
    pub fn new(x: f64, y: f64, radius: f64, roasting_speed: f64) -> Self {
        Self {
            x,
            y,
            radius,
            roasting_speed,
            timer: 0.0,
            stage: Stage::Raw,
            consumed: false,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn roasting_speed(&self) -> f64 {
        self.roasting_speed
    }
    pub fn timer(&self) -> f64 {
        self.timer
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Advance one frame under the given global multiplier.
    pub fn roast(&mut self, multiplier: f64) {
        self.timer += self.roasting_speed * multiplier;
        self.stage = stage_for(self.timer);
    }

    /// Strictly inside the circle; a point exactly on the rim misses.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        (dx * dx + dy * dy).sqrt() < self.radius
    }

    /// Consume the marshmallow, returning the score delta. Raw or already-consumed
    /// marshmallows are left untouched and score nothing.
    pub fn clicked(&mut self, audio: &mut dyn AudioSink) -> i32 {
        if self.consumed || self.stage == Stage::Raw {
            return 0;
        }
        self.consumed = true;
        audio.play(Cue::Click);
        let points = self.stage.points();
        if self.stage == Stage::Burnt {
            audio.play(Cue::Burn);
        }
        self.reset();
        points
    }

    fn reset(&mut self) {
        self.timer = 0.0;
        self.stage = Stage::Raw;
        self.consumed = false; // ready to roast again
    }
}
