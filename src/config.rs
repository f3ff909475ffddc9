//! Tuning constants for a round of Marshmallow Roast.
//!
//! Everything the game needs to lay out the grid and pace difficulty lives in
//! `GameConfig`. The defaults reproduce the classic browser layout; with the `serde`
//! feature a partial JSON object can override any subset of fields.

use crate::error::GameError;

pub const DEFAULT_SURFACE_WIDTH: u32 = 400;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 640;
pub const DEFAULT_ROASTING_SPEEDS: [f64; 4] = [0.05, 0.07, 0.09, 0.11];

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub rows: usize,
    pub columns: usize,
    pub margin: f64, // first row y; rows step by 1.5x this
    pub radius: f64,
    pub roasting_speeds: Vec<f64>, // cycled by row index
    pub multiplier_step: f64,      // added to the global multiplier every gameplay frame
    /// Start on the Title screen instead of dropping straight into gameplay.
    pub title_screen: bool,
    /// Score at which the round ends and the Ending screen shows. `None` = endless.
    pub target_score: Option<i64>,
    pub click_sound: String,
    pub burn_sound: String,
    pub canvas_id: String,
    pub score_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            rows: 5,
            columns: 2,
            margin: 80.0,
            radius: 20.0,
            roasting_speeds: DEFAULT_ROASTING_SPEEDS.to_vec(),
            multiplier_step: 0.0005,
            title_screen: false,
            target_score: None,
            click_sound: "click-sound.mp3".to_string(),
            burn_sound: "burn-sound.mp3".to_string(),
            canvas_id: "mr-canvas".to_string(),
            score_id: "score".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let bad = |why: &str| -> Result<(), GameError> {
            Err(GameError::InvalidConfig(why.to_string()))
        };
        if self.surface_width == 0 || self.surface_height == 0 {
            return bad("surface size must be non-zero");
        }
        if self.rows == 0 || self.columns == 0 {
            return bad("rows and columns must be > 0");
        }
        if self.roasting_speeds.is_empty() {
            return bad("roasting_speeds must not be empty");
        }
        if self
            .roasting_speeds
            .iter()
            .any(|s| !s.is_finite() || *s < 0.0)
        {
            return bad("roasting speeds must be finite and non-negative");
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return bad("radius must be positive");
        }
        if !self.margin.is_finite() {
            return bad("margin must be finite");
        }
        // A negative step would let the multiplier shrink.
        if !(self.multiplier_step.is_finite() && self.multiplier_step >= 0.0) {
            return bad("multiplier_step must be finite and >= 0");
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
