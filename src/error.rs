//! Error type for host setup and configuration failures.
//!
//! Gameplay itself never fails: clicks that miss simply score nothing and per-frame
//! drawing errors are dropped. Only startup (finding the window / canvas) and config
//! loading can go wrong, and those surface to JS as a `JsValue` string.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    NoWindow,
    NoDocument,
    NoBody,
    /// Canvas exists but refused to hand out a 2d context.
    NoContext,
    InvalidConfig(String),
    ConfigParse(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoWindow => write!(f, "no window"),
            GameError::NoDocument => write!(f, "no document"),
            GameError::NoBody => write!(f, "document has no body"),
            GameError::NoContext => write!(f, "canvas 2d context unavailable"),
            GameError::InvalidConfig(why) => write!(f, "invalid config: {why}"),
            GameError::ConfigParse(why) => write!(f, "config parse error: {why}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
