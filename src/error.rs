use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised at the JavaScript boundary. Illegal moves are not errors;
/// the game simply ignores them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("row/col out of range: ({row}, {col})")]
    CoordinateOutOfRange { row: u8, col: u8 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
