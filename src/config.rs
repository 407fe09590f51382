use serde::Deserialize;

use crate::error::GameError;
use crate::rules::CaptureRule;
use crate::types::{BOARD_SIZE, Position};

const DEFAULT_SQUARE_SIZE: f64 = 50.0;

/// Front-end supplied settings. Every field is optional on the JS side.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pixel size of one square.
    pub square_size: f64,
    pub capture_rule: CaptureRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            capture_rule: CaptureRule::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "square_size must be a positive number, got {}",
                self.square_size
            )));
        }
        Ok(())
    }

    /// Width and height of the whole board in pixels.
    pub fn board_pixel_size(&self) -> f64 {
        self.square_size * BOARD_SIZE as f64
    }

    /// Maps a pixel inside the board to its square: the y axis gives the row,
    /// the x axis the column. Points outside the board map to `None`.
    pub fn pixel_to_position(&self, x: f64, y: f64) -> Option<Position> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let row = (y / self.square_size).floor();
        let col = (x / self.square_size).floor();
        if row >= BOARD_SIZE as f64 || col >= BOARD_SIZE as f64 {
            return None;
        }
        Position::new(row as u8, col as u8)
    }
}
