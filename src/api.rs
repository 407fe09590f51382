use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{ClickOutcome, GameInstance};
use crate::types::Position;

/// Browser handle on one game. The front end draws from `state()` and feeds
/// clicks back in; it never touches the board directly.
#[wasm_bindgen]
pub struct CheckersApp {
    game: GameInstance,
    config: GameConfig,
}

#[wasm_bindgen]
impl CheckersApp {
    /// `config` may be `undefined`, `null` or a partial `GameConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CheckersApp, JsValue> {
        let config = parse_config(config)?;
        Ok(Self {
            game: GameInstance::new(config.capture_rule),
            config,
        })
    }

    /// Click on a board square. Returns `true` when a move or capture was
    /// applied. Squares off the board are ignored.
    pub fn click(&mut self, row: i32, col: i32) -> bool {
        self.game.on_click_at(row, col).applied_move()
    }

    /// Click in canvas pixels. Points outside the board are ignored.
    pub fn click_pixel(&mut self, x: f64, y: f64) -> bool {
        let outcome = match self.config.pixel_to_position(x, y) {
            Some(pos) => self.game.on_click(pos),
            None => ClickOutcome::Ignored,
        };
        outcome.applied_move()
    }

    /// 0=empty, 1=player one, 2=player two.
    pub fn cell(&self, row: u8, col: u8) -> Result<u8, JsValue> {
        let pos = to_position(row, col)?;
        Ok(self.game.cell(pos).to_u8())
    }

    pub fn selection(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.selection())?)
    }

    /// Highlight targets for the current selection.
    pub fn legal_destinations(&self) -> Result<JsValue, JsValue> {
        let targets = self
            .game
            .selection()
            .map(|from| self.game.legal_destinations(from))
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&targets)?)
    }

    /// 0=in progress, 1=player one won, 2=player two won.
    pub fn outcome(&self) -> u8 {
        self.game.outcome().to_u8()
    }

    /// Win-screen text, or `undefined` while the game is running.
    pub fn banner(&self) -> Option<String> {
        self.game.outcome().banner()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    pub fn square_size(&self) -> f64 {
        self.config.square_size
    }

    pub fn board_pixel_size(&self) -> f64 {
        self.config.board_pixel_size()
    }
}

fn parse_config(value: JsValue) -> Result<GameConfig, GameError> {
    let config = if value.is_undefined() || value.is_null() {
        GameConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|err| GameError::InvalidConfig(err.to_string()))?
    };
    config.validate()?;
    Ok(config)
}

fn to_position(row: u8, col: u8) -> Result<Position, GameError> {
    Position::new(row, col).ok_or(GameError::CoordinateOutOfRange { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Cell, Player};

    /// Player one to move, one jump away from taking the last opposing piece.
    fn one_capture_from_winning() -> CheckersApp {
        let mut game = GameInstance::default();
        let board = Board::from_pieces(&[(2, 3, Cell::PlayerOne), (3, 4, Cell::PlayerTwo)]);
        game.set_board_for_test(board, Player::One);
        CheckersApp {
            game,
            config: GameConfig::default(),
        }
    }

    #[test]
    fn click_on_win_screen_restarts_the_game() {
        let mut app = one_capture_from_winning();

        assert!(!app.click(2, 3));
        assert!(app.click(4, 5));
        assert_eq!(app.outcome(), 1);
        assert_eq!(
            app.banner().as_deref(),
            Some("Player 1 Wins!\nClick to Play Again")
        );

        assert!(!app.click(0, 0));
        assert_eq!(app.outcome(), 0);
        assert_eq!(app.banner(), None);
        assert_eq!(app.cell(0, 1).ok(), Some(1));
        assert_eq!(app.cell(4, 5).ok(), Some(0));
    }

    #[test]
    fn pixel_click_on_win_screen_restarts_the_game() {
        let mut app = one_capture_from_winning();
        app.click(2, 3);
        app.click(4, 5);

        // Off-board pixels do not count as the acknowledgment.
        assert!(!app.click_pixel(500.0, 10.0));
        assert_eq!(app.outcome(), 1);

        assert!(!app.click_pixel(10.0, 10.0));
        assert_eq!(app.outcome(), 0);
        assert_eq!(app.cell(7, 0).ok(), Some(2));
    }

    #[cfg(target_arch = "wasm32")]
    mod web {
        use js_sys::Reflect;
        use wasm_bindgen_test::*;

        use super::*;

        fn field(state: &JsValue, key: &str) -> JsValue {
            Reflect::get(state, &JsValue::from_str(key)).unwrap()
        }

        #[wasm_bindgen_test]
        fn state_reports_win_then_fresh_game() {
            let mut app = one_capture_from_winning();
            app.click(2, 3);
            app.click(4, 5);

            let state = app.state().unwrap();
            assert_eq!(field(&state, "outcome").as_string().as_deref(), Some("player_one_wins"));
            assert_eq!(field(&state, "awaiting_restart").as_bool(), Some(true));

            app.click_pixel(10.0, 10.0);

            let state = app.state().unwrap();
            assert_eq!(field(&state, "outcome").as_string().as_deref(), Some("in_progress"));
            assert_eq!(field(&state, "awaiting_restart").as_bool(), Some(false));
        }
    }
}
