use tracing::{debug, info};

use crate::board::Board;
use crate::rules::{self, CaptureRule};
use crate::types::{Cell, GameOutcome, GameState, MoveKind, MoveRecord, Player, Position};

/// Where the click state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selected(Position),
    /// One side has no pieces left; the next click starts a new game.
    AwaitingRestart,
}

/// What a single click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected,
    Moved,
    Captured,
    /// A second click that was not a legal destination dropped the selection.
    Deselected,
    Restarted,
}

impl ClickOutcome {
    /// Whether the click changed the board.
    pub fn applied_move(self) -> bool {
        matches!(self, Self::Moved | Self::Captured)
    }
}

/// Owns the board, the side to move and the selection.
pub struct GameInstance {
    board: Board,
    current_player: Player,
    phase: Phase,
    capture_rule: CaptureRule,
    last_move: Option<MoveRecord>,
}

impl GameInstance {
    pub fn new(capture_rule: CaptureRule) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            phase: Phase::Idle,
            capture_rule,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.board.cell(pos)
    }

    pub fn selection(&self) -> Option<Position> {
        match self.phase {
            Phase::Selected(pos) => Some(pos),
            Phase::Idle | Phase::AwaitingRestart => None,
        }
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Click given as raw square coordinates. Squares off the board are a
    /// no-op in every phase: the selection survives and nothing resets.
    pub fn on_click_at(&mut self, row: i32, col: i32) -> ClickOutcome {
        match Position::from_signed(row, col) {
            Some(pos) => self.on_click(pos),
            None => ClickOutcome::Ignored,
        }
    }

    /// Drives the state machine with a click on `pos`.
    pub fn on_click(&mut self, pos: Position) -> ClickOutcome {
        match self.phase {
            Phase::AwaitingRestart => {
                self.reset();
                ClickOutcome::Restarted
            }
            Phase::Idle => {
                if self.board.cell(pos) == self.current_player.piece() {
                    debug!(player = %self.current_player, %pos, "piece selected");
                    self.phase = Phase::Selected(pos);
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Ignored
                }
            }
            Phase::Selected(from) => {
                self.phase = Phase::Idle;
                let kind =
                    rules::classify(&self.board, from, pos, self.current_player, self.capture_rule);
                match kind {
                    Some(kind) => {
                        self.apply_move(from, pos, kind);
                        match kind {
                            MoveKind::Step => ClickOutcome::Moved,
                            MoveKind::Capture => ClickOutcome::Captured,
                        }
                    }
                    None => {
                        debug!(%from, to = %pos, "selection dropped");
                        ClickOutcome::Deselected
                    }
                }
            }
        }
    }

    /// Steps and jumps the piece at `from` may make, for highlighting.
    /// Empty unless `from` holds a piece of the side to move.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        if self.board.cell(from) != self.current_player.piece() {
            return Vec::new();
        }
        rules::legal_destinations(&self.board, from, self.current_player, self.capture_rule)
    }

    /// Derived from piece counts; a side with no pieces has lost.
    pub fn outcome(&self) -> GameOutcome {
        if self.board.count(Player::One) == 0 {
            GameOutcome::PlayerTwoWins
        } else if self.board.count(Player::Two) == 0 {
            GameOutcome::PlayerOneWins
        } else {
            GameOutcome::InProgress
        }
    }

    /// Starts a fresh game. Calling it repeatedly is harmless.
    pub fn reset(&mut self) {
        self.board.initialize();
        self.current_player = Player::One;
        self.phase = Phase::Idle;
        self.last_move = None;
        info!("game reset");
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.to_u8(),
            selection: self.selection(),
            legal_destinations: self
                .selection()
                .map(|from| self.legal_destinations(from))
                .unwrap_or_default(),
            player_one_count: self.board.count(Player::One),
            player_two_count: self.board.count(Player::Two),
            outcome: self.outcome(),
            awaiting_restart: self.phase == Phase::AwaitingRestart,
            last_move: self.last_move,
        }
    }

    fn apply_move(&mut self, from: Position, to: Position, kind: MoveKind) {
        let captured = match kind {
            MoveKind::Step => {
                self.board.apply_move(from, to);
                None
            }
            MoveKind::Capture => Some(self.board.apply_capture(from, to)),
        };
        debug!(player = %self.current_player, %from, %to, ?kind, "move applied");

        self.last_move = Some(MoveRecord {
            player: self.current_player,
            from,
            to,
            kind,
            captured,
        });
        self.current_player = self.current_player.opponent();

        let outcome = self.outcome();
        if let Some(winner) = outcome.winner() {
            info!(%winner, "game over");
            self.phase = Phase::AwaitingRestart;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.phase = Phase::Idle;
        self.last_move = None;
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new(CaptureRule::default())
    }
}
