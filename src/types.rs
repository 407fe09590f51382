use std::fmt;

use serde::Serialize;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two sides. `One` starts on rows 0-2 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Row direction of a forward step: player one moves toward higher rows.
    pub fn forward(self) -> i32 {
        match self {
            Self::One => 1,
            Self::Two => -1,
        }
    }

    /// The cell value holding this player's piece.
    pub fn piece(self) -> Cell {
        match self {
            Self::One => Cell::PlayerOne,
            Self::Two => Cell::PlayerTwo,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "Player 1"),
            Self::Two => write!(f, "Player 2"),
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerOne => Some(Player::One),
            Self::PlayerTwo => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// 0 = empty, 1 = player one, 2 = player two.
    pub fn to_u8(self) -> u8 {
        self.owner().map_or(0, Player::to_u8)
    }
}

/// An on-board coordinate. `row` comes from the pixel y axis, `col` from x.
/// Only [`Position::new`] and [`Position::from_signed`] build one, so every
/// value indexes the board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Like [`Position::new`] but for signed coordinates.
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Floored midpoint of two squares, which is always on the board.
    pub(crate) fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::from_signed(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Dark squares are the only ones pieces ever stand on.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Step,
    Capture,
}

/// The last move applied, for animating the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: Player,
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
    /// Square the jumped piece was removed from; `None` for steps.
    pub captured: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    InProgress,
    PlayerOneWins,
    PlayerTwoWins,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Self::InProgress => None,
            Self::PlayerOneWins => Some(Player::One),
            Self::PlayerTwoWins => Some(Player::Two),
        }
    }

    /// Text for the win screen. `None` while the game is running.
    pub fn banner(self) -> Option<String> {
        self.winner()
            .map(|player| format!("{player} Wins!\nClick to Play Again"))
    }

    /// 0 = in progress, otherwise the winner's player number.
    pub fn to_u8(self) -> u8 {
        self.winner().map_or(0, Player::to_u8)
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    /// Row-major, 0 = empty, 1 = player one, 2 = player two.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub selection: Option<Position>,
    /// Highlight targets for `selection`; empty when nothing is selected.
    pub legal_destinations: Vec<Position>,
    pub player_one_count: u8,
    pub player_two_count: u8,
    pub outcome: GameOutcome,
    pub awaiting_restart: bool,
    pub last_move: Option<MoveRecord>,
}
