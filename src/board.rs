use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Player, Position};

const HOME_ROWS: usize = 3;

/// Checkers board: an 8x8 grid of cells indexed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board: player one on the dark squares of rows 0-2,
    /// player two on the dark squares of rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Overwrites every cell with the starting layout.
    pub fn initialize(&mut self) {
        for (row, line) in self.cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                let dark = (row + col) % 2 == 1;
                *cell = if !dark {
                    Cell::Empty
                } else if row < HOME_ROWS {
                    Cell::PlayerOne
                } else if row >= BOARD_SIZE - HOME_ROWS {
                    Cell::PlayerTwo
                } else {
                    Cell::Empty
                };
            }
        }
    }

    /// Returns `None` for coordinates off the board.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Position::from_signed(row, col).map(|pos| self.cell(pos))
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row() as usize][pos.col() as usize] = cell;
    }

    /// Number of pieces the given side has on the board.
    pub fn count(&self, player: Player) -> u8 {
        let piece = player.piece();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == piece)
            .count() as u8
    }

    /// Moves the piece at `from` to `to`. Legality is the caller's concern.
    pub fn apply_move(&mut self, from: Position, to: Position) {
        let piece = self.cell(from);
        self.set(to, piece);
        self.set(from, Cell::Empty);
    }

    /// Removes the jumped piece and moves the jumping one.
    /// Returns the square that was cleared. Legality is the caller's concern.
    pub fn apply_capture(&mut self, from: Position, to: Position) -> Position {
        let jumped = jumped_square(from, to);
        self.set(jumped, Cell::Empty);
        self.apply_move(from, to);
        jumped
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=player one, 2=player two.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (slot, cell) in board.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.to_u8();
        }
        board
    }

    #[cfg(test)]
    pub(crate) fn from_pieces(pieces: &[(u8, u8, Cell)]) -> Self {
        let mut board = Self::empty();
        for &(row, col, cell) in pieces {
            board.cells[row as usize][col as usize] = cell;
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer midpoint of a jump, floored on both axes.
pub fn jumped_square(from: Position, to: Position) -> Position {
    from.midpoint(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_layout_has_twelve_pieces_each_on_dark_squares() {
        let board = Board::new();

        assert_eq!(board.count(Player::One), 12);
        assert_eq!(board.count(Player::Two), 12);

        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let p = pos(row, col);
                let expected = match row {
                    0..=2 if p.is_dark() => Cell::PlayerOne,
                    5..=7 if p.is_dark() => Cell::PlayerTwo,
                    _ => Cell::Empty,
                };
                assert_eq!(board.cell(p), expected, "cell {p}");
            }
        }

        let empty = board.to_array().iter().filter(|&&c| c == 0).count();
        assert_eq!(empty, 40);
    }

    #[test]
    fn initialize_overwrites_any_previous_position() {
        let mut board = Board::from_pieces(&[(3, 3, Cell::PlayerTwo), (4, 0, Cell::PlayerOne)]);

        board.initialize();
        let once = board;
        board.initialize();

        assert_eq!(board, once);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn get_is_bounds_checked() {
        let board = Board::new();

        assert_eq!(board.get(0, 1), Some(Cell::PlayerOne));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, 8), None);
    }

    #[test]
    fn apply_move_relocates_piece() {
        let mut board = Board::new();

        board.apply_move(pos(2, 1), pos(3, 2));

        assert_eq!(board.cell(pos(2, 1)), Cell::Empty);
        assert_eq!(board.cell(pos(3, 2)), Cell::PlayerOne);
        assert_eq!(board.count(Player::One), 12);
    }

    #[test]
    fn apply_capture_removes_jumped_piece() {
        let mut board = Board::from_pieces(&[(2, 3, Cell::PlayerOne), (3, 4, Cell::PlayerTwo)]);

        let jumped = board.apply_capture(pos(2, 3), pos(4, 5));

        assert_eq!(jumped, pos(3, 4));
        assert_eq!(board.cell(pos(2, 3)), Cell::Empty);
        assert_eq!(board.cell(pos(3, 4)), Cell::Empty);
        assert_eq!(board.cell(pos(4, 5)), Cell::PlayerOne);
        assert_eq!(board.count(Player::Two), 0);
    }

    #[test]
    fn jumped_square_rounds_toward_zero() {
        assert_eq!(jumped_square(pos(5, 2), pos(3, 0)), pos(4, 1));
        assert_eq!(jumped_square(pos(2, 3), pos(4, 3)), pos(3, 3));
        assert_eq!(jumped_square(pos(2, 3), pos(4, 4)), pos(3, 3));
    }
}
