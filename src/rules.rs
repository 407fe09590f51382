//! Move legality. Everything here is pure: it reads a [`Board`] and never
//! changes it.
//!
//! A plain step is one row forward and one column sideways onto an empty
//! square. A capture is two rows forward onto an empty square with an
//! opponent piece on the integer midpoint. Under [`CaptureRule::Lenient`] the
//! column delta of a capture is not checked on its own, so a "jump" straight
//! ahead over an opponent is accepted. [`CaptureRule::Strict`] additionally
//! requires the column to change by exactly two.

use serde::Deserialize;

use crate::board::{Board, jumped_square};
use crate::types::{MoveKind, Player, Position};

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRule {
    /// Row delta of two plus an opponent on the midpoint is enough.
    #[default]
    Lenient,
    /// Also requires a column delta of exactly two.
    Strict,
}

/// Destination given as signed coordinates so callers can probe squares off
/// the board; those are never legal.
pub fn is_valid_move(board: &Board, from: Position, to: (i32, i32), player: Player) -> bool {
    let (to_row, to_col) = to;
    if !matches!(board.get(to_row, to_col), Some(cell) if cell.is_empty()) {
        return false;
    }

    let d_row = to_row - from.row() as i32;
    let d_col = (to_col - from.col() as i32).abs();

    d_row == player.forward() && d_col == 1
}

pub fn is_capture_move(
    board: &Board,
    from: Position,
    to: (i32, i32),
    player: Player,
    rule: CaptureRule,
) -> bool {
    let (to_row, to_col) = to;
    let Some(target) = Position::from_signed(to_row, to_col) else {
        return false;
    };
    if !board.cell(target).is_empty() {
        return false;
    }

    let d_row = to_row - from.row() as i32;
    if d_row != 2 * player.forward() {
        return false;
    }
    if rule == CaptureRule::Strict && (to_col - from.col() as i32).abs() != 2 {
        return false;
    }

    board.cell(jumped_square(from, target)) == player.opponent().piece()
}

/// What clicking `to` with `from` selected would do. Captures are checked
/// first; the two patterns never overlap since their row deltas differ.
pub fn classify(
    board: &Board,
    from: Position,
    to: Position,
    player: Player,
    rule: CaptureRule,
) -> Option<MoveKind> {
    let to = (to.row() as i32, to.col() as i32);
    if is_capture_move(board, from, to, player, rule) {
        Some(MoveKind::Capture)
    } else if is_valid_move(board, from, to, player) {
        Some(MoveKind::Step)
    } else {
        None
    }
}

/// Squares worth highlighting for a piece at `from`: the four diagonal steps
/// and the four diagonal jumps that [`classify`] accepts.
pub fn legal_destinations(
    board: &Board,
    from: Position,
    player: Player,
    rule: CaptureRule,
) -> Vec<Position> {
    let mut out = Vec::new();

    for distance in [1, 2] {
        for (d_row, d_col) in DIAGONALS {
            if let Some(to) = from.offset(d_row * distance, d_col * distance)
                && classify(board, from, to, player, rule).is_some()
            {
                out.push(to);
            }
        }
    }

    out
}
