//! Board fullness checks for tic-tac-toe.

use crate::{Board, Cell};

/// True iff at least one cell is empty.
pub fn any_space_left(board: &Board) -> bool {
    board.cells().iter().any(|cell| *cell == Cell::Empty)
}

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    !any_space_left(board)
}
