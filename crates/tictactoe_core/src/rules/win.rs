//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};

/// Every line that wins: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark filling the first complete line found in [`LINES`]
/// order, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }

    None
}

/// Marks that own at least one complete line.
pub fn winning_marks(board: &Board) -> Vec<Mark> {
    let mut marks = Vec::new();
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(mark) = cell.mark()
            && cell == board.get(b)
            && cell == board.get(c)
            && !marks.contains(&mark)
        {
            marks.push(mark);
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::X));
        board.set(Position::TopRight, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "-O-/XOX/-O-".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Mark::O));
        board.set(Position::Center, Cell::Occupied(Mark::O));
        board.set(Position::BottomLeft, Cell::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_line_reports_first_in_scan_order() {
        // Malformed: both marks complete a row. Rows scan top to bottom.
        let board: Board = "OOO/XXX/---".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert_eq!(winning_marks(&board), vec![Mark::O, Mark::X]);
    }
}
