//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the search engine and the game wrapper share one
//! definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::{any_space_left, is_full};
pub use win::{LINES, check_winner};

use crate::{Board, GameState};

/// Derives the game state from the board.
///
/// A completed line is reported even when the board is also full.
pub fn game_state(board: &Board) -> GameState {
    if let Some(winner) = check_winner(board) {
        GameState::Won(winner)
    } else if is_full(board) {
        GameState::Draw
    } else {
        GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_is_playing() {
        assert_eq!(game_state(&Board::new()), GameState::Playing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(game_state(&board), GameState::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(game_state(&board), GameState::Won(Mark::X));
    }

    #[test]
    fn test_top_row_win_with_open_cells() {
        let board: Board = "XXX/OO-/---".parse().unwrap();
        assert_eq!(game_state(&board), GameState::Won(Mark::X));
    }

    #[test]
    fn test_state_is_stable() {
        let board: Board = "XO-/-X-/O--".parse().unwrap();
        let first = game_state(&board);
        for _ in 0..5 {
            assert_eq!(game_state(&board), first);
        }
    }
}
