//! Game logic and rules for tic-tac-toe.

use super::error::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::search::{self, SearchReport};
use super::{Board, Cell, GameState, Mark, Position, rules};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine: the board plus whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    to_move: Mark,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Builds a game without checking invariants.
    pub(crate) fn from_parts(board: Board, to_move: Mark) -> Self {
        Self { board, to_move }
    }

    /// Resumes a game from a board, inferring the side to move.
    ///
    /// X is to move when both marks have been played equally often, O when
    /// X is one ahead.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] for boards that legal
    /// alternating play cannot produce.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Result<Self, MoveError> {
        let to_move = if board.count(Mark::X) > board.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        };
        Self::from_board_with_turn(board, to_move)
    }

    /// Resumes a game from a board with an explicit side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] if the mark counts do not
    /// fit `to_move` or both marks own a line.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board_with_turn(board: Board, to_move: Mark) -> Result<Self, MoveError> {
        let game = Self::from_parts(board, to_move);
        game.check_invariants()?;
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// True iff (row, col) is on the board and the cell is empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Position::new(row, col).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Places the current player's mark at 0-based (row, col) and passes
    /// the turn.
    ///
    /// # Errors
    ///
    /// Off-board coordinates, occupied cells and finished games are
    /// rejected and leave the game untouched.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let pos = Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos` and passes the turn.
    ///
    /// # Errors
    ///
    /// See [`Game::make_move`].
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.state().is_terminal() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Cell::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        debug!(position = %pos, next = %self.to_move, "Move applied");
        Ok(())
    }

    /// Takes back the previous move at `pos` and returns the turn to the
    /// player who made it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotUndoable`] if `pos` does not hold the
    /// previous mover's mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn undo_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let last_mover = self.to_move.opponent();
        if self.board.get(pos) != Cell::Occupied(last_mover) {
            return Err(MoveError::NotUndoable(pos));
        }

        self.board.set(pos, Cell::Empty);
        self.to_move = last_mover;

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(())
    }

    /// Derives the current state from the board.
    pub fn state(&self) -> GameState {
        rules::game_state(&self.board)
    }

    /// True iff at least one cell is empty.
    pub fn any_space_left(&self) -> bool {
        rules::any_space_left(&self.board)
    }

    /// Best move for the side to move, `None` once the game is over.
    pub fn best_move(&mut self) -> Option<Position> {
        if self.state().is_terminal() {
            return None;
        }
        self.best_move_for(self.to_move)
    }

    /// Best move for `mark`, searching the board in place.
    pub fn best_move_for(&mut self, mark: Mark) -> Option<Position> {
        search::best_move(&mut self.board, mark)
    }

    /// Scores every empty cell for the side to move.
    ///
    /// A finished game has no moves, so its report is empty.
    pub fn analyze(&mut self) -> SearchReport {
        if self.state().is_terminal() {
            return SearchReport::empty(self.to_move);
        }
        search::analyze(&mut self.board, self.to_move)
    }

    fn check_invariants(&self) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions: Vec<&str> = violations.iter().map(|v| v.description).collect();
            MoveError::invariant(self.to_move, &descriptions)
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_first() {
        let game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.any_space_left());
    }

    #[test]
    fn test_make_move_alternates() {
        let mut game = Game::new();
        game.make_move(1, 1).unwrap();
        assert_eq!(game.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(game.to_move(), Mark::O);
        game.make_move(0, 0).unwrap();
        assert_eq!(game.board().get(Position::TopLeft), Cell::Occupied(Mark::O));
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_is_valid_move_bounds_and_occupancy() {
        let mut game = Game::new();
        assert!(game.is_valid_move(2, 2));
        assert!(!game.is_valid_move(3, 0));
        assert!(!game.is_valid_move(0, 3));
        assert!(!game.is_valid_move(usize::MAX, 0));
        game.make_move(2, 2).unwrap();
        assert!(!game.is_valid_move(2, 2));
    }

    #[test]
    fn test_rejected_moves_leave_state_untouched() {
        let mut game = Game::new();
        game.make_move(0, 0).unwrap();
        let before = game;

        assert_eq!(
            game.make_move(5, 1),
            Err(MoveError::OutOfBounds { row: 5, col: 1 })
        );
        assert_eq!(
            game.make_move(0, 0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::from_board("XXX/OO-/---".parse().unwrap()).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.make_move(1, 2), Err(MoveError::GameOver));
        assert_eq!(game.best_move(), None);
    }

    #[test]
    fn test_undo_restores_exactly() {
        let mut game = Game::from_board("X--/-O-/---".parse().unwrap()).unwrap();
        let before = game;
        game.place(Position::BottomRight).unwrap();
        assert_ne!(game, before);
        game.undo_move(Position::BottomRight).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_rejects_wrong_cell() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        assert_eq!(
            game.undo_move(Position::TopLeft),
            Err(MoveError::NotUndoable(Position::TopLeft))
        );
        game.place(Position::TopLeft).unwrap();
        // Center holds X, but O moved last.
        assert_eq!(
            game.undo_move(Position::Center),
            Err(MoveError::NotUndoable(Position::Center))
        );
    }

    #[test]
    fn test_from_board_infers_turn() {
        let game = Game::from_board("XX-/OO-/---".parse().unwrap()).unwrap();
        assert_eq!(game.to_move(), Mark::X);
        let game = Game::from_board("XX-/O--/---".parse().unwrap()).unwrap();
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_from_board_rejects_impossible_boards() {
        assert!(matches!(
            Game::from_board("XXX/---/---".parse().unwrap()),
            Err(MoveError::InvariantViolation(_))
        ));
        assert!(matches!(
            Game::from_board("OO-/---/---".parse().unwrap()),
            Err(MoveError::InvariantViolation(_))
        ));
        assert!(matches!(
            Game::from_board_with_turn("X--/---/---".parse().unwrap(), Mark::X),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_best_move_for_either_side() {
        let mut game = Game::from_board("XX-/OO-/---".parse().unwrap()).unwrap();
        assert_eq!(game.best_move_for(Mark::X), Some(Position::TopRight));
        assert_eq!(game.best_move_for(Mark::O), Some(Position::TopRight));
        assert_eq!(game.best_move(), Some(Position::TopRight));
    }

    #[test]
    fn test_analyze_finished_game_is_empty() {
        let mut game = Game::from_board("XXX/OO-/---".parse().unwrap()).unwrap();
        let report = game.analyze();
        assert_eq!(report.to_move, Mark::O);
        assert_eq!(report.best_move, None);
        assert_eq!(report.score, None);
        assert!(report.candidates.is_empty());
        assert_eq!(report.nodes, 0);
    }
}
