//! Errors raised at the rules-engine boundary.

use super::{Mark, Position};

/// Error that can occur when validating or applying a move.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid (0-based).
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell does not hold the previous mover's mark.
    #[display("Cannot undo {}: it does not hold the last mover's mark", _0)]
    NotUndoable(Position),

    /// The board breaks a game invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Builds an invariant violation naming the side to move.
    pub fn invariant(to_move: Mark, descriptions: &[&str]) -> Self {
        MoveError::InvariantViolation(format!(
            "{} (with {} to move)",
            descriptions.join("; "),
            to_move
        ))
    }
}
