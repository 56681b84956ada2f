//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every game reachable
//! by legal alternating play. They guard boards supplied from outside
//! ([`Game::from_board`](crate::Game::from_board)) and are re-checked after
//! every mutation in debug builds.

use crate::{Game, Mark, rules};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples; every member is checked so the caller sees all
/// violations at once.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation {
                description: I1::description(),
            });
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation {
                description: I2::description(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: turns alternate, X first.
///
/// X has made as many moves as O when X is to move, and exactly one more
/// when O is to move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        match game.to_move() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: at most one mark owns a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        rules::win::winning_marks(game.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one mark has three in a row"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (AlternatingTurnInvariant, SingleWinnerInvariant);
