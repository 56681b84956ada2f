//! Exhaustive minimax search.
//!
//! The search runs directly on the caller's board: every speculative mark is
//! placed, evaluated and cleared again before the next sibling is tried, so
//! the board is back in its original state whenever a function here returns.
//!
//! Scores use a single shared convention: `+1` favours X, `-1` favours O and
//! `0` is a draw. Payoffs do not depend on depth, so a slow win scores the
//! same as a fast one.

use crate::{Board, Cell, GameState, Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a finished position from X's point of view.
///
/// Non-terminal boards score `0`.
pub fn evaluate_board(board: &Board) -> i32 {
    score(rules::game_state(board))
}

fn score(state: GameState) -> i32 {
    match state {
        GameState::Won(Mark::X) => 1,
        GameState::Won(Mark::O) => -1,
        GameState::Playing | GameState::Draw => 0,
    }
}

/// Game-theoretic value of `board` with X to move when `maximizing`,
/// O otherwise.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    Minimax::default().value(board, maximizing)
}

/// Best move for `mark` on `board`, or `None` if no cell is empty.
///
/// Among equally scored cells the first in row-major order wins.
pub fn best_move(board: &mut Board, mark: Mark) -> Option<Position> {
    analyze(board, mark).best_move
}

/// Score of one root candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Cell the mark was placed on.
    pub position: Position,
    /// Minimax value after placing it.
    pub score: i32,
}

/// Full result of a root search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Side the search chose a move for.
    pub to_move: Mark,
    /// Chosen move.
    pub best_move: Option<Position>,
    /// Value of the chosen move.
    pub score: Option<i32>,
    /// Every empty cell with its value, in row-major order.
    pub candidates: Vec<Candidate>,
    /// Positions evaluated below the root.
    pub nodes: u64,
}

impl SearchReport {
    /// Report with no candidates, for positions with nothing to search.
    pub fn empty(to_move: Mark) -> Self {
        Self {
            to_move,
            best_move: None,
            score: None,
            candidates: Vec::new(),
            nodes: 0,
        }
    }
}

/// Searches every empty cell for `mark` and reports the scores.
///
/// A candidate replaces the running best only when it is strictly better
/// for `mark`, so ties go to the earliest cell in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &mut Board, mark: Mark) -> SearchReport {
    let maximizing = mark == Mark::X;
    let mut search = Minimax::default();
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best = None;
    let mut candidates = Vec::new();

    for pos in board.empty_positions() {
        board.set(pos, Cell::Occupied(mark));
        let score = search.value(board, !maximizing);
        board.set(pos, Cell::Empty);

        candidates.push(Candidate {
            position: pos,
            score,
        });

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = Some(pos);
        }
    }

    debug!(
        best = ?best,
        score = ?best.map(|_| best_score),
        nodes = search.nodes,
        "Search complete"
    );

    SearchReport {
        to_move: mark,
        best_move: best,
        score: best.map(|_| best_score),
        candidates,
        nodes: search.nodes,
    }
}

/// Depth-first value function with a node counter.
#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn value(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        let state = rules::game_state(board);
        if state.is_terminal() {
            return score(state);
        }

        let mark = if maximizing { Mark::X } else { Mark::O };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if board.is_empty(pos) {
                board.set(pos, Cell::Occupied(mark));
                let score = self.value(board, !maximizing);
                board.set(pos, Cell::Empty);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }

        best
    }
}
