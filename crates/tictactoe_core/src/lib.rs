//! Tic-tac-toe rules engine and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Position`], [`GameState`]
//! - **Rules**: pure win/draw detection over a board ([`rules`])
//! - **Game**: board plus turn indicator with validated moves ([`Game`])
//! - **Search**: minimax over the game's own board, mutated in place and
//!   restored on return ([`search`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameState, Position};
//!
//! let mut game = Game::new();
//! while game.state() == GameState::Playing {
//!     let pos = game.best_move().expect("moves remain while playing");
//!     game.place(pos)?;
//! }
//! assert_eq!(game.state(), GameState::Draw);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use error::MoveError;
pub use game::Game;
pub use position::Position;
pub use search::{Candidate, SearchReport};
pub use types::{Board, BoardParseError, Cell, GameState, Mark};
