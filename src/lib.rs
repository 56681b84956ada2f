//! Terminal tic-tac-toe against an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): board, rules and minimax search
//! - **Players**: human (line input) and minimax seats behind one trait
//! - **Orchestrator**: the console game loop with a plain ASCII board
//! - **TUI**: a full-screen ratatui front end over the same core
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameState, MinimaxPlayer, Orchestrator};
//!
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(MinimaxPlayer::new("X")),
//!     Box::new(MinimaxPlayer::new("O")),
//!     Vec::new(),
//! );
//! assert_eq!(orchestrator.run()?, GameState::Draw);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod orchestrator;
mod players;
mod render;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Input and rendering
pub use input::{InputError, read_in_range};
pub use render::{BORDER, cell_char, render_board, render_report, turn_banner};

// Crate-level exports - Players and orchestration
pub use orchestrator::Orchestrator;
pub use players::{HumanPlayer, MinimaxPlayer, Player, PlayerKind, TerminalPlayer};

// Crate-level exports - Core game types
pub use tictactoe_core::{
    Board, BoardParseError, Candidate, Cell, Game, GameState, Mark, MoveError, Position,
    SearchReport, invariants, rules, search,
};
