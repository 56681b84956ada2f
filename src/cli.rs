//! Command-line interface for the tic-tac-toe binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use minimax_tictactoe::{Mark, PlayerKind};

/// Tic-tac-toe against an exhaustive minimax search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console with line-based input
    Play {
        /// Seat assignments
        #[command(flatten)]
        seats: SeatArgs,

        /// Keep previous boards on screen instead of clearing
        #[arg(long)]
        no_clear: bool,
    },

    /// Play in a full-screen terminal UI
    Tui {
        /// Seat assignments
        #[command(flatten)]
        seats: SeatArgs,
    },

    /// Print minimax scores for every empty cell of a board
    Solve {
        /// Board in row-major order, e.g. "XX-/OO-/---"
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long, value_enum)]
        to_move: Option<Side>,

        /// Emit the search report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Who controls each side.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct SeatArgs {
    /// Controller for X
    #[arg(long = "x", value_enum)]
    pub player_x: Option<PlayerKind>,

    /// Controller for O
    #[arg(long = "o", value_enum)]
    pub player_o: Option<PlayerKind>,
}

/// A side on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// X
    X,
    /// O
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_seat_overrides() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--x", "human", "--o", "minimax"]).unwrap();
        match cli.command {
            Some(Command::Play { seats, no_clear }) => {
                assert_eq!(seats.player_x, Some(PlayerKind::Human));
                assert_eq!(seats.player_o, Some(PlayerKind::Minimax));
                assert!(!no_clear);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_solve_arguments() {
        let cli = Cli::try_parse_from(["tictactoe", "solve", "XX-/OO-/---", "--to-move", "o", "--json"])
            .unwrap();
        match cli.command {
            Some(Command::Solve { board, to_move, json }) => {
                assert_eq!(board, "XX-/OO-/---");
                assert_eq!(to_move, Some(Side::O));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
