//! Player trait and implementations.

mod human;
mod minimax;

pub use human::{HumanPlayer, TerminalPlayer};
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Game, Position};

/// Something that picks moves for one side.
pub trait Player {
    /// Chooses the next move for the side to move in `game`.
    ///
    /// The game may be searched in place but is returned unchanged.
    fn choose_move(&mut self, game: &mut Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Who controls a side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    Human,
    /// Exhaustive minimax search.
    Minimax,
}

impl PlayerKind {
    /// Builds the console player for this kind, reading from stdin.
    pub fn console_player(self, name: impl Into<String>) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(TerminalPlayer::new(name)),
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_console_players_for_every_seating() {
        for x in PlayerKind::iter() {
            for o in PlayerKind::iter() {
                let player_x = x.console_player("X");
                let player_o = o.console_player("O");
                assert_eq!(player_x.name(), "X");
                assert_eq!(player_o.name(), "O");
            }
        }
    }
}
