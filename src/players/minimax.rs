//! Automated player backed by the minimax search.

use super::Player;
use anyhow::{Context, Result};
use tictactoe_core::{Game, Position};
use tracing::{debug, instrument};

/// Plays the first best-scoring cell in row-major order.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn choose_move(&mut self, game: &mut Game) -> Result<Position> {
        let position = game
            .best_move()
            .context("Minimax player was asked to move in a finished game")?;
        debug!(position = %position, "Minimax chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
