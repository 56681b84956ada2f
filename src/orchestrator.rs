//! Console game loop between two players.

use crate::players::Player;
use crate::render;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use tictactoe_core::{Game, GameState, Mark};
use tracing::{debug, info, instrument};

/// Orchestrates a console game between two players.
pub struct Orchestrator<W: Write> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
    clear_screen: bool,
    empty_cell: char,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a fresh game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            out,
            clear_screen: false,
            empty_cell: '-',
        }
    }

    /// Starts from an existing position instead of an empty board.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Clears the terminal before each board when enabled.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Placeholder drawn for empty cells.
    pub fn with_empty_cell(mut self, empty_cell: char) -> Self {
        self.empty_cell = empty_cell;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop until a terminal state and returns it.
    ///
    /// # Errors
    ///
    /// Fails when a player cannot produce a move (for example, closed input)
    /// or the output cannot be written.
    #[instrument(skip(self), fields(player_x = %self.player_x.name(), player_o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameState> {
        info!("Starting game orchestration");

        loop {
            let state = self.game.state();
            self.draw()?;

            if state.is_terminal() {
                writeln!(self.out, "{}", state)?;
                info!(%state, "Game over");
                return Ok(state);
            }

            let mark = self.game.to_move();
            writeln!(self.out, "{}", render::turn_banner(mark))?;
            self.out.flush()?;

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.choose_move(&mut self.game)?;
            self.game
                .place(position)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;
            info!(player = %player.name(), %mark, position = %position, "Move made");
        }
    }

    fn draw(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(
            self.out,
            "{}",
            render::render_board(self.game.board(), self.empty_cell)
        )?;
        Ok(())
    }
}
