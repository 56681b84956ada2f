//! Human player typing 1-based coordinates.

use super::Player;
use crate::input::read_in_range;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Stdin, Stdout, Write};
use tictactoe_core::{Game, Position};
use tracing::{debug, instrument};

/// Human player reading row and column from a line-based reader.
pub struct HumanPlayer<R, W> {
    name: String,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over any reader/writer pair.
    pub fn new(name: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            name: name.into(),
            reader,
            writer,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn choose_move(&mut self, game: &mut Game) -> Result<Position> {
        prompt_for_move(&mut self.reader, &mut self.writer, game)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Human player on the process terminal.
///
/// Stdin is locked only while a move is being entered, so both seats can
/// be human.
pub struct TerminalPlayer {
    name: String,
    stdin: Stdin,
    stdout: Stdout,
}

impl TerminalPlayer {
    /// Creates a human player reading from stdin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Player for TerminalPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn choose_move(&mut self, game: &mut Game) -> Result<Position> {
        let mut reader = self.stdin.lock();
        prompt_for_move(&mut reader, &mut self.stdout, game)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Prompts for 1-based row and column until they name an empty cell.
fn prompt_for_move<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    game: &Game,
) -> Result<Position> {
    loop {
        let row = read_in_range(reader, writer, "row (1 - 3): ", 1..=3)
            .context("Failed to read row")?;
        let col = read_in_range(reader, writer, "col (1 - 3): ", 1..=3)
            .context("Failed to read column")?;

        let (row, col) = (row - 1, col - 1);
        if game.is_valid_move(row, col)
            && let Some(position) = Position::new(row, col)
        {
            debug!(position = %position, "Human chose position");
            return Ok(position);
        }

        debug!(row, col, "Cell taken, prompting again");
        writeln!(writer, "That cell is taken, try again.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_converts_to_zero_based() {
        let mut game = Game::new();
        let mut player = HumanPlayer::new("me", Cursor::new("1\n3\n"), Vec::new());
        assert_eq!(player.choose_move(&mut game).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_reprompts_for_occupied_cell() {
        let mut game = Game::new();
        game.make_move(1, 1).unwrap();
        let mut player = HumanPlayer::new("me", Cursor::new("2\n2\n3\n1\n"), Vec::new());
        assert_eq!(player.choose_move(&mut game).unwrap(), Position::BottomLeft);
        let output = String::from_utf8(player.writer).unwrap();
        assert!(output.contains("try again"));
        assert_eq!(output.matches("row (1 - 3): ").count(), 2);
    }

    #[test]
    fn test_closed_input_fails() {
        let mut game = Game::new();
        let mut player = HumanPlayer::new("me", Cursor::new(""), Vec::new());
        assert!(player.choose_move(&mut game).is_err());
    }

    #[test]
    fn test_terminal_players_share_stdin() {
        // Construction must not hold the stdin lock.
        let x = TerminalPlayer::new("X");
        let o = TerminalPlayer::new("O");
        assert_eq!(x.name(), "X");
        assert_eq!(o.name(), "O");
        let _guard = io::stdin().lock();
    }
}
