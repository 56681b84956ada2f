//! Application state and logic.

use crate::players::PlayerKind;
use crossterm::event::KeyCode;
use tictactoe_core::{Game, GameState, Mark, Position};
use tracing::{debug, info, warn};

use super::input::move_cursor;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
    player_x: PlayerKind,
    player_o: PlayerKind,
    empty_cell: char,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(player_x: PlayerKind, player_o: PlayerKind, empty_cell: char) -> Self {
        let mut app = Self {
            game: Game::new(),
            cursor: Position::Center,
            status_message: String::new(),
            player_x,
            player_o,
            empty_cell,
            should_quit: false,
        };
        app.status_message = app.turn_message();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Placeholder drawn for empty cells.
    pub fn empty_cell(&self) -> char {
        self.empty_cell
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Who controls `mark`.
    pub fn kind_for(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
        }
    }

    /// True when the game waits on keyboard input.
    pub fn awaiting_human(&self) -> bool {
        self.game.state() == GameState::Playing
            && self.kind_for(self.game.to_move()) == PlayerKind::Human
    }

    /// Plays one automated move if it is the search's turn.
    ///
    /// Returns whether a move was made.
    pub fn step_automated(&mut self) -> bool {
        if self.game.state() != GameState::Playing
            || self.kind_for(self.game.to_move()) != PlayerKind::Minimax
        {
            return false;
        }

        match self.game.best_move() {
            Some(position) => {
                self.place(position);
                true
            }
            None => false,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.awaiting_human() {
                    self.place(self.cursor);
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.awaiting_human()
                    && let Some(position) = Position::from_label_or_number(&c.to_string())
                {
                    self.cursor = position;
                    self.place(position);
                }
            }
            _ => {}
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
        self.status_message = format!("Game restarted. {}", self.turn_message());
    }

    fn place(&mut self, position: Position) {
        let mark = self.game.to_move();
        match self.game.place(position) {
            Ok(()) => {
                debug!(%mark, position = %position, "Move applied to UI state");
                let state = self.game.state();
                self.status_message = if state.is_terminal() {
                    format!("{} Press 'r' to restart or 'q' to quit.", state)
                } else {
                    format!("{} played {}. {}", mark, position.label(), self.turn_message())
                };
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("{}. Try again.", e);
            }
        }
    }

    fn turn_message(&self) -> String {
        let mark = self.game.to_move();
        format!("{}'s turn ({})", mark, self.kind_for(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Cell;

    #[test]
    fn test_human_places_at_cursor() {
        let mut app = App::new(PlayerKind::Human, PlayerKind::Human, '-');
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(app.game().to_move(), Mark::O);
        assert!(app.status_message().starts_with("X played Top-left"));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut app = App::new(PlayerKind::Human, PlayerKind::Human, '-');
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().to_move(), Mark::O);
        assert!(app.status_message().contains("already occupied"));
    }

    #[test]
    fn test_minimax_moves_on_its_turn_only() {
        let mut app = App::new(PlayerKind::Minimax, PlayerKind::Human, '-');
        assert!(!app.awaiting_human());
        assert!(app.step_automated());
        assert_eq!(app.game().board().get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert!(app.awaiting_human());
        assert!(!app.step_automated());
    }

    #[test]
    fn test_keys_ignored_while_minimax_to_move() {
        let mut app = App::new(PlayerKind::Minimax, PlayerKind::Human, '-');
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.game().board().count(Mark::X), 0);
    }

    #[test]
    fn test_self_play_reaches_draw() {
        let mut app = App::new(PlayerKind::Minimax, PlayerKind::Minimax, '-');
        while app.step_automated() {}
        assert_eq!(app.game().state(), GameState::Draw);
        assert!(app.status_message().starts_with("Draw!"));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(PlayerKind::Human, PlayerKind::Human, '-');
        app.handle_key(KeyCode::Char('9'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game(), &Game::new());
        assert!(app.status_message().starts_with("Game restarted"));
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
