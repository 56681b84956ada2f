//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, Mark, Position};

use super::app::App;
use crate::render::{BORDER, cell_char};

/// Renders the board, status line and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe vs Minimax")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows: move  enter/space or 1-9: place  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BORDER.len() as u16, 7);
    let border_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from(Span::styled(BORDER, border_style))];
    for row in Position::ALL.chunks(3) {
        let mut spans = Vec::with_capacity(7);
        for pos in row {
            spans.push(Span::styled("| ", border_style));
            spans.push(cell_span(app, *pos));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("|", border_style));
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(BORDER, border_style)));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(app: &App, pos: Position) -> Span<'static> {
    let cell = app.game().board().get(pos);
    let base_style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if app.awaiting_human() && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(cell_char(cell, app.empty_cell()).to_string(), style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::PlayerKind;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(64, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_bordered_grid() {
        let mut app = App::new(PlayerKind::Human, PlayerKind::Human, '-');
        app.handle_key(KeyCode::Char('1'));
        let screen = rendered(&app);
        assert_eq!(screen.matches(BORDER).count(), 4);
        assert!(screen.contains("| X | - | - |"));
        assert!(screen.contains("O's turn"));
    }
}
