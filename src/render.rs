//! Plain-text rendering of boards and search results.

use tictactoe_core::{Board, Cell, Mark, Position, SearchReport};

/// Horizontal rule drawn above, between and below the rows.
pub const BORDER: &str = "+---+---+---+";

/// Character shown for a cell.
pub fn cell_char(cell: Cell, empty: char) -> char {
    cell.mark().map_or(empty, Mark::symbol)
}

/// Draws the board as a bordered 3x3 ASCII grid, one line per row of text.
pub fn render_board(board: &Board, empty: char) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for row in Position::ALL.chunks(3) {
        for pos in row {
            out.push_str("| ");
            out.push(cell_char(board.get(*pos), empty));
            out.push(' ');
        }
        out.push_str("|\n");
        out.push_str(BORDER);
        out.push('\n');
    }
    out
}

/// Announces whose move it is.
pub fn turn_banner(mark: Mark) -> String {
    format!("{}'s turn", mark)
}

/// Lists every candidate score and the chosen move.
pub fn render_report(report: &SearchReport) -> String {
    let mut out = format!("{} to move\n", report.to_move);
    for candidate in &report.candidates {
        let label = candidate.position.to_string();
        out.push_str(&format!("  {:<28} {:+}\n", label, candidate.score));
    }
    match (report.best_move, report.score) {
        (Some(pos), Some(score)) => {
            out.push_str(&format!("Best move: {} (score {:+})\n", pos, score));
        }
        _ => out.push_str("No legal moves\n"),
    }
    out.push_str(&format!("Positions searched: {}\n", report.nodes));
    out
}
