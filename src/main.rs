//! Tic-tac-toe - unified CLI
//!
//! Console play, full-screen TUI play, and position analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SeatArgs, Side};
use minimax_tictactoe::{
    Board, Game, GameConfig, Mark, Orchestrator, render_board, render_report, tui,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(Some(&cli.config))?;

    match cli.command {
        None => run_play(config, SeatArgs::default(), false),
        Some(Command::Play { seats, no_clear }) => run_play(config, seats, no_clear),
        Some(Command::Tui { seats }) => run_tui(config, seats),
        Some(Command::Solve {
            board,
            to_move,
            json,
        }) => run_solve(&board, to_move, json),
    }
}

/// Play in the console.
fn run_play(config: GameConfig, seats: SeatArgs, no_clear: bool) -> Result<()> {
    let config = config.with_players(seats.player_x, seats.player_o);
    let config = if no_clear {
        config.with_clear_screen(false)
    } else {
        config
    };
    initialize_file_tracing(config.log_file())?;

    let player_x = config.player_x().console_player(format!("X ({})", config.player_x()));
    let player_o = config.player_o().console_player(format!("O ({})", config.player_o()));

    let mut orchestrator = Orchestrator::new(player_x, player_o, std::io::stdout())
        .with_clear_screen(*config.clear_screen())
        .with_empty_cell(*config.empty_cell());

    let state = orchestrator.run()?;
    info!(%state, "Console game finished");
    Ok(())
}

/// Play in the TUI.
fn run_tui(config: GameConfig, seats: SeatArgs) -> Result<()> {
    let config = config.with_players(seats.player_x, seats.player_o);
    initialize_file_tracing(config.log_file())?;
    tui::run_tui(&config)
}

/// Analyze a position and print the scores.
#[instrument]
fn run_solve(board: &str, to_move: Option<Side>, json: bool) -> Result<()> {
    initialize_stderr_tracing();

    let board: Board = board.parse().context("Invalid board")?;
    let mut game = match to_move {
        Some(side) => Game::from_board_with_turn(board, Mark::from(side)),
        None => Game::from_board(board),
    }
    .context("Board cannot arise from legal play")?;

    let state = game.state();
    if state.is_terminal() && !json {
        print!("{}", render_board(game.board(), '-'));
        println!("Game is over: {}", state);
        return Ok(());
    }

    let report = game.analyze();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_board(game.board(), '-'));
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Logs to a file so the board is never interleaved with log lines.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %path.display(), "Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
