//! Tic-tac-toe - command-line driver.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use strictly_tictactoe_cli::{Cli, Command, HumanPlayer, Match, PlayConfig, Player, Seat, StrategyPlayer};
use strictly_tictactoe_engine::{Board, Mark, StrategyKind};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.play_config()?;

    let default_filter = config
        .as_ref()
        .map_or_else(|| "warn".to_string(), |c| c.log_filter().clone());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if let Some(config) = &config {
        info!(x = %config.x(), o = %config.o(), log_filter = %config.log_filter(), "Config in effect");
    }

    match cli.command {
        Command::Play { x, o, board } => run_play(
            config.unwrap_or_default().with_seats(x, o),
            board.unwrap_or_default(),
        ),
        Command::Suggest { board, strategy } => run_suggest(board, strategy),
    }
}

/// Builds the player for a seat.
fn seat_player(seat: Seat, mark: Mark) -> Box<dyn Player> {
    match seat {
        Seat::Human => Box::new(HumanPlayer::new(
            format!("Human {}", mark),
            std::io::stdin(),
            std::io::stdout(),
        )),
        Seat::Strategy(kind) => Box::new(StrategyPlayer::new(kind)),
    }
}

/// Plays one game between the configured seats.
#[instrument(skip_all, fields(x = %config.x(), o = %config.o(), start = %start))]
fn run_play(config: PlayConfig, start: Board) -> Result<()> {
    info!("Starting match");
    let mut game = Match::new(
        seat_player(*config.x(), Mark::X),
        seat_player(*config.o(), Mark::O),
    );

    let mut out = std::io::stdout();
    game.run(start, &mut out).context("Match aborted")?;
    out.flush()?;
    Ok(())
}

/// Prints the move a strategy selects.
#[instrument(skip_all, fields(board = %board, strategy = %kind))]
fn run_suggest(board: Board, kind: StrategyKind) -> Result<()> {
    let strategy = kind.build();
    let pos = strategy
        .choose_move(&board)
        .with_context(|| format!("{} could not choose a move for {}", strategy.name(), board))?;
    info!(position = %pos, "Move suggested");
    println!("{} {}", pos, pos.label());
    Ok(())
}
