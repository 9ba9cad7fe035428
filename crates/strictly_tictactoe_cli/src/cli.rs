//! Command-line interface for the tic-tac-toe driver.

use crate::{ConfigError, PlayConfig, Seat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe_engine::{Board, StrategyKind};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the engine, or ask it for a move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game to the end
    Play {
        /// Seat for X: human, one-ply, first-available or minimax
        #[arg(long)]
        x: Option<Seat>,

        /// Seat for O: human, one-ply, first-available or minimax
        #[arg(long)]
        o: Option<Seat>,

        /// Starting board, e.g. "XO./.X./..O"
        #[arg(long)]
        board: Option<Board>,
    },

    /// Print the move a strategy selects for a board
    Suggest {
        /// Board to analyse, e.g. "XO./.X./..O"
        #[arg(long)]
        board: Board,

        /// Strategy to ask
        #[arg(long, default_value_t = StrategyKind::OnePly)]
        strategy: StrategyKind,
    },
}

impl Cli {
    /// Loads the match configuration for `play`.
    ///
    /// `suggest` never reads a config file, so it returns `Ok(None)` even when
    /// the config on disk is malformed.
    pub fn play_config(&self) -> Result<Option<PlayConfig>, ConfigError> {
        match self.command {
            Command::Play { .. } => PlayConfig::load(self.config.as_deref()).map(Some),
            Command::Suggest { .. } => Ok(None),
        }
    }
}
