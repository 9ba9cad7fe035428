//! Terminal driver for the tic-tac-toe engine.
//!
//! Seats two players (humans or engine strategies), runs the game loop and
//! renders the board. All game logic lives in `strictly_tictactoe_engine`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod seat;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayConfig};
pub use orchestrator::Match;
pub use players::{HumanPlayer, LineInput, Player, StrategyPlayer};
pub use seat::{Seat, SeatParseError};
