//! Pure tic-tac-toe rules and move selection.
//!
//! The engine is a set of pure functions over immutable [`Board`] values:
//!
//! - [`player`]: who moves next
//! - [`actions`]: legal moves in row-major order
//! - [`result`]: the board after the player to move marks a square
//! - [`winner`], [`terminal`], [`utility`]: game-end detection and scoring
//! - [`minimax`]: one-ply move selection
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_engine::{minimax, result, terminal, Board};
//!
//! # fn main() -> Result<(), strictly_tictactoe_engine::EngineError> {
//! let mut board = Board::new();
//! while !terminal(&board) {
//!     let pos = minimax(&board)?;
//!     board = result(&board, pos)?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod position;
pub mod rules;
pub mod search;
pub mod strategy;
mod types;

pub use error::{BoardParseError, EngineError};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{actions, checked_player, player, result, terminal, utility, winner};
pub use search::minimax;
pub use strategy::{FirstAvailable, Minimax, OnePly, Strategy, StrategyKind};
pub use types::{Board, Player, Square};

/// Alias for clarity: a move is the position it marks.
pub type Move = Position;

/// Alias for clarity: a player's mark.
pub type Mark = Player;
