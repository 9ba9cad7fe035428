//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Every function takes a board by
//! reference and never modifies it.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{actions, result};
pub use terminal::{is_full, terminal, utility};
pub use turn::{checked_player, player};
pub use win::winner;
