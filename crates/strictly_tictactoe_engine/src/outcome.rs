//! Outcome of a position, derived from the board on demand.

use super::rules::{is_full, winner};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Won(Player),
    /// Board is full with no winner.
    Draw,
    /// Game is ongoing.
    InProgress,
}

impl Outcome {
    /// Derives the outcome of a board.
    pub fn of(board: &Board) -> Self {
        match winner(board) {
            Some(player) => Outcome::Won(player),
            None if is_full(board) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}
