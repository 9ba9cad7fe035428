//! Terminal detection and outcome scoring.

use super::super::{Board, Outcome, Player, Square};
use super::winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true if the game is over: someone has won, or the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board: `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Only meaningful on terminal boards; an in-progress board scores `0`.
#[instrument(skip(board), fields(board = %board))]
pub fn utility(board: &Board) -> i8 {
    match Outcome::of(board) {
        Outcome::Won(Player::X) => 1,
        Outcome::Won(Player::O) => -1,
        Outcome::Draw | Outcome::InProgress => 0,
    }
}
