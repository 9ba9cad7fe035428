//! Turn determination.

use super::super::{Board, EngineError, Player};
use tracing::{instrument, warn};

/// Returns the player who moves next.
///
/// X moves first, so X is to move whenever both marks appear equally often.
/// Assumes a well-formed board.
#[instrument(skip(board), fields(board = %board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns the player who moves next, rejecting boards whose mark counts
/// could not have arisen from play.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPlayer`] unless X has as many marks as O
/// or exactly one more.
pub fn checked_player(board: &Board) -> Result<Player, EngineError> {
    if board.is_consistent() {
        Ok(player(board))
    } else {
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        warn!(x, o, board = %board, "Rejected board with inconsistent mark counts");
        Err(EngineError::InvalidPlayer { x, o })
    }
}
