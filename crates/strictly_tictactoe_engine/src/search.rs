//! Move selection by lookahead over immediate outcomes.
//!
//! [`minimax`] scores each legal move by the [`utility`] of the board it
//! produces, looking one ply ahead. X maximizes and O minimizes. A move that
//! wins on the spot is returned immediately; otherwise the first best-scoring
//! move in row-major order is chosen.
//!
//! For a search that follows every line to the end of the game, see
//! [`crate::strategy::Minimax`].

use super::rules::{actions, checked_player, result, utility};
use super::{Board, EngineError, Player, Position};
use tracing::{debug, instrument};

/// Best score the given player can hope for.
pub(crate) fn winning_score(player: Player) -> i8 {
    match player {
        Player::X => 1,
        Player::O => -1,
    }
}

/// Sentinel worse than any real score for the given player.
pub(crate) fn worst_score(player: Player) -> i8 {
    match player {
        Player::X => i8::MIN,
        Player::O => i8::MAX,
    }
}

/// True if `candidate` is strictly better than `best` for `player`.
pub(crate) fn improves(player: Player, candidate: i8, best: i8) -> bool {
    match player {
        Player::X => candidate > best,
        Player::O => candidate < best,
    }
}

/// Selects a move for the player to move.
///
/// # Errors
///
/// - [`EngineError::NoLegalMoves`] if the board is full.
/// - [`EngineError::InvalidPlayer`] if the mark counts are inconsistent, so
///   the mover cannot be determined.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Result<Position, EngineError> {
    let possible_actions = actions(board);
    let Some(&first) = possible_actions.first() else {
        return Err(EngineError::NoLegalMoves);
    };
    let mover = checked_player(board)?;

    let mut best_value = worst_score(mover);
    let mut best_action = None;

    for action in possible_actions {
        let candidate_value = utility(&result(board, action)?);
        debug!(%mover, %action, candidate_value, "Evaluated move");

        if improves(mover, candidate_value, best_value) {
            best_value = candidate_value;
            best_action = Some(action);
        }
        if candidate_value == winning_score(mover) {
            debug!(%mover, %action, "Winning move found");
            return Ok(action);
        }
    }

    let chosen = best_action.unwrap_or(first);
    debug!(%mover, %chosen, best_value, "Move selected");
    Ok(chosen)
}
