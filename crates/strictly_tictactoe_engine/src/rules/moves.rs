//! Legal-move enumeration and move application.

use super::super::{Board, EngineError, Move, Position, Square};
use super::player;
use tracing::{instrument, trace};

/// Returns every empty position, in row-major order.
///
/// The result is empty when the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn actions(board: &Board) -> Vec<Move> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Returns the board that results from the player to move marking `action`.
///
/// The mover is inferred with [`player`] on the input board. The input board
/// is not modified.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMove`] if the square is already occupied.
#[instrument(skip(board), fields(board = %board, action = %action))]
pub fn result(board: &Board, action: Move) -> Result<Board, EngineError> {
    if !board.is_empty(action) {
        return Err(EngineError::InvalidMove(action));
    }

    let mover = player(board);
    let next = board.with(action, Square::Occupied(mover));
    trace!(%mover, next = %next, "Move applied");
    Ok(next)
}
