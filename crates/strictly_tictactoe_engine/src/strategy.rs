//! Pluggable move-selection strategies.

use super::rules::{actions, checked_player, player, result, terminal, utility};
use super::search::{self, improves, winning_score, worst_score};
use super::{Board, EngineError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something that picks a move for the player to move.
pub trait Strategy: Send + Sync {
    /// Short name used in logs and on the command line.
    fn name(&self) -> &str;

    /// Chooses a move on a non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] on a full board, and
    /// [`EngineError::InvalidPlayer`] if the mover cannot be determined.
    fn choose_move(&self, board: &Board) -> Result<Position, EngineError>;
}

/// One-ply lookahead over immediate outcomes ([`search::minimax`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePly;

impl Strategy for OnePly {
    fn name(&self) -> &str {
        "one-ply"
    }

    fn choose_move(&self, board: &Board) -> Result<Position, EngineError> {
        search::minimax(board)
    }
}

/// Picks the first empty square in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl Strategy for FirstAvailable {
    fn name(&self) -> &str {
        "first-available"
    }

    #[instrument(skip(self, board), fields(board = %board))]
    fn choose_move(&self, board: &Board) -> Result<Position, EngineError> {
        let first = actions(board)
            .first()
            .copied()
            .ok_or(EngineError::NoLegalMoves)?;
        checked_player(board)?;
        Ok(first)
    }
}

/// Exhaustive minimax to the end of the game.
///
/// Scores every move by the value of the game under perfect play from both
/// sides. Ties go to the first move in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Game value of `board` under perfect play: 1, 0 or -1.
    ///
    /// # Errors
    ///
    /// Propagates any error from applying a move.
    pub fn value(board: &Board) -> Result<i8, EngineError> {
        if terminal(board) {
            return Ok(utility(board));
        }

        let mover = player(board);
        let mut best = worst_score(mover);
        for action in actions(board) {
            let value = Self::value(&result(board, action)?)?;
            if improves(mover, value, best) {
                best = value;
            }
            if best == winning_score(mover) {
                break;
            }
        }
        Ok(best)
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &str {
        "minimax"
    }

    #[instrument(skip(self, board), fields(board = %board))]
    fn choose_move(&self, board: &Board) -> Result<Position, EngineError> {
        let possible_actions = actions(board);
        let Some(&first) = possible_actions.first() else {
            return Err(EngineError::NoLegalMoves);
        };
        let mover = checked_player(board)?;

        let mut best_value = worst_score(mover);
        let mut best_action = None;
        for action in possible_actions {
            let value = Self::value(&result(board, action)?)?;
            debug!(%mover, %action, value, "Evaluated move");
            if improves(mover, value, best_value) {
                best_value = value;
                best_action = Some(action);
            }
            if value == winning_score(mover) {
                break;
            }
        }

        Ok(best_action.unwrap_or(first))
    }
}

/// Names of the built-in strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// [`OnePly`].
    #[default]
    OnePly,
    /// [`FirstAvailable`].
    FirstAvailable,
    /// [`Minimax`].
    Minimax,
}

impl StrategyKind {
    /// Instantiates the strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::OnePly => Box::new(OnePly),
            StrategyKind::FirstAvailable => Box::new(FirstAvailable),
            StrategyKind::Minimax => Box::new(Minimax),
        }
    }
}
