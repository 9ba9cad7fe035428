//! Engine error types.

use super::Position;

/// Error returned by the rule and search functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The targeted square is already occupied.
    #[display("Invalid move: square {} is already occupied", _0)]
    InvalidMove(Position),

    /// Move selection was asked for a board with no empty squares.
    #[display("No legal moves available")]
    NoLegalMoves,

    /// The mover cannot be determined because the mark counts are inconsistent.
    #[display("Invalid player: board has {} X and {} O marks", x, o)]
    InvalidPlayer {
        /// Number of X marks on the board.
        x: usize,
        /// Number of O marks on the board.
        o: usize,
    },

    /// A coordinate pair lies outside the 3x3 grid.
    #[display("Position ({}, {}) is out of bounds (must be 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for EngineError {}

/// Error parsing a board from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Notation must contain exactly three `/`-separated rows.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(usize),

    /// A row must contain exactly three squares.
    #[display("Row {} has {} squares, expected 3", row, len)]
    RowLength {
        /// Offending row (0-based).
        row: usize,
        /// Number of squares found.
        len: usize,
    },

    /// A character other than `X`, `O`, `.`, `_` or `-`.
    #[display("Unknown square symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardParseError {}
