//! Board coordinates for tic-tac-toe moves.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Each variant names one cell of the 3x3 grid. Positions are the only way
/// to address a square, so a move can never point outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left, (0, 0).
    TopLeft,
    /// Top-center, (0, 1).
    TopCenter,
    /// Top-right, (0, 2).
    TopRight,
    /// Middle-left, (1, 0).
    MiddleLeft,
    /// Center, (1, 1).
    Center,
    /// Middle-right, (1, 2).
    MiddleRight,
    /// Bottom-left, (2, 0).
    BottomLeft,
    /// Bottom-center, (2, 1).
    BottomCenter,
    /// Bottom-right, (2, 2).
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a (row, column) pair, each in 0..3.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns the (row, column) pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Parses `"row col"` (0-based, space or comma separated) or a single
    /// cell number 1-9.
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Position> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [cell] => {
                let cell: usize = cell.parse().ok()?;
                cell.checked_sub(1).and_then(Self::from_index)
            }
            [row, col] => Self::from_coords(row.parse().ok()?, col.parse().ok()?),
            _ => None,
        }
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col).ok_or(EngineError::OutOfBounds { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
