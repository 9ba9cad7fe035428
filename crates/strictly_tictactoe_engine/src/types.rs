//! Core domain types for tic-tac-toe.

use super::error::BoardParseError;
use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }

    fn from_symbol(c: char) -> Result<Self, BoardParseError> {
        match c {
            'X' | 'x' => Ok(Square::Occupied(Player::X)),
            'O' | 'o' => Ok(Square::Occupied(Player::O)),
            '.' | '_' | '-' => Ok(Square::Empty),
            other => Err(BoardParseError::UnknownSymbol(other)),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: nothing mutates a board in place. Applying a move
/// (see [`crate::rules::result`]) produces a new board and leaves the old one
/// as a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from three rows of squares.
    ///
    /// The layout is taken as given; use [`Board::is_consistent`] to check
    /// that it could have arisen from play.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            squares[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at (row, column), or `None` outside the grid.
    pub fn at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Checks the mark-count invariant: X has as many marks as O, or one more.
    pub fn is_consistent(&self) -> bool {
        let x_count = self.count(Player::X);
        let o_count = self.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    /// Returns a copy of this board with `square` at `pos`.
    pub(crate) fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their cell number (1-9) so a human can pick one.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: three rows separated by `/`, e.g. `XO./.X./..O`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.chunks(3).enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.trim().chars().collect();
            if symbols.len() != 3 {
                return Err(BoardParseError::RowLength {
                    row: r,
                    len: symbols.len(),
                });
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                squares[r * 3 + c] = Square::from_symbol(symbol)?;
            }
        }

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_from_rows_is_row_major() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        assert_eq!(board.get(Position::TopLeft), X);
        assert_eq!(board.get(Position::Center), O);
        assert_eq!(board.at(2, 2), Some(X));
        assert_eq!(board.at(0, 3), None);
    }

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "XO./.X./..O".parse().expect("valid notation");
        assert_eq!(board.to_string(), "XO./.X./..O");
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_notation_errors() {
        assert_eq!(
            "XO./.X.".parse::<Board>(),
            Err(BoardParseError::RowCount(2))
        );
        assert_eq!(
            "XO/.X./..O".parse::<Board>(),
            Err(BoardParseError::RowLength { row: 0, len: 2 })
        );
        assert_eq!(
            "XOZ/.X./..O".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('Z'))
        );
    }

    #[test]
    fn test_consistency() {
        assert!(Board::new().is_consistent());
        assert!(Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]).is_consistent());
        assert!(!Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]).is_consistent());
        assert!(!Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]).is_consistent());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), X);
    }

    #[test]
    fn test_render() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        assert_eq!(board.render(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
