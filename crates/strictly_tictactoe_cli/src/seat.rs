//! Who plays a side: a human at the terminal or a built-in strategy.

use derive_more::{Display, Error};
use serde::Deserialize;
use std::str::FromStr;
use strictly_tictactoe_engine::StrategyKind;

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize)]
#[serde(try_from = "String")]
pub enum Seat {
    /// Moves are read from standard input.
    #[display("human")]
    Human,
    /// Moves are chosen by a strategy.
    #[display("{}", _0)]
    Strategy(StrategyKind),
}

/// Unrecognized seat name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown seat {:?} (expected human, one-ply, first-available or minimax)", name)]
pub struct SeatParseError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for Seat {
    type Err = SeatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == "human" {
            return Ok(Seat::Human);
        }
        StrategyKind::from_str(&name)
            .map(Seat::Strategy)
            .map_err(|_| SeatParseError { name })
    }
}

impl TryFrom<String> for Seat {
    type Error = SeatParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
