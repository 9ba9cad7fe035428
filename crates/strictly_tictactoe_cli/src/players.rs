//! Player trait and implementations.

use anyhow::{Result, bail};
use std::io::{BufRead, Cursor, Stdin, Write};
use strictly_tictactoe_engine::{Board, Position, Strategy, StrategyKind, actions};
use tracing::{debug, instrument};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the player to move on `board`.
    fn get_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Computer player backed by an engine strategy.
pub struct StrategyPlayer {
    strategy: Box<dyn Strategy>,
}

impl StrategyPlayer {
    /// Creates a player for the given strategy.
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            strategy: kind.build(),
        }
    }
}

impl Player for StrategyPlayer {
    #[instrument(skip(self, board), fields(strategy = self.strategy.name(), board = %board))]
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let pos = self.strategy.choose_move(board)?;
        debug!(position = %pos, "Strategy chose move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

/// Source of typed lines for a [`HumanPlayer`].
pub trait LineInput {
    /// Reads one line into `buf`, returning the number of bytes read (0 at end
    /// of input).
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

/// Locks standard input only for the duration of each read, so two human
/// seats can share it.
impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        self.lock().read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player reading moves line by line.
///
/// Accepts `row col` (0-based) or a cell number 1-9. Unparseable or occupied
/// squares are reported on the prompt writer and asked for again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: LineInput, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

impl<R: LineInput, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let legal = actions(board);
        loop {
            write!(self.prompt, "{} to move (row col, or 1-9): ", self.name)?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match Position::parse_input(&line) {
                Some(pos) if legal.contains(&pos) => return Ok(pos),
                Some(pos) => writeln!(self.prompt, "Square {} is already occupied", pos)?,
                None => writeln!(self.prompt, "Could not read {:?} as a move", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
