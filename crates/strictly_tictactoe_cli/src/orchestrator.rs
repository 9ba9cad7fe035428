//! Game orchestration between two players.

use crate::players::Player;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_tictactoe_engine::{Board, Mark, Outcome, checked_player, result, terminal};
use tracing::{info, instrument};

/// Runs a game between two players until the board is terminal.
pub struct Match {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Match {
    /// Creates a new match.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self { player_x, player_o }
    }

    /// Plays from `start` to the end, rendering the board to `out` after
    /// every ply. Returns the final board.
    #[instrument(skip_all, fields(start = %start, x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run(&mut self, start: Board, out: &mut dyn Write) -> Result<Board> {
        info!("Starting game orchestration");
        let mut board = start;
        writeln!(out, "{}\n", board.render())?;

        while !terminal(&board) {
            let mover = checked_player(&board)?;
            let player = match mover {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            let position = player
                .get_move(&board)
                .with_context(|| format!("{} ({}) failed to move", player.name(), mover))?;
            board = result(&board, position)?;
            info!(%mover, player = player.name(), %position, board = %board, "Move made");

            writeln!(out, "{} plays {} at {}", player.name(), mover, position)?;
            writeln!(out, "{}\n", board.render())?;
        }

        let outcome = Outcome::of(&board);
        info!(%outcome, "Game over");
        match outcome.winner() {
            Some(Mark::X) => writeln!(out, "{} (X) wins", self.player_x.name())?,
            Some(Mark::O) => writeln!(out, "{} (O) wins", self.player_o.name())?,
            None => writeln!(out, "{}", outcome)?,
        }
        Ok(board)
    }
}
