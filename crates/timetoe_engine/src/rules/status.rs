//! Derived game status.

use super::{draw::is_draw, win::winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status label for a board, derived purely from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player has three in a row.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Board is full with no winner.
    #[display("Draw! No one wins.")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// Whether further moves are rejected.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// Computes the status of a board.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Winner(player)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::NextPlayer(board.next_player())
    }
}
