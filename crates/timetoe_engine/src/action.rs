//! Applying a single move to a board.
//!
//! Moves never mutate their input: a legal move yields a new board and an
//! illegal one yields a [`MoveError`], leaving the caller's state as it was.

use super::rules::winner;
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Returns a copy of `board` with `player` placed at `position`.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board already has a winner.
/// - [`MoveError::SquareOccupied`] if the square is taken.
#[instrument(skip(board), fields(position = %position, player = %player))]
pub fn apply_move(board: &Board, position: Position, player: Player) -> Result<Board, MoveError> {
    if winner(board).is_some() {
        debug!("Rejected move: game already won");
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(position) {
        debug!("Rejected move: square occupied");
        return Err(MoveError::SquareOccupied(position));
    }

    let mut next = *board;
    next.set(position, Square::Occupied(player));
    Ok(next)
}
