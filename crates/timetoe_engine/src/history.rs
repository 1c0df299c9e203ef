//! Time-travel move history.
//!
//! [`GameHistory`] stores every board snapshot of the game together with a
//! cursor pointing at the step currently shown. Jumping only moves the cursor.
//! Playing from a past step discards every step after the cursor before
//! appending the new one, so the history never branches.

use super::action::{MoveError, apply_move};
use super::invariants::{
    AlternatingMarks, CursorInBounds, InitialStepEmpty, InvariantSet, InvariantViolation,
    StepsFollowPositions,
};
use super::rules::{self, GameStatus};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStep {
    board: Board,
    position: Option<Position>,
}

impl HistoryStep {
    /// The initial empty board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Builds a step without checking it against its parent.
    #[cfg(test)]
    pub(crate) fn new(board: Board, position: Option<Position>) -> Self {
        Self { board, position }
    }

    /// Board after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position played to reach this step (`None` for the initial step).
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Error returned when jumping outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// Target step does not exist.
    #[display("Cannot jump to step {target}: history has {len} steps")]
    OutOfRange {
        /// Requested step.
        target: usize,
        /// Number of recorded steps.
        len: usize,
    },
}

/// A move the engine rejected while replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {number} ({position}) rejected: {source}")]
pub struct RejectedMove {
    /// One-based position of the move in the list.
    pub number: usize,
    /// Position that was played.
    pub position: Position,
    /// Why the engine refused it.
    pub source: MoveError,
}

/// Deserialized history that failed its invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Invalid history: {}",
    violations.iter().map(|v| v.description.as_str()).collect::<Vec<_>>().join("; ")
)]
pub struct InvalidHistory {
    /// Every invariant that failed.
    pub violations: Vec<InvariantViolation>,
}

/// Ordered board snapshots plus the cursor into them.
///
/// Deserialization checks the history invariants, so a decoded history is
/// always one that could have been reached by playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    steps: Vec<HistoryStep>,
    cursor: usize,
}

#[derive(Deserialize)]
struct RawHistory {
    steps: Vec<HistoryStep>,
    cursor: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = InvalidHistory;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            steps: raw.steps,
            cursor: raw.cursor,
        };
        history.validate()?;
        Ok(history)
    }
}

type HistoryInvariants = (
    InitialStepEmpty,
    StepsFollowPositions,
    AlternatingMarks,
    CursorInBounds,
);

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            steps: vec![HistoryStep::initial()],
            cursor: 0,
        }
    }

    /// Builds a history by playing each position in order.
    ///
    /// # Errors
    ///
    /// Returns a [`RejectedMove`] for the first move the engine refuses.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Result<Self, RejectedMove> {
        let mut history = Self::new();
        for (i, position) in positions.into_iter().enumerate() {
            history.play(position).map_err(|source| RejectedMove {
                number: i + 1,
                position,
                source,
            })?;
        }
        Ok(history)
    }

    /// All recorded steps, oldest first.
    pub fn steps(&self) -> &[HistoryStep] {
        &self.steps
    }

    /// Index of the step currently shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded steps (always at least 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// False for every history built or decoded through this API.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at the cursor.
    pub fn current(&self) -> &HistoryStep {
        &self.steps[self.cursor]
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move, from cursor parity.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Status of the board at the cursor.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board())
    }

    /// Winning triple on the board at the cursor, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Plays `position` for the player to move at the cursor.
    ///
    /// Steps after the cursor are dropped, the new step is appended and the
    /// cursor moves onto it.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveError`]; the history is left unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.steps.len()))]
    pub fn play(&mut self, position: Position) -> Result<&HistoryStep, MoveError> {
        let player = self.next_player();
        let board = apply_move(self.current_board(), position, player)?;

        let discarded = self.steps.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future steps");
        }
        self.steps.truncate(self.cursor + 1);
        self.steps.push(HistoryStep {
            board,
            position: Some(position),
        });
        self.cursor = self.steps.len() - 1;

        debug_assert!(self.validate().is_ok(), "history invariants violated after play");
        debug!(%player, step = self.cursor, "Move played");
        Ok(&self.steps[self.cursor])
    }

    /// Moves the cursor to `target` without touching the steps.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `target >= len()`.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.steps.len()))]
    pub fn jump(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.steps.len() {
            debug!("Rejected jump");
            return Err(JumpError::OutOfRange {
                target,
                len: self.steps.len(),
            });
        }
        self.cursor = target;
        debug!("Jumped");
        Ok(())
    }

    /// Checks every history invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHistory`] listing each violated invariant.
    pub fn validate(&self) -> Result<(), InvalidHistory> {
        <HistoryInvariants as InvariantSet<GameHistory>>::check_all(self)
            .map_err(|violations| InvalidHistory { violations })
    }

    /// Builds a history without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(steps: Vec<HistoryStep>, cursor: usize) -> Self {
        Self { steps, cursor }
    }

    /// Resets to the single initial step.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.steps.len().saturating_sub(1), "Restarting game");
        self.steps.clear();
        self.steps.push(HistoryStep::initial());
        self.cursor = 0;
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
