//! Pure tic-tac-toe logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a 9-square [`Board`] (win, draw, status)
//! - **Action**: [`apply_move`] produces a new board or a [`MoveError`]
//! - **History**: [`GameHistory`] keeps every snapshot and a cursor; playing
//!   from a past step discards the steps after it
//! - **Moves**: the move list shown next to the board, in either order
//! - **Invariants**: properties every history satisfies, checked in debug builds
//!
//! # Example
//!
//! ```
//! use timetoe_engine::{GameHistory, GameStatus, Player, Position};
//!
//! let mut history = GameHistory::new();
//! history.play(Position::Center).unwrap();
//! history.play(Position::TopLeft).unwrap();
//! history.jump(1).unwrap();
//! history.play(Position::BottomRight).unwrap();
//!
//! assert_eq!(history.len(), 3);
//! assert_eq!(history.status(), GameStatus::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, apply_move};
pub use history::{GameHistory, HistoryStep, InvalidHistory, JumpError, RejectedMove};
pub use moves::{MoveEntry, SortOrder, move_entries};
pub use position::Position;
pub use rules::{GameStatus, is_draw, is_full, status, winner, winning_line};
pub use types::{Board, Player, Square};
