//! Move list: the history as shown to the player.
//!
//! This is a display transform only. Sorting the list never reorders
//! [`GameHistory::steps`].

use super::{GameHistory, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that flips away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "↓ Desc",
            Self::Descending => "↑ Asc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort order '{other}' (expected asc or desc)")),
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index of the step in the history.
    pub step: usize,
    /// Position played to reach the step.
    pub position: Option<Position>,
    /// Whether the cursor is on this step.
    pub is_current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_current {
            write!(f, "You are at move #{}", self.step)?;
        } else if self.step == 0 {
            return write!(f, "Go to game start");
        } else {
            write!(f, "Go to move #{}", self.step)?;
        }
        if let Some(pos) = self.position {
            let (row, col) = pos.coordinates();
            write!(f, " ({row}, {col})")?;
        }
        Ok(())
    }
}

/// Lists every step of `history` in the requested order.
#[instrument(skip(history), fields(len = history.len(), cursor = history.cursor()))]
pub fn move_entries(history: &GameHistory, order: SortOrder) -> Vec<MoveEntry> {
    let entries = history
        .steps()
        .iter()
        .enumerate()
        .map(|(step, s)| MoveEntry {
            step,
            position: s.position(),
            is_current: step == history.cursor(),
        });
    match order {
        SortOrder::Ascending => entries.collect(),
        SortOrder::Descending => entries.rev().collect(),
    }
}
