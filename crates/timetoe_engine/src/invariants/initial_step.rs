//! Initial step invariant: the history is rooted at the empty board.

use super::Invariant;
use crate::{GameHistory, HistoryStep};

/// Invariant: step 0 is the empty board with no position.
pub struct InitialStepEmpty;

impl Invariant<GameHistory> for InitialStepEmpty {
    fn holds(history: &GameHistory) -> bool {
        history.steps().first() == Some(&HistoryStep::initial())
    }

    fn description() -> &'static str {
        "First step is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_fresh_history_holds() {
        assert!(InitialStepEmpty::holds(&GameHistory::new()));
    }

    #[test]
    fn test_holds_after_play_and_restart() {
        let mut history = GameHistory::replay([Position::Center, Position::TopLeft]).unwrap();
        assert!(InitialStepEmpty::holds(&history));
        history.restart();
        assert!(InitialStepEmpty::holds(&history));
    }

    #[test]
    fn test_positioned_root_violates() {
        let root = HistoryStep::new(Board::new(), Some(Position::Center));
        let history = GameHistory::from_parts_unchecked(vec![root], 0);
        assert!(!InitialStepEmpty::holds(&history));
    }

    #[test]
    fn test_empty_steps_violate() {
        let history = GameHistory::from_parts_unchecked(Vec::new(), 0);
        assert!(!InitialStepEmpty::holds(&history));
    }
}
