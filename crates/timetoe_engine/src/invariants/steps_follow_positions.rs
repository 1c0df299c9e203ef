//! Step consistency invariant: each step adds exactly its recorded mark.

use super::Invariant;
use crate::{GameHistory, HistoryStep, Position, Square};

/// Invariant: every step after the first equals its parent plus one mark.
///
/// The recorded position must be empty on the parent board, occupied on the
/// child board, and every other square must be unchanged.
pub struct StepsFollowPositions;

fn follows(parent: &HistoryStep, child: &HistoryStep) -> bool {
    let Some(played) = child.position() else {
        return false;
    };
    Position::ALL.iter().all(|&pos| {
        let before = parent.board().get(pos);
        let after = child.board().get(pos);
        if pos == played {
            before == Square::Empty && after != Square::Empty
        } else {
            before == after
        }
    })
}

impl Invariant<GameHistory> for StepsFollowPositions {
    fn holds(history: &GameHistory) -> bool {
        history
            .steps()
            .windows(2)
            .all(|pair| follows(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each step adds exactly the mark at its recorded position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn history(child: &str, position: Position) -> GameHistory {
        GameHistory::from_parts_unchecked(
            vec![
                HistoryStep::initial(),
                HistoryStep::new(Board::from_layout(child), Some(position)),
            ],
            1,
        )
    }

    #[test]
    fn test_replayed_game_holds() {
        let history = GameHistory::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(StepsFollowPositions::holds(&history));
    }

    #[test]
    fn test_single_mark_holds() {
        assert!(StepsFollowPositions::holds(&history("X........", Position::TopLeft)));
    }

    #[test]
    fn test_extra_mark_violates() {
        assert!(!StepsFollowPositions::holds(&history("X...O....", Position::TopLeft)));
    }

    #[test]
    fn test_wrong_recorded_position_violates() {
        assert!(!StepsFollowPositions::holds(&history("X........", Position::Center)));
    }

    #[test]
    fn test_missing_position_violates() {
        let history = GameHistory::from_parts_unchecked(
            vec![HistoryStep::initial(), HistoryStep::initial()],
            1,
        );
        assert!(!StepsFollowPositions::holds(&history));
    }
}
