//! Alternating marks invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameHistory, Player};

/// Invariant: step `k` places X when `k` is odd and O when `k` is even.
pub struct AlternatingMarks;

impl Invariant<GameHistory> for AlternatingMarks {
    fn holds(history: &GameHistory) -> bool {
        history.steps().iter().enumerate().skip(1).all(|(k, step)| {
            step.position()
                .and_then(|pos| step.board().get(pos).player())
                .is_some_and(|mark| mark == Player::for_turn(k - 1))
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryStep, Position};

    #[test]
    fn test_played_game_holds() {
        let mut history =
            GameHistory::replay([Position::Center, Position::TopLeft, Position::TopRight])
                .unwrap();
        assert!(AlternatingMarks::holds(&history));

        // Branching from step 1 keeps O on move 2.
        history.jump(1).unwrap();
        history.play(Position::BottomRight).unwrap();
        assert!(AlternatingMarks::holds(&history));
    }

    #[test]
    fn test_o_opening_violates() {
        let history = GameHistory::from_parts_unchecked(
            vec![
                HistoryStep::initial(),
                HistoryStep::new(Board::from_layout("....O...."), Some(Position::Center)),
            ],
            1,
        );
        assert!(!AlternatingMarks::holds(&history));
    }
}
