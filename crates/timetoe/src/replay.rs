//! Headless replay: apply a move list and print the resulting game.

use serde::Serialize;
use timetoe_engine::{
    GameHistory, GameStatus, JumpError, MoveEntry, Position, RejectedMove, SortOrder, move_entries,
};
use tracing::{debug, instrument};

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Board grid, status and move list as plain text.
    #[default]
    Text,
    /// The full history plus derived status as JSON.
    Json,
}

/// Errors raised while replaying a move list.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// A token is neither an index 0-8 nor a position label.
    #[display("Cannot parse move '{token}' (expected 0-8 or a position label)")]
    Parse {
        /// The offending token.
        token: String,
    },
    /// The engine rejected a move.
    #[display("{_0}")]
    Rejected(RejectedMove),
    /// The requested step does not exist.
    #[display("{_0}")]
    Jump(JumpError),
    /// JSON encoding failed.
    #[display("Failed to encode replay: {_0}")]
    Encode(serde_json::Error),
}

/// Splits `input` on commas and whitespace and parses each token.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ReplayError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token).ok_or_else(|| ReplayError::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Plays `moves` from a fresh game, then optionally jumps to step `jump`.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>) -> Result<GameHistory, ReplayError> {
    let mut history =
        GameHistory::replay(moves.iter().copied()).map_err(ReplayError::Rejected)?;
    if let Some(step) = jump {
        history.jump(step).map_err(ReplayError::Jump)?;
    }
    debug!(len = history.len(), cursor = history.cursor(), "Replay finished");
    Ok(history)
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    history: &'a GameHistory,
    status: GameStatus,
    status_label: String,
    winning_line: Option<[Position; 3]>,
    moves: Vec<MoveEntry>,
}

/// Renders `history` in the chosen format.
#[instrument(skip(history))]
pub fn render(
    history: &GameHistory,
    order: SortOrder,
    format: OutputFormat,
) -> Result<String, ReplayError> {
    match format {
        OutputFormat::Text => Ok(render_text(history, order)),
        OutputFormat::Json => {
            let report = ReplayReport {
                history,
                status: history.status(),
                status_label: history.status().to_string(),
                winning_line: history.winning_line(),
                moves: move_entries(history, order),
            };
            serde_json::to_string_pretty(&report).map_err(ReplayError::Encode)
        }
    }
}

fn render_text(history: &GameHistory, order: SortOrder) -> String {
    let mut out = String::new();
    out.push_str(&history.current_board().display());
    out.push_str("\n\n");
    out.push_str(&history.status().to_string());
    out.push('\n');
    if let Some(line) = history.winning_line() {
        let names: Vec<&str> = line.iter().map(Position::label).collect();
        out.push_str(&format!("Winning line: {}\n", names.join(", ")));
    }
    out.push_str("\nHistory:\n");
    for entry in move_entries(history, order) {
        out.push_str(&format!("  {entry}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let moves = parse_moves("0, 4 center,8").unwrap();
        assert_eq!(
            moves,
            vec![
                Position::TopLeft,
                Position::Center,
                Position::Center,
                Position::BottomRight
            ]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_moves("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = parse_moves("0,nine").unwrap_err();
        assert!(matches!(err, ReplayError::Parse { ref token } if token == "nine"));
    }

    #[test]
    fn test_replay_reports_rejected_move_number() {
        let moves = parse_moves("4,4").unwrap();
        let err = replay(&moves, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Move 2 (Center) rejected: Square Center is already occupied"
        );
    }

    #[test]
    fn test_replay_jump_out_of_range() {
        let err = replay(&[Position::Center], Some(5)).unwrap_err();
        assert!(matches!(err, ReplayError::Jump(JumpError::OutOfRange { target: 5, len: 2 })));
    }
}
