//! Headless replay: play a list of cells and report the resulting screen.

use crate::tui::{MoveEntry, move_entries};
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_tictactoe::{GameStore, Square};
use tracing::{info, instrument, warn};

/// Everything the terminal UI would show, in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySnapshot {
    /// Cell symbols in index order; `None` for empty cells.
    pub board: [Option<char>; 9],
    /// Status line.
    pub status: String,
    /// Displayed history index.
    pub current_move: usize,
    /// Indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Whether the move list is newest first.
    pub reversed: bool,
    /// Move-list entries in display order.
    pub entries: Vec<MoveEntry>,
}

impl ReplaySnapshot {
    /// Captures the displayed state of `store`.
    pub fn capture(store: &GameStore) -> Self {
        let board = store.current_board().squares().map(|sq| match sq {
            Square::Empty => None,
            occupied => Some(occupied.symbol()),
        });
        Self {
            board,
            status: store.status().to_string(),
            current_move: store.current_move(),
            winning_line: store.winning_line().map(|line| line.indices()),
            reversed: store.is_reversed(),
            entries: move_entries(store),
        }
    }

    /// Board, status and numbered move list as plain text.
    pub fn render_text(&self, store: &GameStore) -> String {
        let mut out = store.current_board().display();
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push_str("\n\n");
        for (row, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", row + 1, entry.label()));
        }
        out
    }
}

/// Replays `cells`, optionally jumps, and formats the result.
///
/// A jump outside the history is ignored, like a click on a missing entry.
#[instrument]
pub fn run_replay(
    cells: &[usize],
    jump: Option<usize>,
    reverse: bool,
    json: bool,
) -> Result<String> {
    let mut store = GameStore::replay(cells)?;
    if let Some(move_number) = jump
        && !store.jump_to(move_number)
    {
        warn!(move_number, len = store.len(), "Jump target outside history, ignored");
    }
    if reverse {
        store.toggle_move_order();
    }

    let snapshot = ReplaySnapshot::capture(&store);
    info!(status = %snapshot.status, current_move = snapshot.current_move, "Replay complete");

    if json {
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")
    } else {
        Ok(snapshot.render_text(&store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output_for_win() {
        let out = run_replay(&[0, 1, 4, 2, 8], None, false, false).expect("legal moves");
        assert!(out.starts_with("X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X"));
        assert!(out.contains("\n\nWinner: X\n\n"));
        assert!(out.contains("1. Go to game start\n"));
        assert!(out.contains("6. You are at move #5 - [(row, col) = (3, 3)]\n"));
    }

    #[test]
    fn test_json_snapshot() {
        let out = run_replay(&[4], Some(0), true, true).expect("legal moves");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["status"], "Next player: X");
        assert_eq!(value["current_move"], 0);
        assert_eq!(value["reversed"], true);
        assert_eq!(value["entries"][0]["move_number"], 1);
        assert_eq!(value["entries"][1]["is_current"], true);
        assert_eq!(value["board"][4], serde_json::Value::Null);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let out = run_replay(&[4], Some(7), false, false).expect("legal moves");
        assert!(out.contains("Next player: O"));
    }

    #[test]
    fn test_illegal_replay_is_an_error() {
        let err = run_replay(&[4, 4], None, false, false).unwrap_err();
        let replay = err
            .downcast_ref::<strictly_tictactoe::ReplayError>()
            .expect("replay error");
        assert_eq!(replay.step, 2);
    }
}
