//! Terminal tail invariant: nothing is played after a win.

use super::super::GameStore;
use super::super::rules::evaluate_winner;
use super::Invariant;

/// Invariant: only the last snapshot may contain a winning line.
pub struct TerminalTailInvariant;

impl Invariant<GameStore> for TerminalTailInvariant {
    fn holds(store: &GameStore) -> bool {
        let history = store.history();
        history[..history.len().saturating_sub(1)]
            .iter()
            .all(|board| evaluate_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows a won board"
    }
}
