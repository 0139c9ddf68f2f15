//! History consistency invariant: snapshots and move records line up.

use super::super::GameStore;
use super::Invariant;

/// Invariant: one move record per snapshot, and the pointer is in range.
///
/// The history is never empty, the first record is `None` (the empty board)
/// and every later record names a square.
pub struct HistoryConsistentInvariant;

impl Invariant<GameStore> for HistoryConsistentInvariant {
    fn holds(store: &GameStore) -> bool {
        let history = store.history();
        let moves = store.moves();

        !history.is_empty()
            && history.len() == moves.len()
            && store.current_move() < history.len()
            && moves[0].is_none()
            && moves[1..].iter().all(Option::is_some)
    }

    fn description() -> &'static str {
        "History and move records have equal length and the pointer is in range"
    }
}
