//! Monotonic board invariant: each snapshot fills exactly one empty square.

use super::super::{Board, GameStore, Square};
use super::Invariant;

/// Invariant: the history starts empty and every snapshot differs from its
/// predecessor in exactly one square, the one named by its move record, which
/// goes from empty to occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameStore> for MonotonicBoardInvariant {
    fn holds(store: &GameStore) -> bool {
        let history = store.history();
        if history.first() != Some(&Board::new()) {
            return false;
        }

        history
            .windows(2)
            .zip(store.moves().iter().skip(1))
            .all(|(pair, record)| {
                let (before, after) = (&pair[0], &pair[1]);
                let changed: Vec<usize> = (0..9)
                    .filter(|&i| before.squares()[i] != after.squares()[i])
                    .collect();

                match (changed.as_slice(), record) {
                    ([i], Some(pos)) => {
                        *i == pos.to_index()
                            && before.get(*pos) == Square::Empty
                            && after.get(*pos) != Square::Empty
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}
