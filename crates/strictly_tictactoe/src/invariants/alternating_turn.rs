//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameStore, Player, Square};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// The square filled to reach snapshot `n` holds the mark of
/// `Player::for_move(n - 1)`, so every snapshot has as many X marks as O
/// marks, or one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameStore> for AlternatingTurnInvariant {
    fn holds(store: &GameStore) -> bool {
        let marks_alternate = store
            .history()
            .iter()
            .zip(store.moves())
            .enumerate()
            .skip(1)
            .all(|(n, (board, record))| match record {
                Some(pos) => board.get(*pos) == Square::Occupied(Player::for_move(n - 1)),
                None => false,
            });

        let counts_balanced = store.history().iter().all(|board| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o || x == o + 1
        });

        marks_alternate && counts_balanced
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}
