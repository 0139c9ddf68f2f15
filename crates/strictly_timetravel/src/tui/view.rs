//! Move-list entries derived from the store.

use derive_new::new;
use serde::Serialize;
use strictly_tictactoe::{Coordinate, GameStore};

/// One row of the move list, tied to a history index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub move_number: usize,
    /// Whether this is the displayed snapshot.
    pub is_current: bool,
    /// Square filled by this move; `None` for game start.
    pub coordinate: Option<Coordinate>,
}

impl MoveEntry {
    /// Text of the jump control, or of the plain label for the current move.
    pub fn description(&self) -> String {
        if self.is_current {
            format!("You are at move #{}", self.move_number)
        } else if self.move_number > 0 {
            format!("Go to move #{}", self.move_number)
        } else {
            "Go to game start".to_string()
        }
    }

    /// ` - [(row, col) = (r, c)]` for every move after game start.
    pub fn coordinate_suffix(&self) -> Option<String> {
        self.coordinate
            .map(|c| format!(" - [(row, col) = ({}, {})]", c.row, c.col))
    }

    /// Description followed by the coordinate suffix.
    pub fn label(&self) -> String {
        let mut label = self.description();
        if let Some(suffix) = self.coordinate_suffix() {
            label.push_str(&suffix);
        }
        label
    }

    /// Whether activating this entry jumps somewhere.
    pub fn is_control(&self) -> bool {
        !self.is_current
    }
}

/// Entries for every snapshot, in display order.
pub fn move_entries(store: &GameStore) -> Vec<MoveEntry> {
    let len = store.len();
    (0..len)
        .map(|row| {
            let move_number = if store.is_reversed() { len - 1 - row } else { row };
            MoveEntry::new(
                move_number,
                move_number == store.current_move(),
                store.moves()[move_number].map(|pos| pos.coordinate()),
            )
        })
        .collect()
}

/// Display row of `move_number` in the current order.
pub fn row_of(store: &GameStore, move_number: usize) -> usize {
    if store.is_reversed() {
        store.len().saturating_sub(1).saturating_sub(move_number)
    } else {
        move_number
    }
}
