//! Tic-tac-toe rules and a time-travel move history.
//!
//! - **Rules**: pure evaluation of a board snapshot ([`evaluate_winner`],
//!   [`is_full`], [`is_draw`]).
//! - **Store**: [`GameStore`] keeps every snapshot from the empty board to
//!   the latest move and a pointer selecting the displayed one.
//! - **Invariants**: named properties every reachable store satisfies.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameStatus, GameStore, Player};
//!
//! let mut store = GameStore::new();
//! store.apply_move(4);
//! assert_eq!(store.status(), GameStatus::NextPlayer(Player::O));
//!
//! store.jump_to(0);
//! store.apply_move(8);
//! assert_eq!(store.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod store;
mod types;

pub mod invariants;
pub mod rules;

pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use position::{Coordinate, Position};
pub use rules::{WinningLine, evaluate_winner, is_draw, is_full};
pub use store::{GameStatus, GameStore, IgnoreReason, MoveOutcome, ReplayError};
pub use types::{Board, Player, Square};
