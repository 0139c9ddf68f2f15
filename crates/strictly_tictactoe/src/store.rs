//! Game state store: the move history and the time-travel pointer.
//!
//! The store keeps one full board snapshot per move together with the cell
//! that produced it. Whose turn it is and which board is shown are both
//! derived from the current move pointer, so jumping around the history
//! never mutates it. Playing a move from an earlier pointer discards the
//! tail and starts a new line of play.

use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::rules::{WinningLine, evaluate_winner, is_full};
use super::{Board, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Whether the displayed board is terminal.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// Why a move request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Cell index outside 0-8.
    #[display("cell {_0} is off the board")]
    OutOfBounds(usize),
    /// The square is already taken.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The displayed board already has a winning line.
    #[display("the game is already won")]
    GameOver,
}

/// Result of a move request.
///
/// Ignored moves are not errors; the request simply has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was appended to the history.
    Applied {
        /// Square that was filled.
        position: Position,
        /// Player who moved.
        player: Player,
        /// History index of the new board.
        move_number: usize,
    },
    /// The move was dropped.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Whether the move changed the history.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Ordered board snapshots, the move that produced each, and the pointer
/// selecting the displayed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStore {
    pub(crate) history: Vec<Board>,
    pub(crate) moves: Vec<Option<Position>>,
    pub(crate) current_move: usize,
    reverse_moves: bool,
}

impl GameStore {
    /// Creates a store holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            moves: vec![None],
            current_move: 0,
            reverse_moves: false,
        }
    }

    /// Rebuilds a store by playing `cells` in order from the empty board.
    ///
    /// Unlike [`GameStore::apply_move`], a move that would be ignored is
    /// reported as an error, naming the 1-based step that failed.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, ReplayError> {
        let mut store = Self::new();
        for (i, &cell) in cells.iter().enumerate() {
            if let MoveOutcome::Ignored(reason) = store.apply_move(cell) {
                return Err(ReplayError::new(i + 1, cell, reason));
            }
        }
        Ok(store)
    }

    /// Plays `cell` for the player whose turn it is at the current pointer.
    ///
    /// Any history past the pointer is discarded first. Off-board cells,
    /// occupied squares and boards that already have a winner are ignored.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            debug!("Ignoring move off the board");
            return MoveOutcome::Ignored(IgnoreReason::OutOfBounds(cell));
        };

        let board = *self.current_board();
        if evaluate_winner(&board).is_some() {
            debug!("Ignoring move on a decided board");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(position));
        }

        let player = self.next_player();
        self.history.truncate(self.current_move + 1);
        self.moves.truncate(self.current_move + 1);
        self.history.push(board.with_mark(position, player));
        self.moves.push(Some(position));
        self.current_move = self.history.len() - 1;

        debug_assert!(
            self.check_invariants().is_ok(),
            "store invariants violated: {:?}",
            self.check_invariants()
        );
        debug!(%position, %player, move_number = self.current_move, "Move applied");

        MoveOutcome::Applied {
            position,
            player,
            move_number: self.current_move,
        }
    }

    /// Moves the pointer to `move_number` without touching the history.
    ///
    /// Returns `false` and does nothing when `move_number` is out of range.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_number: usize) -> bool {
        if move_number >= self.history.len() {
            debug!(len = self.history.len(), "Ignoring jump past the end of history");
            return false;
        }
        self.current_move = move_number;
        true
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.reverse_moves = !self.reverse_moves;
        debug!(reverse = self.reverse_moves, "Move order toggled");
    }

    /// Status of the displayed board.
    ///
    /// A win is credited to the player who made the last move, i.e. the
    /// opponent of whoever the pointer says moves next.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if evaluate_winner(board).is_some() {
            GameStatus::Winner(self.next_player().opponent())
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        evaluate_winner(self.current_board())
    }

    /// Board at the current pointer.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Current pointer into the history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Player whose turn it is at the current pointer.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// All board snapshots, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Cell filled to reach each snapshot; `None` for the empty board.
    pub fn moves(&self) -> &[Option<Position>] {
        &self.moves
    }

    /// Number of snapshots in the history (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reverse_moves
    }

    /// Checks every store invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(self)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A replayed move that the store would have ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, derive_more::Error)]
#[display("Move {step} (cell {cell}) rejected: {reason}")]
pub struct ReplayError {
    /// 1-based step in the replayed sequence.
    pub step: usize,
    /// Requested cell index.
    pub cell: usize,
    /// Why the store refused it.
    pub reason: IgnoreReason,
}

impl ReplayError {
    /// Creates a new replay error.
    pub fn new(step: usize, cell: usize, reason: IgnoreReason) -> Self {
        Self { step, cell, reason }
    }
}
