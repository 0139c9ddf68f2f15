//! Application state and logic.
//!
//! [`App`] is the single mutable state object of a play session. Input is
//! translated into [`Action`]s, [`App::dispatch`] applies them, and the
//! event loop redraws from `&App` after every event.

use strictly_tictactoe::{GameStatus, GameStore, MoveOutcome, Position};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use super::layout::scroll_offset;
use super::view::{MoveEntry, move_entries, row_of};
use crossterm::event::KeyCode;

/// Panel receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a move-list entry.
    Moves,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// A user request, already decoded from a key or mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a specific square.
    Play(Position),
    /// Play the square under the cursor.
    PlayAtCursor,
    /// Move the board cursor (arrow key code).
    MoveCursor(KeyCode),
    /// Select the entry above in the move list.
    SelectPrevious,
    /// Select the entry below in the move list.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Jump to a history index.
    JumpTo(usize),
    /// Reverse the move-list order.
    ToggleOrder,
    /// Switch keyboard focus between board and move list.
    SwitchFocus,
    /// Leave the session.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    store: GameStore,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(reverse_moves: bool) -> Self {
        let mut store = GameStore::new();
        if reverse_moves {
            store.toggle_move_order();
        }
        Self {
            store,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            should_quit: false,
        }
    }

    /// The game state store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History index highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> GameStatus {
        self.store.status()
    }

    /// Move-list entries in display order.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        move_entries(&self.store)
    }

    /// Display row of the selected entry.
    pub fn selected_row(&self) -> usize {
        row_of(&self.store, self.selected_move)
    }

    /// First move-list row shown when `visible` rows fit on screen.
    pub fn scroll_offset(&self, visible: usize) -> usize {
        scroll_offset(self.selected_row(), visible)
    }

    /// Applies one action.
    #[instrument(skip(self), fields(current_move = self.store.current_move()))]
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Play(position) => self.play(position),
            Action::PlayAtCursor => self.play(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::SelectPrevious => self.step_selection(false),
            Action::SelectNext => self.step_selection(true),
            Action::JumpToSelected => self.jump(self.selected_move),
            Action::JumpTo(move_number) => self.jump(move_number),
            Action::ToggleOrder => self.store.toggle_move_order(),
            Action::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.selected_move = self.store.current_move();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, position: Position) {
        self.cursor = position;
        match self.store.apply_move(position.to_index()) {
            MoveOutcome::Applied {
                player,
                move_number,
                ..
            } => {
                info!(%position, %player, move_number, status = %self.store.status(), "Move played");
                self.selected_move = move_number;
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%position, %reason, "Click ignored");
            }
        }
    }

    fn jump(&mut self, move_number: usize) {
        if self.store.jump_to(move_number) {
            info!(move_number, "Jumped to move");
            self.selected_move = move_number;
        }
    }

    /// Moves the selection one row up or down in display order.
    fn step_selection(&mut self, down: bool) {
        let last = self.store.len() - 1;
        // Rows run newest first when reversed, so "down" means an older move.
        let forward = down != self.store.is_reversed();
        self.selected_move = if forward {
            (self.selected_move + 1).min(last)
        } else {
            self.selected_move.saturating_sub(1)
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}
