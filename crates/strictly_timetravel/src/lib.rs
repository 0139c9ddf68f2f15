//! Strictly Timetravel - terminal tic-tac-toe with a move history
//!
//! Every move is kept as a snapshot. The move list lets the player jump back
//! to any earlier board and play on from there, discarding the old tail.
//!
//! # Architecture
//!
//! - **Game logic**: [`strictly_tictactoe`] (rules and the history store)
//! - **TUI**: explicit [`App`] state, stateless [`draw`], key/mouse decoding
//! - **Replay**: headless rendering of a move list for scripts and tests
//! - **Config**: optional TOML file, see [`TimetravelConfig`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, TimetravelConfig};

// Crate-level exports - Replay
pub use replay::{ReplaySnapshot, run_replay};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, CELL_HEIGHT, CELL_WIDTH, Focus, GRID_HEIGHT, GRID_WIDTH, MoveEntry, ScreenLayout,
    action_for_key, action_for_mouse, draw, move_cursor, move_entries, row_of, run_tui,
    scroll_offset,
};
