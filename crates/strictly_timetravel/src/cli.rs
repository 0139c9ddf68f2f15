//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a move history you can jump around in
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Show the move list newest first
        #[arg(long)]
        reverse: bool,

        /// Disable mouse capture
        #[arg(long)]
        no_mouse: bool,
    },

    /// Replay moves without a terminal UI and print the result
    Replay {
        /// Cell indices (0-8, row-major) in the order they were played
        #[arg(value_delimiter = ',', num_args = 0..)]
        cells: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the move list newest first
        #[arg(long)]
        reverse: bool,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            reverse: false,
            no_mouse: false,
        }
    }
}
