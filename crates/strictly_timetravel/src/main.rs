//! Strictly Timetravel - CLI entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_timetravel::{Cli, Command, TimetravelConfig, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimetravelConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { reverse, no_mouse } => {
            let config = config
                .clone()
                .with_reverse_moves(reverse || *config.reverse_moves())
                .with_mouse(*config.mouse() && !no_mouse);
            run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            reverse,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();

            info!(moves = cells.len(), "Replaying moves");
            let output = run_replay(&cells, jump, reverse || *config.reverse_moves(), json)?;
            println!("{output}");
            Ok(())
        }
    }
}
