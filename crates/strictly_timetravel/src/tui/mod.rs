//! Terminal UI for a time-travel tic-tac-toe session.
//!
//! The loop is pull-based: draw from `&App`, block briefly for one event,
//! turn it into an [`Action`], dispatch, repeat.

mod app;
mod input;
mod layout;
mod ui;
mod view;

pub use app::{Action, App, Focus};
pub use input::{action_for_key, action_for_mouse, move_cursor};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH, ScreenLayout, scroll_offset};
pub use ui::draw;
pub use view::{MoveEntry, move_entries, row_of};

use crate::TimetravelConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs an interactive session until the player quits.
pub fn run_tui(config: &TimetravelConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Timetravel TUI");

    let mut terminal = setup_terminal(*config.mouse())?;
    let mut app = App::new(*config.reverse_moves());

    let res = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal, *config.mouse())?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.store().len() - 1, status = %app.status(), "Session ended");
    res
}

fn setup_terminal(mouse: bool) -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Tui, mouse: bool) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, wait for one event, dispatch, until the app asks to quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let area = terminal.draw(|f| draw(f, app))?.area;

        // Poll with a short timeout so resizes are picked up promptly.
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let action = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                action_for_key(key, app.focus())
            }
            Event::Mouse(mouse) => action_for_mouse(mouse, &ScreenLayout::new(area), app),
            other => {
                debug!(?other, "Unhandled event");
                None
            }
        };

        if let Some(action) = action {
            app.dispatch(action);
        }
    }
    Ok(())
}
