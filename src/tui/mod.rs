//! Terminal UI: hot-seat play on one keyboard.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(title: &str) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        &mut io::stdout(),
    )?;

    let res = run_game(&mut terminal, App::new(title));

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Runs `setup` with raw mode already on, restoring the terminal
/// through `out` if it fails.
fn setup_or_restore<T, W: Write>(setup: impl FnOnce() -> Result<T>, out: &mut W) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        if let Err(restore_err) = restore_terminal(out) {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
    })
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

fn run_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code) == AppAction::Quit {
                    return Ok(());
                }
            }
        }
    }
}
