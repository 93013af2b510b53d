//! Interactive terminal session.

use crate::app::App;
use crate::settings::Settings;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runs the terminal UI until the player quits.
///
/// Once raw mode is on, the terminal is restored whether or not the
/// screen setup or the game loop fails.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode()?;
    let res = with_teardown(|| session(settings), restore_terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Terminal session error");
    } else {
        info!("Terminal restored");
    }
    res
}

/// Runs `body`, then `teardown` unconditionally.
///
/// An error from `body` takes precedence over one from `teardown`.
pub(crate) fn with_teardown<T>(
    body: impl FnOnce() -> Result<T>,
    teardown: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = teardown();
    match (res, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), restored) => {
            if let Err(teardown_err) = restored {
                warn!(error = ?teardown_err, "Terminal teardown also failed");
            }
            Err(err)
        }
    }
}

fn session(settings: &Settings) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, App::new(settings.order()))
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
