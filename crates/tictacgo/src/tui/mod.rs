//! Terminal window for Tic Tac Go.
//!
//! The terminal stands in for a graphics window: the canvas shows the board,
//! mouse capture supplies clicks, and `q` or `Esc` closes the window.

mod app;
mod canvas;
mod ui;
mod viewport;

pub use app::App;
pub use canvas::BoardCanvas;
pub use viewport::Viewport;

use crate::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

type Window = Terminal<CrosstermBackend<Stdout>>;

/// Sends logs to `path` so they stay out of the game window.
pub fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Restores the terminal when dropped.
struct TerminalGuard {
    terminal: Window,
}

impl TerminalGuard {
    /// Enters raw mode, the alternate screen and mouse capture.
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to acquire terminal")?;
        match Self::open() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                // Raw mode is already on; undo it before bailing out.
                restore(&mut io::stdout());
                Err(e)
            }
        }
    }

    fn open() -> Result<Window> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to acquire terminal")?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore(self.terminal.backend_mut());
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

fn restore(out: &mut impl Write) {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to leave raw mode");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Opens the window and plays until it is closed.
///
/// Console output produced while the window was open is written to
/// `console` once the terminal is back to normal, even when the event loop
/// fails.
#[instrument(skip_all, fields(title = %settings.title()))]
pub fn run_window(settings: &Settings, console: &mut impl Write) -> Result<()> {
    let mut app = App::new(settings);
    let res = {
        let mut guard = TerminalGuard::acquire()?;
        info!("Window open");
        run_app(&mut guard.terminal, &mut app)
    };
    write_transcript(res, &app.into_transcript(), console)
}

/// Writes `transcript` to `console`, then hands back the loop's result.
fn write_transcript(res: Result<()>, transcript: &[u8], console: &mut impl Write) -> Result<()> {
    console.write_all(transcript)?;
    console.flush()?;
    res
}

fn run_app(terminal: &mut Window, app: &mut App) -> Result<()> {
    loop {
        let mut board_area = Rect::default();
        terminal.draw(|frame| board_area = ui::draw(frame, app))?;
        app.set_board_area(board_area);

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    info!("Window closed by user");
                    return Ok(());
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                debug!(column, row, "Left button pressed");
                app.click(column, row)?;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_written_when_loop_fails() {
        let mut console = Vec::new();
        let res = write_transcript(
            Err(anyhow::anyhow!("event stream closed")),
            b"The winner is X!\n",
            &mut console,
        );
        assert!(res.is_err());
        assert_eq!(console, b"The winner is X!\n");
    }

    #[test]
    fn test_transcript_written_on_clean_exit() {
        let mut console = Vec::new();
        write_transcript(Ok(()), b"The winner is O!\n", &mut console).expect("written");
        assert_eq!(console, b"The winner is O!\n");
    }
}
