//! Application state and logic.

use super::Viewport;
use crate::Settings;
use ratatui::layout::Rect;
use tictacgo_core::{ClickOutcome, Driver, Game, MoveError, Phase, RecordingSurface};
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    title: String,
    driver: Driver<RecordingSurface, Vec<u8>>,
    viewport: Viewport,
    status_message: String,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument(skip_all)]
    pub fn new(settings: &Settings) -> Self {
        let geometry = settings.geometry();
        let extent = geometry.extent();
        let game = Game::new(*settings.first_mark(), *settings.draw_policy());
        let driver = Driver::new(game, geometry, RecordingSurface::new(), Vec::new());
        let mut app = Self {
            title: settings.title().clone(),
            driver,
            viewport: Viewport::new(Rect::default(), extent),
            status_message: String::new(),
        };
        app.refresh_status();
        app
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the driver.
    pub fn driver(&self) -> &Driver<RecordingSurface, Vec<u8>> {
        &self.driver
    }

    /// Records where the canvas was last drawn.
    pub fn set_board_area(&mut self, area: Rect) {
        self.viewport = Viewport::new(area, self.driver.geometry().extent());
    }

    /// Handles a left click on terminal cell (`column`, `row`).
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) -> std::io::Result<()> {
        let point = self.viewport.to_board(column, row);
        match self.driver.click(point)? {
            ClickOutcome::Ignored(MoveError::CellOccupied(cell)) => {
                let turn = self.driver.game().turn();
                self.status_message = format!("Cell {} is taken. {} to move.", cell, turn);
            }
            ClickOutcome::Ignored(MoveError::GameOver) => debug!("Game over, click dropped"),
            ClickOutcome::Placed(_) | ClickOutcome::Won(_) | ClickOutcome::Drawn => {
                self.refresh_status()
            }
        }
        Ok(())
    }

    /// Console output produced so far.
    pub fn transcript(&self) -> &[u8] {
        self.driver.console()
    }

    /// Consumes the app, returning its console output.
    pub fn into_transcript(mut self) -> Vec<u8> {
        std::mem::take(self.driver.console_mut())
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.driver.game().phase() {
            Phase::Accepting => format!(
                "{} to move. Click a cell, press q to quit.",
                self.driver.game().turn()
            ),
            Phase::Finished(outcome) => format!("{} Press q to quit.", outcome),
        };
    }
}
