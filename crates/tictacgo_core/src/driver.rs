//! Click handling and the draw commands each move produces.

use super::{
    Cell, Game, Geometry, Ink, Mark, MoveError, Outcome, Placement, Point, Shape, Surface,
    Victory, nearest_cell,
};
use std::io::Write;
use tracing::{debug, info, instrument};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored(MoveError),
    /// A mark was placed and the game goes on.
    Placed(Placement),
    /// A mark was placed and completed a line.
    Won(Victory),
    /// A mark filled the board under [`DrawPolicy::Declare`](crate::DrawPolicy::Declare).
    Drawn,
}

/// Feeds clicks into a [`Game`] and draws the results.
///
/// Console output (the end-of-game announcement) goes to `W`.
#[derive(Debug)]
pub struct Driver<S, W> {
    game: Game,
    geometry: Geometry,
    surface: S,
    console: W,
}

impl<S: Surface, W: Write> Driver<S, W> {
    /// Creates a driver and draws the empty grid.
    #[instrument(skip_all, fields(side = *geometry.dimensions().side()))]
    pub fn new(game: Game, geometry: Geometry, mut surface: S, console: W) -> Self {
        let thickness = *geometry.dimensions().thickness();
        for cell in Cell::ALL {
            let (min, max) = geometry.square(cell);
            surface.draw(Shape::Rectangle {
                min,
                max,
                thickness,
                ink: Ink::Grid,
            });
        }
        debug!("Board drawn");
        Self {
            game,
            geometry,
            surface,
            console,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the geometry table.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the console sink.
    pub fn console(&self) -> &W {
        &self.console
    }

    /// Mutable access to the console sink.
    pub fn console_mut(&mut self) -> &mut W {
        &mut self.console
    }

    /// Handles a left-button press at `point`.
    ///
    /// Clicks after the game ends, and clicks on occupied cells, are ignored.
    #[instrument(skip(self))]
    pub fn click(&mut self, point: Point) -> std::io::Result<ClickOutcome> {
        let cell = nearest_cell(&self.geometry, point);
        let placement = match self.game.place(cell) {
            Ok(placement) => placement,
            Err(e) => {
                debug!(%cell, error = %e, "Click ignored");
                return Ok(ClickOutcome::Ignored(e));
            }
        };

        self.draw_mark(placement.placed.mark, cell);

        match placement.outcome {
            None => Ok(ClickOutcome::Placed(placement)),
            Some(outcome @ Outcome::Winner(victory)) => {
                writeln!(self.console, "{}", outcome)?;
                self.draw_strike(&victory);
                info!(winner = %victory.mark(), line = ?victory.line(), "Strike drawn");
                Ok(ClickOutcome::Won(victory))
            }
            Some(outcome @ Outcome::Draw) => {
                writeln!(self.console, "{}", outcome)?;
                Ok(ClickOutcome::Drawn)
            }
        }
    }

    fn draw_mark(&mut self, mark: Mark, cell: Cell) {
        let center = self.geometry.center(cell);
        let dims = *self.geometry.dimensions();
        let thickness = *dims.thickness();
        let ink = mark.ink();
        match mark {
            Mark::O => self.surface.draw(Shape::Circle {
                center,
                radius: *dims.circle_radius(),
                thickness,
                ink,
            }),
            Mark::X => {
                let l = dims.cross_length() / 2.0;
                self.surface.draw(Shape::Segment {
                    from: center.offset_by(-l, -l),
                    to: center.offset_by(l, l),
                    thickness,
                    ink,
                });
                self.surface.draw(Shape::Segment {
                    from: center.offset_by(l, -l),
                    to: center.offset_by(-l, l),
                    thickness,
                    ink,
                });
            }
        }
    }

    fn draw_strike(&mut self, victory: &Victory) {
        // Read after the turn flipped: O to move means X just moved.
        let ink = self.game.turn().opponent().ink();
        let (from, to) = self.geometry.strike(victory);
        self.surface.draw(Shape::Segment {
            from,
            to,
            thickness: *self.geometry.dimensions().thickness(),
            ink,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawPolicy, RecordingSurface};

    fn driver() -> Driver<RecordingSurface, Vec<u8>> {
        Driver::new(
            Game::default(),
            Geometry::default(),
            RecordingSurface::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_new_draws_grid() {
        let driver = driver();
        assert_eq!(driver.surface().shapes().len(), 9);
        assert!(driver.surface().shapes().iter().all(|s| s.ink() == Ink::Grid));
    }

    #[test]
    fn test_circle_then_cross() {
        let mut driver = driver();
        let center = driver.geometry().center(Cell::CENTER);
        assert!(matches!(driver.click(center), Ok(ClickOutcome::Placed(_))));
        let corner = driver.geometry().center(Cell::TOP_LEFT);
        assert!(matches!(driver.click(corner), Ok(ClickOutcome::Placed(_))));

        let shapes = &driver.surface().shapes()[9..];
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Circle { ink: Ink::Circle, .. }));
        assert!(matches!(shapes[1], Shape::Segment { ink: Ink::Cross, .. }));
        assert!(matches!(shapes[2], Shape::Segment { ink: Ink::Cross, .. }));
    }

    #[test]
    fn test_occupied_click_draws_nothing() {
        let mut driver = driver();
        let center = driver.geometry().center(Cell::CENTER);
        driver.click(center).expect("console");
        let drawn = driver.surface().shapes().len();

        let outcome = driver.click(center.offset_by(10.0, 10.0)).expect("console");
        assert_eq!(outcome, ClickOutcome::Ignored(MoveError::CellOccupied(Cell::CENTER)));
        assert_eq!(driver.surface().shapes().len(), drawn);
        assert_eq!(driver.game().turn(), Mark::X);
    }

    #[test]
    fn test_declared_draw_announced() {
        let game = Game::new(Mark::O, DrawPolicy::Declare);
        let mut driver = Driver::new(game, Geometry::default(), RecordingSurface::new(), Vec::new());
        let order = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut last = None;
        for (row, col) in order {
            let cell = Cell::new(row, col).expect("in range");
            last = Some(driver.click(driver.geometry().center(cell)).expect("console"));
        }
        assert_eq!(last, Some(ClickOutcome::Drawn));
        assert_eq!(String::from_utf8_lossy(driver.console()), "The game is a draw!\n");
    }
}
