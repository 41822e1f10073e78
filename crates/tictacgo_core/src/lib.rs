//! Tic Tac Go core - game rules for click-driven tic-tac-toe
//!
//! Everything here is independent of any window or terminal.
//!
//! # Architecture
//!
//! - **Geometry**: fixed 3x3 table of cell centers and strike-line offsets
//! - **State**: occupancy of the nine cells, keyed by [`Cell`]
//! - **Input**: nearest-cell lookup for arbitrary click points
//! - **Rules**: win detection over the eight lines of the board
//! - **Game / Driver**: turn alternation and the draw commands a move produces
//!
//! # Example
//!
//! ```
//! use tictacgo_core::{Driver, Geometry, Game, Point, RecordingSurface};
//!
//! # fn example() -> std::io::Result<()> {
//! let geometry = Geometry::default();
//! let mut driver = Driver::new(Game::default(), geometry, RecordingSurface::new(), Vec::new());
//! let center = driver.geometry().center(tictacgo_core::Cell::CENTER);
//! driver.click(Point::new(center.x + 3.0, center.y - 4.0))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod driver;
mod error;
mod game;
mod geometry;
mod input;
mod mark;
mod rules;
mod state;
mod surface;

pub use cell::Cell;
pub use driver::{ClickOutcome, Driver};
pub use error::MoveError;
pub use game::{DrawPolicy, Game, Move, Outcome, Phase, Placement};
pub use geometry::{Dimensions, Geometry, Point};
pub use input::nearest_cell;
pub use mark::{Ink, Mark, Square};
pub use rules::{Line, Orientation, Victory, evaluate, is_draw, is_full};
pub use state::GameState;
pub use surface::{RecordingSurface, Shape, Surface};
