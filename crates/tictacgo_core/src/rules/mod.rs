//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`GameState`](crate::GameState). Rules are kept apart
//! from the store so the driver and tests can evaluate any board.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, Orientation, Victory, evaluate};
