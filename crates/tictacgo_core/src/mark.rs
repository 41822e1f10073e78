//! Marks, squares and the inks they are drawn with.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two symbols a player places.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Circle. Moves first unless configured otherwise.
    #[default]
    #[display("O")]
    O,
    /// Cross.
    #[display("X")]
    X,
}

impl Mark {
    /// Returns the other mark.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Ink used to draw this mark.
    pub fn ink(self) -> Ink {
        match self {
            Mark::O => Ink::Circle,
            Mark::X => Ink::Cross,
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a mark for the rest of the game.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Logical drawing colors.
///
/// The surface decides what concrete color each ink becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ink {
    /// Board outlines.
    Grid,
    /// Circles, and strike lines after O moves.
    Circle,
    /// Crosses, and strike lines after X moves.
    Cross,
}
