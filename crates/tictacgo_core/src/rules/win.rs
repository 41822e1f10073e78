//! Win detection logic for tic-tac-toe.

use crate::{Cell, GameState, Mark, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Direction a line runs across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Corner to corner through the center.
    Diagonal,
}

/// The eight lines of three, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Bottom-left to top-right.
    RisingDiagonal,
    /// Top-left to bottom-right.
    FallingDiagonal,
}

impl Line {
    /// Cells of the line as `[start, middle, end]`.
    pub fn cells(self) -> [Cell; 3] {
        match self {
            Line::TopRow => Self::row(0),
            Line::MiddleRow => Self::row(1),
            Line::BottomRow => Self::row(2),
            Line::LeftColumn => Self::column(0),
            Line::CenterColumn => Self::column(1),
            Line::RightColumn => Self::column(2),
            Line::RisingDiagonal => [Cell::BOTTOM_LEFT, Cell::CENTER, Cell::TOP_RIGHT],
            Line::FallingDiagonal => [Cell::TOP_LEFT, Cell::CENTER, Cell::BOTTOM_RIGHT],
        }
    }

    /// Which way the line runs.
    pub fn orientation(self) -> Orientation {
        match self {
            Line::TopRow | Line::MiddleRow | Line::BottomRow => Orientation::Row,
            Line::LeftColumn | Line::CenterColumn | Line::RightColumn => Orientation::Column,
            Line::RisingDiagonal | Line::FallingDiagonal => Orientation::Diagonal,
        }
    }

    const fn row(row: u8) -> [Cell; 3] {
        [Cell::at(row, 0), Cell::at(row, 1), Cell::at(row, 2)]
    }

    const fn column(col: u8) -> [Cell; 3] {
        [Cell::at(0, col), Cell::at(1, col), Cell::at(2, col)]
    }

    /// Mark holding the whole line, if one does.
    ///
    /// The middle cell anchors the check: an empty middle never wins.
    fn holder(self, state: &GameState) -> Option<Mark> {
        let [start, middle, end] = self.cells();
        let mark = state.get(middle).mark()?;
        let held = Square::Occupied(mark);
        (state.get(start) == held && state.get(end) == held).then_some(mark)
    }
}

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Victory {
    mark: Mark,
    line: Line,
}

impl Victory {
    /// Mark that completed the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The winning line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// First boundary cell of the line.
    pub fn from(&self) -> Cell {
        self.line.cells()[0]
    }

    /// Second boundary cell of the line.
    pub fn to(&self) -> Cell {
        self.line.cells()[2]
    }
}

/// Finds the first completed line in check order.
///
/// Returns `None` both while the game is open and for a full board with no
/// completed line.
#[instrument(skip(state))]
pub fn evaluate(state: &GameState) -> Option<Victory> {
    Line::iter().find_map(|line| line.holder(state).map(|mark| Victory::new(mark, line)))
}
