//! Board cells addressed by row and column.

use serde::{Deserialize, Serialize};

/// One of the nine board positions.
///
/// Row 0 is the top row and column 0 the left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Top-left corner.
    pub const TOP_LEFT: Cell = Cell { row: 0, col: 0 };
    /// Top-right corner.
    pub const TOP_RIGHT: Cell = Cell { row: 0, col: 2 };
    /// Center of the board.
    pub const CENTER: Cell = Cell { row: 1, col: 1 };
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Cell = Cell { row: 2, col: 0 };
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Cell = Cell { row: 2, col: 2 };

    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell, or `None` if either index is outside 0..3.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Builds a cell from indices already known to be in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Cell::new(3, 0).is_none());
        assert!(Cell::new(0, 3).is_none());
        assert_eq!(Cell::new(1, 1), Some(Cell::CENTER));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }
}
