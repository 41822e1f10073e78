//! Occupancy store for the nine cells.

use super::{Cell, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marks placed on the board, keyed by cell.
///
/// The store records whatever it is told. Keeping occupied cells unchanged
/// is the caller's job (see [`Game::place`](crate::Game::place)).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    squares: [Square; 9],
}

impl GameState {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupancy of `cell`; `Empty` if never set.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Records `mark` in `cell`.
    #[instrument(skip(self))]
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.squares[cell.index()] = Square::Occupied(mark);
    }

    /// Checks if `cell` holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as three lines of text.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, square) in self.squares.iter().enumerate() {
            result.push(match square {
                Square::Empty => '.',
                Square::Occupied(Mark::O) => 'O',
                Square::Occupied(Mark::X) => 'X',
            });
            if i % 3 == 2 && i < 8 {
                result.push('\n');
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_cell_is_empty() {
        let state = GameState::new();
        assert!(Cell::ALL.iter().all(|cell| state.is_empty(*cell)));
    }

    #[test]
    fn test_set_then_get() {
        let mut state = GameState::new();
        state.set(Cell::CENTER, Mark::X);
        assert_eq!(state.get(Cell::CENTER), Square::Occupied(Mark::X));
        assert!(!state.is_empty(Cell::CENTER));
    }

    #[test]
    fn test_display() {
        let mut state = GameState::new();
        state.set(Cell::TOP_LEFT, Mark::O);
        state.set(Cell::BOTTOM_RIGHT, Mark::X);
        assert_eq!(state.display(), "O..\n...\n..X");
    }
}
