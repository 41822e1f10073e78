//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::{GameState, Square};
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(state))]
pub fn is_full(state: &GameState) -> bool {
    state.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument(skip(state))]
pub fn is_draw(state: &GameState) -> bool {
    is_full(state) && evaluate(state).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    fn from_rows(rows: [[Mark; 3]; 3]) -> GameState {
        let mut state = GameState::new();
        for cell in Cell::ALL {
            state.set(cell, rows[usize::from(cell.row())][usize::from(cell.col())]);
        }
        state
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&GameState::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut state = GameState::new();
        state.set(Cell::CENTER, Mark::X);
        assert!(!is_full(&state));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{O, X};
        let state = from_rows([[O, X, O], [X, O, X], [X, O, X]]);
        assert!(is_full(&state));
        assert!(is_draw(&state));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{O, X};
        let state = from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&state));
        assert!(!is_draw(&state));
    }
}
