//! Turn alternation and the accepting/finished state machine.

use super::{Cell, GameState, Mark, MoveError, Victory, evaluate, is_full};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What to do with a full board that nobody has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPolicy {
    /// Keep accepting clicks; every one of them lands on an occupied cell.
    #[default]
    Continue,
    /// End the game with [`Outcome::Draw`].
    Declare,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A line was completed.
    Winner(Victory),
    /// Full board, no line, and draws are declared.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(victory) => write!(f, "The winner is {}!", victory.mark()),
            Outcome::Draw => write!(f, "The game is a draw!"),
        }
    }
}

/// Driver phase.
///
/// `Accepting` moves to `Finished` at most once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Clicks on empty cells place marks.
    #[default]
    Accepting,
    /// Clicks are ignored.
    Finished(Outcome),
}

/// A mark placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where.
    pub cell: Cell,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The move that was applied.
    pub placed: Move,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    turn: Mark,
    phase: Phase,
    policy: DrawPolicy,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game where `first` moves first.
    #[instrument]
    pub fn new(first: Mark, policy: DrawPolicy) -> Self {
        Self {
            state: GameState::new(),
            turn: first,
            phase: Phase::Accepting,
            policy,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mark that places next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Checks if the game stopped accepting moves.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current mark in `cell`.
    ///
    /// A rejected move leaves the board and turn untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, cell: Cell) -> Result<Placement, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        if !self.state.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        let placed = Move::new(self.turn, cell);
        self.state.set(cell, placed.mark);
        self.history.push(placed);
        self.turn = self.turn.opponent();
        info!(%placed, "Move accepted");

        let outcome = self.settle();
        if let Some(outcome) = outcome {
            info!(
                %outcome,
                moves = self.history.len(),
                board = %self.state.display(),
                "Game finished"
            );
            self.phase = Phase::Finished(outcome);
        } else {
            debug!(next = %self.turn, "Game continues");
        }

        Ok(Placement { placed, outcome })
    }

    fn settle(&self) -> Option<Outcome> {
        if let Some(victory) = evaluate(&self.state) {
            return Some(Outcome::Winner(victory));
        }
        (self.policy == DrawPolicy::Declare && is_full(&self.state)).then_some(Outcome::Draw)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::default(), DrawPolicy::default())
    }
}
