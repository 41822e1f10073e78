//! Tic Tac Go - click-to-play tic-tac-toe in the terminal
//!
//! The game rules live in [`tictacgo_core`]. This crate supplies the window:
//! a ratatui canvas that paints the driver's draw commands, crossterm mouse
//! capture that turns clicks into board points, plus the CLI and settings file.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::{Cli, FirstMark};
pub use config::{ConfigError, Settings};
pub use tui::{App, BoardCanvas, Viewport, init_tracing, run_window};
