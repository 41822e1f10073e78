//! Command-line interface for tictacgo.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictacgo_core::Mark;

/// Tic Tac Go - click-to-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictacgo")]
#[command(about = "Mouse-driven tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Flags below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Side length of one cell, in board units
    #[arg(long)]
    pub side: Option<f64>,

    /// Mark that moves first
    #[arg(long, value_enum)]
    pub first: Option<FirstMark>,

    /// End the game when the board fills up without a winner
    #[arg(long)]
    pub declare_draws: bool,

    /// Where to write logs (the terminal itself is the game window)
    #[arg(long, default_value = "tictacgo.log")]
    pub log_file: PathBuf,
}

/// Command-line spelling of a [`Mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstMark {
    /// Circle
    O,
    /// Cross
    X,
}

impl From<FirstMark> for Mark {
    fn from(value: FirstMark) -> Self {
        match value {
            FirstMark::O => Mark::O,
            FirstMark::X => Mark::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictacgo"]);
        assert!(cli.config.is_none());
        assert!(cli.first.is_none());
        assert!(!cli.declare_draws);
        assert_eq!(cli.log_file, PathBuf::from("tictacgo.log"));
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::parse_from([
            "tictacgo",
            "--config",
            "game.toml",
            "--side",
            "120",
            "--first",
            "x",
            "--declare-draws",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.side, Some(120.0));
        assert_eq!(cli.first.map(Mark::from), Some(Mark::X));
        assert!(cli.declare_draws);
    }
}
