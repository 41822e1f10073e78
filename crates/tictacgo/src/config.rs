//! Game settings loaded from an optional TOML file.

use crate::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictacgo_core::{Dimensions, DrawPolicy, Geometry, Mark};
use tracing::{debug, info, instrument};

/// Settings for one game window.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Window title.
    #[serde(default = "default_title")]
    title: String,

    /// Side length of one cell, in board units.
    #[serde(default = "default_side")]
    side: f64,

    /// Mark that moves first.
    #[serde(default)]
    first_mark: Mark,

    /// What a full board without a winner does.
    #[serde(default)]
    draw_policy: DrawPolicy,
}

#[instrument]
fn default_title() -> String {
    "Tic Tac Go".to_string()
}

#[instrument]
fn default_side() -> f64 {
    *Dimensions::default().side()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            side: default_side(),
            first_mark: Mark::default(),
            draw_policy: DrawPolicy::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        info!(side = settings.side, first = %settings.first_mark, "Settings loaded");
        Ok(settings)
    }

    /// Builds settings from defaults, the `--config` file, then flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(side) = cli.side {
            settings.side = side;
        }
        if let Some(first) = cli.first {
            settings.first_mark = first.into();
        }
        if cli.declare_draws {
            settings.draw_policy = DrawPolicy::Declare;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Drawing sizes scaled to [`Settings::side`].
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::scaled(self.side)
    }

    /// Geometry table for these settings.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.dimensions())
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.side.is_finite() || self.side <= 0.0 {
            return Err(ConfigError::new(format!(
                "Cell side must be a positive number, got {}",
                self.side
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
