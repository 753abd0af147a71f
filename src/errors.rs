//! Unified library error type.
//! Fluent dispatch, the reporter range logic and config loading all return
//! AppError so callers only have one type to translate into user messages.

use std::fmt;
use std::io;
use thiserror::Error;

/// Reporter fields that must be set before they can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Since,
    Till,
    Timeframe,
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            StateField::Since => "Start time is not set",
            StateField::Till => "End time is not set",
            StateField::Timeframe => "Timeframe is not set",
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Fluent accessors
    // ---------------------------
    #[error("Method {0} does not exist.")]
    UnknownMethod(String),

    // ---------------------------
    // Reporter state
    // ---------------------------
    #[error("{0}")]
    MissingState(StateField),

    #[error("Invalid timeframe passed: {0}")]
    InvalidTimeframe(String),

    #[error("Date range must be under {0} days")]
    DateRangeExceeded(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
