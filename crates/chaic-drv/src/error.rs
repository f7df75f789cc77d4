//! Error handling for the chaic driver.
//!
//! Lexical problems are diagnostics, not errors; everything here is a
//! failure at the file or command-line boundary and ends the process.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the chaic driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("File '{}' could not be opened for reading", .0.display())]
    Unreadable(PathBuf),

    /// A configuration file is missing, malformed or holds bad values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
