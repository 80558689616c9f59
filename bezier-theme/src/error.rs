//! # Theme Error Types
//!
//! Errors raised while loading color tokens and theme configuration.
//! The color engine itself is total and never produces one of these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Token or configuration file was not found.
    #[error("Theme file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to read a token or configuration file.
    #[error("Failed to read theme file {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    /// Failed to parse a TOML or JSON file.
    #[error("Failed to parse theme file {0}: {1}")]
    Parse(PathBuf, String),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported theme file format: {0} (use .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Color or component theme name that is not recognized.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Token name that is not present in the token set.
    #[error("Unknown color token: {0}")]
    UnknownToken(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a parse error from any displayable parser error.
    pub fn parse(path: impl Into<PathBuf>, details: impl std::fmt::Display) -> Self {
        Self::Parse(path.into(), details.to_string())
    }
}
