// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Theme Error Types
//!
//! Errors raised while loading or validating a theme configuration.
//! Widgets themselves never fail; only the configuration boundary does.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme configuration file was not found.
    #[error("Theme file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme configuration.
    #[error("Failed to parse theme config {path:?}: {details}")]
    ParseError {
        /// The file that failed to parse, if the config came from a file.
        path: Option<PathBuf>,
        /// Details about the parse error.
        details: String,
    },

    /// A metric is negative or not a finite number.
    #[error("Invalid theme metric `{metric}`: {value}")]
    InvalidMetric {
        /// Name of the offending metric.
        metric: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a parse error.
    pub fn parse_error(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError {
            path,
            details: details.into(),
        }
    }

    /// Create an invalid metric error.
    pub fn invalid_metric(metric: &'static str, value: f32) -> Self {
        Self::InvalidMetric { metric, value }
    }
}
