//! Error types for plated-slot-converter.
//!
//! Conversion errors live in [`crate::kicad::error`]; this module covers the
//! configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("cannot read configuration file {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or has keys outside `slot`,
    /// `logging` and `_comment`.
    #[error("malformed configuration file {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// A configuration value is outside what the converter accepts.
    #[error("invalid configuration value {key}: {message}")]
    ValidationError {
        /// Dotted path of the offending key (e.g. `slot.min_width`).
        key: String,
        /// Description of the validation failure.
        message: String,
    },
}

impl ConfigError {
    /// Creates a validation error for the value at `key`.
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            key: key.into(),
            message: message.into(),
        }
    }
}
