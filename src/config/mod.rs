//! Configuration file loading and parsing.
//!
//! This module handles loading the optional configuration file from disk and
//! parsing it into validated, type-safe structures.
//!
//! # Configuration File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Path specified via `--config` CLI flag (must exist)
//! 2. Default location, if present:
//!    - **Linux/macOS:** `~/.plated-slot-converter/config.json`
//!    - **Windows:** `%USERPROFILE%\.plated-slot-converter\config.json`
//! 3. Built-in defaults
//!
//! # Example Configuration
//!
//! ```json
//! {
//!     "slot": {
//!         "min_width": 0.7,
//!         "edge_cut_width": 0.0508,
//!         "rotation_mode": "axis_aligned"
//!     },
//!     "logging": { "level": "warn" }
//! }
//! ```

mod settings;

pub use settings::{Config, LoggingConfig, SlotConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory.
///
/// - **Linux/macOS:** `~/.plated-slot-converter/`
/// - **Windows:** `%USERPROFILE%\.plated-slot-converter\`
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".plated-slot-converter"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// If `path` is `None`, uses the platform-specific default location when a
/// file exists there, and the built-in defaults otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given configuration file cannot be found
/// - The file cannot be read
/// - The JSON is malformed
/// - Fields are unknown or invalid
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    // Validate the configuration
    config.validate()?;

    Ok(config)
}
