//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::kicad::slot::{
    RotationMode, SlotOptions, DEFAULT_BOTTOM_LAYERS, DEFAULT_EDGE_CUT_LAYER,
    DEFAULT_EDGE_CUT_WIDTH, DEFAULT_MIN_SLOT_WIDTH, DEFAULT_TOP_LAYERS,
};

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Slot conversion settings.
    #[serde(default)]
    pub slot: SlotConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slot = &self.slot;

        if !(slot.min_width.is_finite() && slot.min_width >= DEFAULT_MIN_SLOT_WIDTH) {
            return Err(ConfigError::invalid(
                "slot.min_width",
                format!(
                    "must be at least {DEFAULT_MIN_SLOT_WIDTH} mm (the floor can be raised, not lowered), got {}",
                    slot.min_width
                ),
            ));
        }

        if !(slot.edge_cut_width.is_finite() && slot.edge_cut_width > 0.0) {
            return Err(ConfigError::invalid(
                "slot.edge_cut_width",
                format!("must be positive, got {}", slot.edge_cut_width),
            ));
        }

        for (key, value) in [
            ("slot.edge_cut_layer", &slot.edge_cut_layer),
            ("slot.top_layers", &slot.top_layers),
            ("slot.bottom_layers", &slot.bottom_layers),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(key, "must not be empty"));
            }
            if value.contains(['(', ')']) {
                return Err(ConfigError::invalid(
                    key,
                    format!("must not contain parentheses: '{value}'"),
                ));
            }
        }

        Ok(())
    }

    /// Conversion options described by this configuration.
    #[must_use]
    pub fn slot_options(&self) -> SlotOptions {
        SlotOptions {
            min_width: self.slot.min_width,
            edge_cut_width: self.slot.edge_cut_width,
            edge_cut_layer: self.slot.edge_cut_layer.clone(),
            top_layers: self.slot.top_layers.clone(),
            bottom_layers: self.slot.bottom_layers.clone(),
            rotation_mode: self.slot.rotation_mode,
        }
    }
}

/// Slot conversion configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotConfig {
    /// Smallest drill dimension the board house accepts, in mm.
    /// Default: 0.7
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Stroke width of the routed outline in mm.
    /// Default: 0.0508 (2 mil)
    #[serde(default = "default_edge_cut_width")]
    pub edge_cut_width: f64,

    /// Layer the routed outline is drawn on.
    #[serde(default = "default_edge_cut_layer")]
    pub edge_cut_layer: String,

    /// Layer set of the top-side SMD pad.
    #[serde(default = "default_top_layers")]
    pub top_layers: String,

    /// Layer set of the bottom-side SMD pad.
    #[serde(default = "default_bottom_layers")]
    pub bottom_layers: String,

    /// "`axis_aligned`" or "`follow_pad`".
    #[serde(default)]
    pub rotation_mode: RotationMode,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            edge_cut_width: default_edge_cut_width(),
            edge_cut_layer: default_edge_cut_layer(),
            top_layers: default_top_layers(),
            bottom_layers: default_bottom_layers(),
            rotation_mode: RotationMode::default(),
        }
    }
}

const fn default_min_width() -> f64 {
    DEFAULT_MIN_SLOT_WIDTH
}

const fn default_edge_cut_width() -> f64 {
    DEFAULT_EDGE_CUT_WIDTH
}

fn default_edge_cut_layer() -> String {
    DEFAULT_EDGE_CUT_LAYER.to_string()
}

fn default_top_layers() -> String {
    DEFAULT_TOP_LAYERS.to_string()
}

fn default_bottom_layers() -> String {
    DEFAULT_BOTTOM_LAYERS.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
