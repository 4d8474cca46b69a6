//! Error types for slot conversion.

use thiserror::Error;

/// Result type for slot conversion.
pub type SlotResult<T> = Result<T, SlotError>;

/// Reasons a through-hole oval pad cannot be turned into a routed slot.
///
/// Both kinds are user input errors: the offending board has to be fixed,
/// nothing is clamped or retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    /// One of the drill dimensions is below the manufacturing floor.
    #[error(
        "pad {pad}: slot drill {drill_x} x {drill_y} mm is narrower than the {minimum} mm minimum slot width"
    )]
    SlotTooNarrow {
        /// Pad identifier.
        pad: String,
        /// Drill size along X in mm.
        drill_x: f64,
        /// Drill size along Y in mm.
        drill_y: f64,
        /// Minimum accepted slot width in mm.
        minimum: f64,
    },

    /// The pad is rotated by something other than a right-angle multiple.
    #[error("pad {pad}: cannot handle rotation {rotation} (only 0, 90, 180 and 270 are supported)")]
    UnsupportedRotation {
        /// Pad identifier.
        pad: String,
        /// Rotation in degrees as found in the board.
        rotation: f64,
    },
}

impl SlotError {
    /// Creates a slot-too-narrow error.
    pub fn slot_too_narrow(
        pad: impl Into<String>,
        drill_x: f64,
        drill_y: f64,
        minimum: f64,
    ) -> Self {
        Self::SlotTooNarrow {
            pad: pad.into(),
            drill_x,
            drill_y,
            minimum,
        }
    }

    /// Creates an unsupported-rotation error.
    pub fn unsupported_rotation(pad: impl Into<String>, rotation: f64) -> Self {
        Self::UnsupportedRotation {
            pad: pad.into(),
            rotation,
        }
    }
}
