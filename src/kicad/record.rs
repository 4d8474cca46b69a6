//! Through-hole oval pad records as found in a KiCad board or footprint.

/// Net a pad belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    /// Net number (e.g., 1).
    pub number: u32,
    /// Net name exactly as written in the board, including any quotes.
    pub name: String,
}

impl Net {
    /// Creates a net.
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

/// A `thru_hole oval` pad with an oval drill.
#[derive(Debug, Clone, PartialEq)]
pub struct PadRecord {
    /// Pad identifier (e.g., "1", "MP"). Unique per footprint only.
    pub id: String,

    /// X position in mm.
    pub x: f64,

    /// Y position in mm.
    pub y: f64,

    /// Rotation in degrees.
    pub rotation: f64,

    /// Pad size along X in mm.
    pub size_x: f64,

    /// Pad size along Y in mm.
    pub size_y: f64,

    /// Drill size along X in mm.
    pub drill_x: f64,

    /// Drill size along Y in mm.
    pub drill_y: f64,

    /// Layer list of the original pad, passed through untouched.
    pub layers: String,

    /// Net the pad is connected to.
    pub net: Net,
}

impl PadRecord {
    /// Returns `true` when the rotation is one of 0, 90, 180 or 270 degrees.
    #[must_use]
    pub fn has_right_angle_rotation(&self) -> bool {
        [0.0, 90.0, 180.0, 270.0].contains(&self.rotation)
    }

    /// Returns `true` for 90 and 270 degree rotations, where the pad's local
    /// axes are swapped relative to the footprint.
    #[must_use]
    pub fn is_quarter_turned(&self) -> bool {
        self.rotation == 90.0 || self.rotation == 270.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rotation: f64) -> PadRecord {
        PadRecord {
            id: "1".to_string(),
            x: 0.0,
            y: 0.0,
            rotation,
            size_x: 1.5,
            size_y: 2.0,
            drill_x: 0.8,
            drill_y: 1.2,
            layers: "*.Cu *.Mask".to_string(),
            net: Net::new(1, "\"GND\""),
        }
    }

    #[test]
    fn right_angle_rotations_accepted() {
        for rotation in [0.0, 90.0, 180.0, 270.0] {
            assert!(record(rotation).has_right_angle_rotation());
        }
    }

    #[test]
    fn other_rotations_rejected() {
        for rotation in [45.0, -90.0, 360.0, 89.9] {
            assert!(!record(rotation).has_right_angle_rotation());
        }
    }

    #[test]
    fn quarter_turns() {
        assert!(record(90.0).is_quarter_turned());
        assert!(record(270.0).is_quarter_turned());
        assert!(!record(0.0).is_quarter_turned());
        assert!(!record(180.0).is_quarter_turned());
    }
}
