//! Footprint primitives emitted in place of a plated slot.
//!
//! These types render themselves as KiCad footprint s-expressions through
//! [`std::fmt::Display`]:
//!
//! ```text
//! (pad 1 smd oval (at 10 10 0) (size 1.5 2) (layers F.Cu F.Paste F.Mask) (net 1 "GND"))
//! (fp_arc (start 10 9.8) (end 10.4 9.8) (angle -180) (layer Edge.Cuts) (width 0.0508))
//! (fp_line (start 9.6 9.8) (end 9.6 10.2) (layer Edge.Cuts) (width 0.0508))
//! ```

use std::fmt;

use crate::kicad::record::Net;

/// Decimal places kept when writing millimetre values (1 nm resolution).
const MM_DECIMALS: usize = 6;

/// Formats a millimetre value the way KiCad writes it: no trailing zeros,
/// no exponent, and never `-0`.
#[must_use]
pub fn format_mm(value: f64) -> String {
    let mut s = format!("{value:.prec$}", prec = MM_DECIMALS);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// A point in board coordinates (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X position in mm.
    pub x: f64,
    /// Y position in mm.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `offset`.
    #[must_use]
    pub fn translated(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_mm(self.x), format_mm(self.y))
    }
}

/// A surface-mount oval pad on one side of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct SmdPad {
    /// Pad identifier, copied from the through-hole pad.
    pub id: String,
    /// Pad centre.
    pub at: Point,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Pad size along X in mm.
    pub size_x: f64,
    /// Pad size along Y in mm.
    pub size_y: f64,
    /// Layer set, e.g. `F.Cu F.Paste F.Mask`.
    pub layers: String,
    /// Net the pad is connected to.
    pub net: Net,
}

impl fmt::Display for SmdPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(pad {} smd oval (at {} {}) (size {} {}) (layers {}) (net {} {}))",
            self.id,
            self.at,
            format_mm(self.rotation),
            format_mm(self.size_x),
            format_mm(self.size_y),
            self.layers,
            self.net.number,
            self.net.name
        )
    }
}

/// Stroke shared by every edge-cut primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStroke {
    /// Cutout layer name.
    pub layer: String,
    /// Stroke width in mm.
    pub width: f64,
}

impl fmt::Display for EdgeStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(layer {}) (width {})", self.layer, format_mm(self.width))
    }
}

/// A straight edge-cut segment.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Layer and stroke width.
    pub stroke: EdgeStroke,
}

impl EdgeLine {
    /// Length of the segment in mm.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

impl fmt::Display for EdgeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(fp_line (start {}) (end {}) {})",
            self.start, self.end, self.stroke
        )
    }
}

/// An edge-cut arc, written in the KiCad 5 centre/start/angle form.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeArc {
    /// Arc centre.
    pub center: Point,
    /// Point where the arc starts.
    pub start: Point,
    /// Sweep in degrees; the sign gives the direction.
    pub angle: f64,
    /// Layer and stroke width.
    pub stroke: EdgeStroke,
}

impl EdgeArc {
    /// Radius in mm.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.start.x - self.center.x).hypot(self.start.y - self.center.y)
    }
}

impl fmt::Display for EdgeArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(fp_arc (start {}) (end {}) (angle {}) {})",
            self.center,
            self.start,
            format_mm(self.angle),
            self.stroke
        )
    }
}

/// Replacement for one plated slot: top and bottom pads plus the routed
/// slot outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputBlock {
    /// Pad on the top copper.
    pub top_pad: SmdPad,
    /// Pad on the bottom copper.
    pub bottom_pad: SmdPad,
    /// Cap arcs (first at the negative end of the slot).
    pub arcs: [EdgeArc; 2],
    /// Straight sides (first at the negative side of the slot).
    pub lines: [EdgeLine; 2],
}

impl OutputBlock {
    /// Number of primitives the block renders to.
    pub const PRIMITIVE_COUNT: usize = 6;
}

impl fmt::Display for OutputBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.top_pad)?;
        writeln!(f, "{}", self.bottom_pad)?;
        for arc in &self.arcs {
            writeln!(f, "{arc}")?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
