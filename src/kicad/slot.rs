//! Plated slot to routed slot conversion.
//!
//! A plated oval slot becomes:
//!
//! - two SMD oval pads (top and bottom copper) with the original position,
//!   size and net,
//! - a rounded slot outline on the cutout layer made of two straight sides
//!   and two semicircular caps.
//!
//! # Slot Geometry
//!
//! ```text
//!            half_len   half_len
//!           |<------>|<------>|
//!       .---+-----------------+---.   y = -width/2
//!      (    c1        o       c2    )
//!       '---+-----------------+---'   y = +width/2
//! ```
//!
//! `width` is the smaller drill dimension and `length` the larger one, so
//! `half_len = (length - width) / 2`. Cap centres `c1`/`c2` sit at
//! `-half_len`/`+half_len` along the long axis. The long axis follows the
//! pad's larger *size* dimension, not the drill's.

use serde::Deserialize;
use tracing::debug;

use crate::kicad::error::{SlotError, SlotResult};
use crate::kicad::primitives::{EdgeArc, EdgeLine, EdgeStroke, OutputBlock, Point, SmdPad};
use crate::kicad::record::PadRecord;

/// Minimum slot width most board houses will mill (mm).
pub const DEFAULT_MIN_SLOT_WIDTH: f64 = 0.7;

/// Edge-cut stroke width (mm, 2 mil).
pub const DEFAULT_EDGE_CUT_WIDTH: f64 = 0.0508;

/// Cutout layer name.
pub const DEFAULT_EDGE_CUT_LAYER: &str = "Edge.Cuts";

/// Layer set for the top-side SMD pad.
pub const DEFAULT_TOP_LAYERS: &str = "F.Cu F.Paste F.Mask";

/// Layer set for the bottom-side SMD pad.
pub const DEFAULT_BOTTOM_LAYERS: &str = "B.Cu B.Paste B.Mask";

/// How pad rotation affects the slot outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Local slot coordinates are never rotated; the long axis is picked
    /// from the pad size as written.
    #[default]
    AxisAligned,
    /// 90 and 270 degree pads swap the long axis so the cut follows the
    /// rotated copper.
    FollowPad,
}

/// Direction of the slot's long axis in footprint space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Long axis along X.
    Horizontal,
    /// Long axis along Y.
    Vertical,
}

impl Orientation {
    /// Picks the orientation for a pad.
    #[must_use]
    pub fn for_pad(record: &PadRecord, mode: RotationMode) -> Self {
        let from_size = if record.size_x > record.size_y {
            Self::Horizontal
        } else {
            Self::Vertical
        };

        match mode {
            RotationMode::FollowPad if record.is_quarter_turned() => from_size.swapped(),
            _ => from_size,
        }
    }

    /// The other orientation.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Settings for the conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotOptions {
    /// Smallest accepted drill dimension in mm. Values below
    /// [`DEFAULT_MIN_SLOT_WIDTH`] do not lower the floor.
    pub min_width: f64,
    /// Stroke width of the outline in mm.
    pub edge_cut_width: f64,
    /// Layer the outline is drawn on.
    pub edge_cut_layer: String,
    /// Layer set of the top pad.
    pub top_layers: String,
    /// Layer set of the bottom pad.
    pub bottom_layers: String,
    /// Rotation handling.
    pub rotation_mode: RotationMode,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_SLOT_WIDTH,
            edge_cut_width: DEFAULT_EDGE_CUT_WIDTH,
            edge_cut_layer: DEFAULT_EDGE_CUT_LAYER.to_string(),
            top_layers: DEFAULT_TOP_LAYERS.to_string(),
            bottom_layers: DEFAULT_BOTTOM_LAYERS.to_string(),
            rotation_mode: RotationMode::default(),
        }
    }
}

impl SlotOptions {
    fn stroke(&self) -> EdgeStroke {
        EdgeStroke {
            layer: self.edge_cut_layer.clone(),
            width: self.edge_cut_width,
        }
    }
}

/// Dimensions of the routed slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    /// Slot width (smaller drill dimension) in mm.
    pub width: f64,
    /// Slot length (larger drill dimension) in mm.
    pub length: f64,
    /// Half the length of each straight side in mm.
    pub half_len: f64,
    /// Long axis direction.
    pub orientation: Orientation,
}

impl SlotGeometry {
    /// Derives the slot dimensions for a pad.
    #[must_use]
    pub fn for_pad(record: &PadRecord, mode: RotationMode) -> Self {
        let width = record.drill_x.min(record.drill_y);
        let length = record.drill_x.max(record.drill_y);
        Self {
            width,
            length,
            half_len: (length - width) / 2.0,
            orientation: Orientation::for_pad(record, mode),
        }
    }

    /// Cap radius in mm.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    /// Maps a point given as (along the long axis, across it) to pad-local
    /// X/Y.
    fn local(&self, along: f64, across: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(along, across),
            Orientation::Vertical => Point::new(across, along),
        }
    }

    /// Straight sides in pad-local coordinates.
    fn lines(&self, stroke: &EdgeStroke) -> [EdgeLine; 2] {
        let r = self.radius();
        [-r, r].map(|across| EdgeLine {
            start: self.local(-self.half_len, across),
            end: self.local(self.half_len, across),
            stroke: stroke.clone(),
        })
    }

    /// End caps in pad-local coordinates.
    ///
    /// Angles are clockwise-positive on screen (KiCad's Y axis points down).
    /// Each cap starts on one side of the slot and sweeps 180 degrees away
    /// from the slot centre.
    fn arcs(&self, stroke: &EdgeStroke) -> [EdgeArc; 2] {
        let r = self.radius();
        let start_across = match self.orientation {
            Orientation::Horizontal => -r,
            Orientation::Vertical => r,
        };
        [(-self.half_len, -180.0), (self.half_len, 180.0)].map(|(along, angle)| EdgeArc {
            center: self.local(along, 0.0),
            start: self.local(along, start_across),
            angle,
            stroke: stroke.clone(),
        })
    }
}

/// Checks a pad against the manufacturing limits.
///
/// Drill size is checked before rotation; the first failure is returned.
///
/// # Errors
///
/// Returns [`SlotError::SlotTooNarrow`] when either drill dimension is below
/// `min_width` (never less than [`DEFAULT_MIN_SLOT_WIDTH`]), or
/// [`SlotError::UnsupportedRotation`] when the rotation is not a right-angle
/// multiple.
pub fn validate(record: &PadRecord, options: &SlotOptions) -> SlotResult<()> {
    let floor = options.min_width.max(DEFAULT_MIN_SLOT_WIDTH);
    if record.drill_x < floor || record.drill_y < floor {
        return Err(SlotError::slot_too_narrow(
            &record.id,
            record.drill_x,
            record.drill_y,
            floor,
        ));
    }

    if !record.has_right_angle_rotation() {
        return Err(SlotError::unsupported_rotation(&record.id, record.rotation));
    }

    Ok(())
}

/// Builds the replacement primitives for one plated slot.
///
/// # Errors
///
/// Returns an error if the pad fails [`validate`].
pub fn transform(record: &PadRecord, options: &SlotOptions) -> SlotResult<OutputBlock> {
    validate(record, options)?;

    let geometry = SlotGeometry::for_pad(record, options.rotation_mode);
    let origin = Point::new(record.x, record.y);
    let stroke = options.stroke();

    debug!(
        pad = %record.id,
        x = record.x,
        y = record.y,
        rotation = record.rotation,
        orientation = ?geometry.orientation,
        width = geometry.width,
        length = geometry.length,
        "Converting plated slot"
    );

    let smd = |layers: &str| SmdPad {
        id: record.id.clone(),
        at: origin,
        rotation: record.rotation,
        size_x: record.size_x,
        size_y: record.size_y,
        layers: layers.to_string(),
        net: record.net.clone(),
    };

    let mut arcs = geometry.arcs(&stroke);
    for arc in &mut arcs {
        arc.center = arc.center.translated(origin);
        arc.start = arc.start.translated(origin);
    }

    let mut lines = geometry.lines(&stroke);
    for line in &mut lines {
        line.start = line.start.translated(origin);
        line.end = line.end.translated(origin);
    }

    Ok(OutputBlock {
        top_pad: smd(&options.top_layers),
        bottom_pad: smd(&options.bottom_layers),
        arcs,
        lines,
    })
}
