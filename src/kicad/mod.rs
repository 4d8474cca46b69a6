//! KiCad board text handling.
//!
//! Rewrites plated oval slots in a `.kicad_pcb` or `.kicad_mod` document
//! into SMD pads plus a routed outline on the cutout layer, for board houses
//! that mill slots instead of drilling them.
//!
//! # Conversion
//!
//! ```text
//! (pad 1 thru_hole oval (at 10 10 0) (size 1.5 2) (drill oval 0.8 1.2) (layers *.Cu *.Mask) (net 1 "GND"))
//! ```
//!
//! becomes
//!
//! ```text
//! (pad 1 smd oval (at 10 10 0) (size 1.5 2) (layers F.Cu F.Paste F.Mask) (net 1 "GND"))
//! (pad 1 smd oval (at 10 10 0) (size 1.5 2) (layers B.Cu B.Paste B.Mask) (net 1 "GND"))
//! (fp_arc (start 10 9.8) (end 10.4 9.8) (angle -180) (layer Edge.Cuts) (width 0.0508))
//! (fp_arc (start 10 10.2) (end 10.4 10.2) (angle 180) (layer Edge.Cuts) (width 0.0508))
//! (fp_line (start 9.6 9.8) (end 9.6 10.2) (layer Edge.Cuts) (width 0.0508))
//! (fp_line (start 10.4 9.8) (end 10.4 10.2) (layer Edge.Cuts) (width 0.0508))
//! ```
//!
//! All text outside the matched pad records is copied byte for byte.

pub mod error;
pub mod matcher;
pub mod primitives;
pub mod record;
pub mod slot;

pub use error::{SlotError, SlotResult};
pub use matcher::{find_pads, PadMatch};
pub use primitives::OutputBlock;
pub use record::{Net, PadRecord};
pub use slot::{transform, Orientation, RotationMode, SlotGeometry, SlotOptions};

use tracing::info;

/// Rewrites every plated oval slot in `text`.
///
/// The whole document is converted before anything is returned, so a
/// failing pad leaves no partial output behind.
///
/// # Errors
///
/// Returns the first [`SlotError`] encountered, in document order.
pub fn convert(text: &str, options: &SlotOptions) -> SlotResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut converted = 0usize;

    for PadMatch { span, record } in find_pads(text) {
        let block = transform(&record, options)?;
        out.push_str(&text[last..span.start]);
        out.push_str(&block.to_string());
        last = span.end;
        converted += 1;
    }
    out.push_str(&text[last..]);

    info!(pads = converted, "Converted plated slots");
    Ok(out)
}

/// Lists the plated slots in `text` with their derived geometry, without
/// rewriting anything.
///
/// # Errors
///
/// Returns the first [`SlotError`] encountered, in document order.
pub fn survey(text: &str, options: &SlotOptions) -> SlotResult<Vec<(PadRecord, SlotGeometry)>> {
    find_pads(text)
        .map(|m| {
            slot::validate(&m.record, options)?;
            let geometry = SlotGeometry::for_pad(&m.record, options.rotation_mode);
            Ok((m.record, geometry))
        })
        .collect()
}
