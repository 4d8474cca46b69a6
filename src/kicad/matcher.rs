//! Locates through-hole oval pads in board text.
//!
//! The scan is pattern based rather than a full s-expression parse: only the
//! one record shape below is recognised, everything else is left alone.
//!
//! ```text
//! (pad <id> thru_hole oval (at <x> <y> [<rotation>]) (size <sx> <sy>)
//!      (drill oval <dx> <dy>) (layers <layer-list>) (net <num> <name>))
//! ```
//!
//! Tokens may be separated by any run of whitespace, including newlines.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::warn;

use crate::kicad::record::{Net, PadRecord};

/// Pad record grammar. Spaces stand for "one or more whitespace characters".
const PAD_GRAMMAR: &str = concat!(
    r"\(pad (?P<pad>\w+) thru_hole oval",
    r" \(at (?P<at_x>[\d.-]+) (?P<at_y>[\d.-]+)(?: (?P<at_r>[\d.-]+))? ?\)",
    r" \(size (?P<size_x>[\d.-]+) (?P<size_y>[\d.-]+) ?\)",
    r" \(drill oval (?P<drill_x>[\d.-]+) (?P<drill_y>[\d.-]+) ?\)",
    r" \(layers (?P<layers>[^)]+)\)",
    r" \(net (?P<net_no>\d+) (?P<net_name>[^)]+)\) ?\)",
);

fn pad_regex() -> &'static Regex {
    static PAD_RE: OnceLock<Regex> = OnceLock::new();
    PAD_RE.get_or_init(|| {
        let pattern = PAD_GRAMMAR.replace(" ?", r"\s*").replace(' ', r"\s+");
        Regex::new(&pattern).expect("pad grammar is a valid regex")
    })
}

/// One through-hole oval pad found in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PadMatch {
    /// Byte range of the whole pad record, closing parenthesis included.
    pub span: Range<usize>,
    /// Fields of the record.
    pub record: PadRecord,
}

/// Iterator over the pad records of a document, left to right, without
/// overlap.
pub struct PadMatches<'t> {
    inner: regex::CaptureMatches<'static, 't>,
}

impl Iterator for PadMatches<'_> {
    type Item = PadMatch;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.inner.by_ref() {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if let Some(record) = record_from_captures(&caps) {
                return Some(PadMatch {
                    span: whole.range(),
                    record,
                });
            }
            warn!(
                offset = whole.start(),
                text = whole.as_str(),
                "Skipping pad record with malformed number"
            );
        }
        None
    }
}

/// Finds every through-hole oval pad in `text`.
#[must_use]
pub fn find_pads(text: &str) -> PadMatches<'_> {
    PadMatches {
        inner: pad_regex().captures_iter(text),
    }
}

fn number(caps: &Captures<'_>, name: &str) -> Option<f64> {
    caps.name(name)?.as_str().parse().ok()
}

fn record_from_captures(caps: &Captures<'_>) -> Option<PadRecord> {
    let rotation = match caps.name("at_r") {
        Some(r) => r.as_str().parse().ok()?,
        None => 0.0,
    };

    Some(PadRecord {
        id: caps.name("pad")?.as_str().to_string(),
        x: number(caps, "at_x")?,
        y: number(caps, "at_y")?,
        rotation,
        size_x: number(caps, "size_x")?,
        size_y: number(caps, "size_y")?,
        drill_x: number(caps, "drill_x")?,
        drill_y: number(caps, "drill_y")?,
        layers: caps.name("layers")?.as_str().trim().to_string(),
        net: Net::new(
            caps.name("net_no")?.as_str().parse().ok()?,
            caps.name("net_name")?.as_str().trim(),
        ),
    })
}
