//! plated-slot-converter: rewrites plated oval slots in KiCad boards
//!
//! Some board houses cannot plate milled slots. This library replaces every
//! `thru_hole oval` pad with an oval drill by an equivalent they can build:
//!
//! - **SMD pads**: one oval pad on each copper side, same position, size and net
//! - **Routed slot**: two straight sides and two semicircular caps on the
//!   cutout layer, sized from the drill
//!
//! Everything else in the document is passed through byte for byte.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Configuration error types
//! - [`kicad`] — Pad matching and slot geometry

pub mod config;
pub mod error;
pub mod kicad;
