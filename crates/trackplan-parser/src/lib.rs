//! Parser for the Trackplan compact marker encoding.
//!
//! Markers can be written by hand, one per line, as comma-separated
//! `km,label,side,icon` records:
//!
//! ```text
//! 47.000,Rerail,top,signal
//! 47.350,WILD,bottom,detector
//! 48.5
//! ```
//!
//! Only `km` is required. The format is deliberately permissive: records
//! whose kilometre value cannot be read are skipped instead of failing the
//! whole input, so half-edited text still produces a diagram.
//!
//! The crate also reads the free-text route sentence (`between <from> and
//! <to>`) used to fill the route fields of a diagram.
//!
//! # Example
//!
//! ```
//! use trackplan_core::marker::{Icon, Side};
//!
//! let markers = trackplan_parser::parse_markers("47.000,Rerail,top,signal\n48.5,,bottom,\n");
//! assert_eq!(markers.len(), 2);
//! assert_eq!(markers[1].side(), Side::Bottom);
//! assert_eq!(markers[1].icon(), Icon::Signal);
//! ```

mod markers;
mod route;

pub use markers::{format_markers, format_markers_fixed, parse_markers};
pub use route::{Route, parse_route_sentence};
