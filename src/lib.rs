//! Procedural renderer for the Anchor app icon.
//!
//! Each icon is a vertical gradient, an optional two-tone flame, an anchor
//! glyph and an iOS style rounded-corner mask, flattened to an opaque RGB
//! PNG.

pub mod canvas;
pub mod color;
pub mod contents_json;
pub mod error;
pub mod geometry;
pub mod icon_gen;
pub mod icon_spec;

pub use color::Color;
pub use error::{IconError, Result};
pub use icon_spec::{default_specs, FlamePalette, IconSpec, Variant};
