//! # WireKit Render
//!
//! SVG serialization of routing results. Takes the circuits produced by
//! `wirekit-router` together with the floorplan's device symbols and emits
//! a self-contained SVG preview: one polyline per circuit, one rectangle
//! and label per symbol.

pub mod svg;

pub use svg::{render, Markup, DEFAULT_HEIGHT, DEFAULT_WIDTH};
