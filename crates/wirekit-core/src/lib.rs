//! # WireKit Core
//!
//! Core types and utilities for WireKit.
//! Provides the fundamental abstractions for 2D geometry, measurement
//! units, the floorplan document model, and error handling.

pub mod error;
pub mod floorplan;
pub mod geometry;
pub mod units;

pub use error::{Error, FloorplanError, GeometryError, Result};

pub use geometry::{path_length, validate_path, Point};

pub use floorplan::{BoundingBox, Floorplan, Panel, Room, Symbol};

pub use units::Units;
