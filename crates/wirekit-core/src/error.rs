//! Error handling for WireKit
//!
//! Provides error types for the layers of the wiring-path pipeline:
//! - Geometry errors (malformed points handed to the router)
//! - Floorplan errors (document-level problems found before routing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents precondition violations on in-memory geometry. The routing
/// core operates on already-validated points, so these errors surface as
/// fail-fast rejections rather than silent coercion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate is NaN or infinite
    #[error("Non-finite coordinate at point {index}: ({x}, {y})")]
    NonFiniteCoordinate {
        /// Index of the offending point within its sequence.
        index: usize,
        /// The X coordinate as received.
        x: f64,
        /// The Y coordinate as received.
        y: f64,
    },

    /// A polyline has fewer points than the operation requires
    #[error("Path too short: {len} point(s), need at least {min}")]
    PathTooShort {
        /// The number of points received.
        len: usize,
        /// The minimum number of points required.
        min: usize,
    },
}

/// Floorplan error type
///
/// Represents problems with a floorplan document that prevent it from
/// driving the router: missing panels, unresolvable references, or
/// out-of-range document attributes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FloorplanError {
    /// The document declares no electrical panels
    #[error("Floorplan has no panels")]
    NoPanels,

    /// A panel referenced by id does not exist
    #[error("Panel not found: {id}")]
    PanelNotFound {
        /// The requested panel id.
        id: String,
    },

    /// The document scale must be positive and finite
    #[error("Invalid scale: {scale}")]
    InvalidScale {
        /// The scale value as received.
        scale: f64,
    },

    /// A panel carries a malformed point
    #[error("Invalid panel {id}: {reason}")]
    InvalidPanel {
        /// The panel id.
        id: String,
        /// Why the panel was rejected.
        reason: String,
    },

    /// A symbol carries a malformed port or bounding box
    #[error("Invalid symbol {id}: {reason}")]
    InvalidSymbol {
        /// The symbol id.
        id: String,
        /// Why the symbol was rejected.
        reason: String,
    },
}

/// Main error type for WireKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Floorplan error
    #[error(transparent)]
    Floorplan(#[from] FloorplanError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a floorplan error
    pub fn is_floorplan_error(&self) -> bool {
        matches!(self, Error::Floorplan(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
