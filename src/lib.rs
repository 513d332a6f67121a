//! # WireKit
//!
//! A Rust-based wiring-path generator for electrical floorplans:
//! - Ramer-Douglas-Peucker polyline simplification
//! - Daisy-chain circuit routing from panel points to device ports
//! - SVG preview rendering of circuits and symbols
//!
//! ## Architecture
//!
//! WireKit is organized as a workspace with multiple crates:
//!
//! 1. **wirekit-core** - Geometry, units, floorplan document model, errors
//! 2. **wirekit-router** - Path simplification, planners, circuit routing
//! 3. **wirekit-render** - SVG serialization of routing results
//! 4. **wirekit** - CLI binary that integrates all crates
//!
//! ## Data flow
//!
//! ```text
//! Floorplan JSON
//!   -> Floorplan (typed document)
//!   -> CircuitRouter::route(panel.point, symbol ports)
//!   -> Vec<Circuit>
//!   -> Markup { circuits, symbols }
//!   -> SVG preview
//! ```

pub use wirekit_core::{
    path_length, validate_path, BoundingBox, Error, Floorplan, FloorplanError, GeometryError,
    Panel, Point, Result, Room, Symbol, Units,
};

pub use wirekit_router::{
    perpendicular_distance, simplify, Circuit, CircuitRouter, DirectPlanner, ManhattanPlanner,
    PathPlanner, Topology, DEFAULT_EPSILON, DEFAULT_WIRE, ROUTE_EPSILON,
};

pub use wirekit_render::{render, Markup, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // stderr, not stdout: the CLI writes SVG to stdout by default
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
