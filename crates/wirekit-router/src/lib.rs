//! # WireKit Router
//!
//! This crate turns a panel point and an ordered set of device ports into
//! wiring circuits. It combines three pieces:
//!
//! - **Simplification**: Ramer-Douglas-Peucker polyline reduction
//! - **Planning**: raw path construction between consecutive hops
//! - **Routing**: hop iteration, circuit identity, and wire labeling
//!
//! ## Architecture
//!
//! ```text
//! CircuitRouter
//!   ├── PathPlanner (DirectPlanner | ManhattanPlanner)
//!   └── simplify (RDP, per-hop)
//!
//! route(source, targets) -> Vec<Circuit>
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wirekit_core::Point;
//! use wirekit_router::CircuitRouter;
//!
//! let router = CircuitRouter::new();
//! let circuits = router.route(
//!     Point::new(0.0, 0.0),
//!     &[Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
//!     "14/2",
//! )?;
//! ```

pub mod circuit;
pub mod planner;
pub mod router;
pub mod simplify;

pub use circuit::Circuit;
pub use planner::{DirectPlanner, ManhattanPlanner, PathPlanner};
pub use router::{CircuitRouter, Topology, DEFAULT_WIRE, ROUTE_EPSILON};
pub use simplify::{perpendicular_distance, simplify, DEFAULT_EPSILON};
