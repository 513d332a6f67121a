//! Circuit routing: hop iteration, identity, and wire labeling.

use tracing::{debug, trace};

use wirekit_core::{validate_path, GeometryError, Point, Result};

use crate::circuit::Circuit;
use crate::planner::{DirectPlanner, PathPlanner};
use crate::simplify::simplify;

/// Tolerance applied to routed paths.
///
/// Independent of [`crate::simplify::DEFAULT_EPSILON`]; routed geometry is
/// kept tighter than preview geometry.
pub const ROUTE_EPSILON: f64 = 1.0;

/// Default wire gauge label attached to routed circuits.
pub const DEFAULT_WIRE: &str = "14/2";

/// How consecutive hops connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Each circuit starts at the previous hop's target (daisy chain).
    #[default]
    Chain,
    /// Every circuit starts at the original source point.
    Star,
}

/// Routes wiring circuits from a source point to an ordered target list.
///
/// Each hop is planned by the configured [`PathPlanner`], simplified with
/// [`ROUTE_EPSILON`], and labeled `ckt_<n>` in hop order. The default
/// configuration reproduces the reference behavior: straight-line hops in
/// a daisy chain.
pub struct CircuitRouter {
    planner: Box<dyn PathPlanner>,
    topology: Topology,
    epsilon: f64,
}

impl Default for CircuitRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitRouter {
    /// Creates a router with the reference policy: direct hops, chain
    /// topology, [`ROUTE_EPSILON`] tolerance.
    pub fn new() -> Self {
        Self {
            planner: Box::new(DirectPlanner),
            topology: Topology::Chain,
            epsilon: ROUTE_EPSILON,
        }
    }

    /// Replaces the hop planner.
    pub fn with_planner(mut self, planner: Box<dyn PathPlanner>) -> Self {
        self.planner = planner;
        self
    }

    /// Selects the hop topology.
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Overrides the simplification tolerance applied to each hop.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Routes one circuit per target, in target order.
    ///
    /// `wire` is an opaque gauge label shared by all circuits of the call.
    /// Targets may be empty, yielding an empty result. Non-finite
    /// coordinates anywhere in the input are rejected before any circuit
    /// is built.
    pub fn route(&self, source: Point, targets: &[Point], wire: &str) -> Result<Vec<Circuit>> {
        validate_path(std::slice::from_ref(&source))?;
        validate_path(targets)?;

        debug!(
            planner = self.planner.name(),
            topology = ?self.topology,
            targets = targets.len(),
            wire,
            "routing circuits"
        );

        let mut circuits = Vec::with_capacity(targets.len());
        let mut cursor = source;
        for (i, target) in targets.iter().enumerate() {
            let raw = self.planner.plan(cursor, *target);
            if raw.len() < 2 {
                return Err(GeometryError::PathTooShort {
                    len: raw.len(),
                    min: 2,
                }
                .into());
            }
            let path = simplify(&raw, self.epsilon);
            trace!(
                hop = i + 1,
                raw_points = raw.len(),
                simplified_points = path.len(),
                "routed hop"
            );
            circuits.push(Circuit {
                id: format!("ckt_{}", i + 1),
                wire: wire.to_string(),
                path,
            });
            if self.topology == Topology::Chain {
                cursor = *target;
            }
        }
        Ok(circuits)
    }
}
