//! Raw path construction between consecutive hops.
//!
//! A planner produces the unsimplified polyline for one hop. The routing
//! contract only requires that the path starts at `from` and ends at `to`;
//! everything between is planner policy, which is the seam where an
//! obstacle-aware search (grid A* over a floorplan occupancy map) would
//! plug in.

use wirekit_core::Point;

/// Snap tolerance for treating two coordinates as axis-aligned.
const ALIGN_EPSILON: f64 = 0.5;

/// Builds the raw path for a single hop.
pub trait PathPlanner {
    /// Plans a path from `from` to `to`.
    ///
    /// The returned polyline has at least two points; its first point is
    /// `from` and its last point is `to`.
    fn plan(&self, from: Point, to: Point) -> Vec<Point>;

    /// Planner name for logs and CLI selection.
    fn name(&self) -> &'static str;
}

/// Straight-line planner: the reference routing policy.
///
/// Connects each hop with a direct two-point segment, ignoring walls and
/// obstacles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPlanner;

impl PathPlanner for DirectPlanner {
    fn plan(&self, from: Point, to: Point) -> Vec<Point> {
        vec![from, to]
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}

/// Orthogonal planner: Manhattan-style L-routes.
///
/// - Same Y (within a snap tolerance): straight horizontal line
/// - Same X: straight vertical line
/// - Otherwise: L-route, horizontal first then vertical
///
/// Produces the rectilinear runs conventional for wiring previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanPlanner;

impl PathPlanner for ManhattanPlanner {
    fn plan(&self, from: Point, to: Point) -> Vec<Point> {
        if (from.y - to.y).abs() < ALIGN_EPSILON || (from.x - to.x).abs() < ALIGN_EPSILON {
            vec![from, to]
        } else {
            let corner = Point::new(to.x, from.y);
            vec![from, corner, to]
        }
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_is_two_points() {
        let pts = DirectPlanner.plan(Point::new(0.0, 0.0), Point::new(200.0, 100.0));
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(200.0, 100.0)]);
    }

    #[test]
    fn manhattan_straight_horizontal() {
        let pts = ManhattanPlanner.plan(Point::new(0.0, 100.0), Point::new(200.0, 100.0));
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn manhattan_straight_vertical() {
        let pts = ManhattanPlanner.plan(Point::new(100.0, 0.0), Point::new(100.0, 200.0));
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn manhattan_l_route() {
        let pts = ManhattanPlanner.plan(Point::new(0.0, 0.0), Point::new(200.0, 100.0));
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1].x, 200.0);
        assert_eq!(pts[1].y, 0.0);
    }

    #[test]
    fn endpoints_are_preserved() {
        let from = Point::new(3.0, 7.0);
        let to = Point::new(-40.0, 12.0);
        for planner in [&DirectPlanner as &dyn PathPlanner, &ManhattanPlanner] {
            let pts = planner.plan(from, to);
            assert_eq!(pts.first(), Some(&from), "{}", planner.name());
            assert_eq!(pts.last(), Some(&to), "{}", planner.name());
        }
    }
}
