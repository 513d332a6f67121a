//! Ramer-Douglas-Peucker polyline simplification.
//!
//! Reduces an ordered point sequence to a subsequence that stays within a
//! perpendicular-distance tolerance of the original shape. Endpoints are
//! always preserved, so simplifying a routed hop never moves its source or
//! its target.

use wirekit_core::Point;

/// Default tolerance for preview simplification.
///
/// Routing uses the tighter [`crate::router::ROUTE_EPSILON`]; this looser
/// value is for display paths where fidelity matters less than size.
pub const DEFAULT_EPSILON: f64 = 2.0;

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// When `a` and `b` coincide the chord degenerates to a point and the
/// Euclidean distance to that point is used instead.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    if a == b {
        return p.distance_to(&a);
    }
    let num = ((b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x).abs();
    let den = ((b.y - a.y).powi(2) + (b.x - a.x).powi(2)).sqrt();
    num / den
}

/// Simplifies a polyline with the Ramer-Douglas-Peucker algorithm.
///
/// Returns an order-preserving subsequence of `points` containing at least
/// the first and last point. Sequences shorter than three points are
/// returned unchanged. `epsilon` is the maximum perpendicular deviation
/// allowed when dropping an interior point.
///
/// Works over index ranges on the backing slice with an explicit worklist
/// rather than recursing on sub-slices, so degenerate staircase inputs
/// cannot exhaust the call stack and no intermediate copies are made.
pub fn simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    // Ranges still to examine, as inclusive (first, last) index pairs.
    let mut ranges = vec![(0usize, points.len() - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last - first < 2 {
            continue;
        }

        // Interior point furthest from the chord. First index achieving
        // the maximum wins.
        let mut dmax = 0.0_f64;
        let mut idx = first;
        for i in (first + 1)..last {
            let d = perpendicular_distance(points[i], points[first], points[last]);
            if d > dmax {
                dmax = d;
                idx = i;
            }
        }

        if dmax > epsilon {
            keep[idx] = true;
            ranges.push((first, idx));
            ranges.push((idx, last));
        }
    }

    points
        .iter()
        .zip(keep.iter())
        .filter(|(_, &k)| k)
        .map(|(p, _)| *p)
        .collect()
}
