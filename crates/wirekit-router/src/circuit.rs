//! Circuit record types.

use serde::{Deserialize, Serialize};

use wirekit_core::{path_length, Point};

/// One routed circuit: a wiring run from a source to a device port.
///
/// Circuits are created by [`crate::CircuitRouter::route`] and immutable
/// thereafter. The id is unique within one routing call and assigned in
/// hop order (`ckt_1`, `ckt_2`, ...). The wire gauge is an opaque label
/// carried through to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    pub wire: String,
    pub path: Vec<Point>,
}

impl Circuit {
    /// Length of the routed run in drawing units.
    pub fn run_length(&self) -> f64 {
        path_length(&self.path)
    }

    /// The hop's source point.
    pub fn source(&self) -> Option<&Point> {
        self.path.first()
    }

    /// The hop's target point.
    pub fn target(&self) -> Option<&Point> {
        self.path.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length() {
        let ckt = Circuit {
            id: "ckt_1".to_string(),
            wire: "14/2".to_string(),
            path: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 5.0),
            ],
        };
        assert_eq!(ckt.run_length(), 15.0);
        assert_eq!(ckt.source(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(ckt.target(), Some(&Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_serde_shape() {
        let ckt = Circuit {
            id: "ckt_2".to_string(),
            wire: "12/2".to_string(),
            path: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        };
        let json = serde_json::to_value(&ckt).unwrap();
        assert_eq!(json["id"], "ckt_2");
        assert_eq!(json["wire"], "12/2");
        assert_eq!(json["path"][0]["x"], 1.0);
    }
}
