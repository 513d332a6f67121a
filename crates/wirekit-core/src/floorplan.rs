//! Floorplan document model.
//!
//! A floorplan is the structured output of upstream plan analysis: rooms,
//! electrical panels, and device symbols with connection ports. The router
//! consumes panel points and symbol ports; the renderer additionally reads
//! symbol bounding boxes and labels. Documents arrive as JSON.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, FloorplanError, Result};
use crate::geometry::Point;
use crate::units::Units;

/// Axis-aligned bounding box of a device symbol on the plan.
///
/// Width and height are optional in source documents; renderers fall back
/// to a default footprint for symbols detected as bare points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub w: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
}

/// A room outline on the floorplan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub polygon: Vec<Point>,
}

/// An electrical panel: the origin of a circuit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub point: Point,
}

/// A device symbol with its connection port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub room_id: Option<String>,
    pub bbox: BoundingBox,
    pub port: Point,
}

/// A complete floorplan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floorplan {
    #[serde(default)]
    pub units: Units,
    pub scale: f64,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

impl Floorplan {
    /// Parses a floorplan from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: Floorplan = serde_json::from_str(json)?;
        debug!(
            rooms = plan.rooms.len(),
            panels = plan.panels.len(),
            symbols = plan.symbols.len(),
            "parsed floorplan"
        );
        Ok(plan)
    }

    /// Looks up a panel by id.
    pub fn panel_by_id(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Resolves the source panel for a routing run.
    ///
    /// With an id the panel must exist; without one the document's first
    /// panel is used. A document without panels cannot seed a run.
    pub fn routing_panel(&self, id: Option<&str>) -> Result<&Panel> {
        match id {
            Some(id) => self.panel_by_id(id).ok_or_else(|| {
                Error::from(FloorplanError::PanelNotFound { id: id.to_string() })
            }),
            None => self
                .panels
                .first()
                .ok_or_else(|| Error::from(FloorplanError::NoPanels)),
        }
    }

    /// Connection ports of all symbols, in document order.
    ///
    /// This is the target list for a full-plan routing run.
    pub fn symbol_ports(&self) -> Vec<Point> {
        self.symbols.iter().map(|s| s.port).collect()
    }

    /// Validates document-level invariants before routing.
    ///
    /// Checks that the scale is positive and finite and that every panel
    /// point and symbol port carries finite coordinates. Schema shape is
    /// already enforced by deserialization.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(FloorplanError::InvalidScale { scale: self.scale }.into());
        }
        for panel in &self.panels {
            if !panel.point.is_finite() {
                return Err(FloorplanError::InvalidPanel {
                    id: panel.id.clone(),
                    reason: "point has non-finite coordinates".to_string(),
                }
                .into());
            }
        }
        for symbol in &self.symbols {
            if !symbol.port.is_finite() {
                return Err(FloorplanError::InvalidSymbol {
                    id: symbol.id.clone(),
                    reason: "port has non-finite coordinates".to_string(),
                }
                .into());
            }
            if !symbol.bbox.x.is_finite() || !symbol.bbox.y.is_finite() {
                return Err(FloorplanError::InvalidSymbol {
                    id: symbol.id.clone(),
                    reason: "bbox origin has non-finite coordinates".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
