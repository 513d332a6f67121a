//! SVG writer for circuit previews.
//!
//! The output is deterministic: circuits in input order, then symbols in
//! input order, so identical input renders to byte-identical markup.

use serde::{Deserialize, Serialize};
use tracing::debug;

use wirekit_core::Symbol;
use wirekit_router::Circuit;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 800;

/// Smallest rendered symbol extent; prevents degenerate invisible rects.
const MIN_SYMBOL_EXTENT: f64 = 4.0;
/// Footprint used when a symbol's bbox carries no extent.
const DEFAULT_SYMBOL_EXTENT: f64 = 12.0;

const CIRCUIT_STROKE: &str = "#ff6600";
const CIRCUIT_STROKE_WIDTH: u32 = 2;
const SYMBOL_FILL: &str = "#556B2F";
const SYMBOL_OPACITY: &str = "0.7";
const LABEL_FILL: &str = "#111";
const LABEL_FONT_SIZE: u32 = 10;
const LABEL_OFFSET_X: f64 = 4.0;
const LABEL_OFFSET_Y: f64 = 12.0;

/// The renderable aggregate: routed circuits plus the symbols they serve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Markup {
    #[serde(default)]
    pub circuits: Vec<Circuit>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

impl Markup {
    /// Creates a markup aggregate from routing output and the symbol list.
    pub fn new(circuits: Vec<Circuit>, symbols: Vec<Symbol>) -> Self {
        Self { circuits, symbols }
    }

    /// Renders at the default 1200x800 canvas.
    pub fn to_svg(&self) -> String {
        render(self, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Escape the XML special characters for safe embedding in text content.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Serializes circuits and symbols to SVG markup.
///
/// Emits a fixed-size canvas with a white background, a polyline per
/// circuit, and a filled rectangle plus label per symbol. Pure function of
/// its input.
pub fn render(markup: &Markup, width: u32, height: u32) -> String {
    let mut lines = Vec::with_capacity(3 + markup.circuits.len() + markup.symbols.len() * 2);
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        width, height
    ));
    lines.push(r#"<rect x="0" y="0" width="100%" height="100%" fill="white"/>"#.to_string());

    for circuit in &markup.circuits {
        let points = circuit
            .path
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!(
            r#"<polyline points="{}" stroke="{}" fill="none" stroke-width="{}"/>"#,
            points, CIRCUIT_STROKE, CIRCUIT_STROKE_WIDTH
        ));
    }

    for symbol in &markup.symbols {
        let x = symbol.bbox.x;
        let y = symbol.bbox.y;
        let w = symbol.bbox.w.unwrap_or(DEFAULT_SYMBOL_EXTENT).max(MIN_SYMBOL_EXTENT);
        let h = symbol.bbox.h.unwrap_or(DEFAULT_SYMBOL_EXTENT).max(MIN_SYMBOL_EXTENT);
        lines.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="{}"/>"#,
            x, y, w, h, SYMBOL_FILL, SYMBOL_OPACITY
        ));
        lines.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            x + w + LABEL_OFFSET_X,
            y + LABEL_OFFSET_Y,
            LABEL_FONT_SIZE,
            LABEL_FILL,
            xml_escape(&symbol.label)
        ));
    }

    lines.push("</svg>".to_string());

    debug!(
        circuits = markup.circuits.len(),
        symbols = markup.symbols.len(),
        width,
        height,
        "rendered markup"
    );
    lines.join("\n")
}
