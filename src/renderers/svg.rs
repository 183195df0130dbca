//! SVG renderer — converts a network layout to an SVG document.
//!
//! Wires are horizontal lines, one per wire index, top to bottom. Each
//! comparator is a vertical line between two filled circles on the wires it
//! connects.

use super::Renderer;
use crate::layout::types::{Layout, Placement};

// ── Constants ────────────────────────────────────────────────────────────────

/// Endpoint radius and stroke width at scale 1; both grow with the layout scale.
const ENDPOINT_RADIUS: i64 = 3;
const STROKE_WIDTH: i64 = 1;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn line(x1: i64, y1: i64, x2: i64, y2: i64, scale: i64) -> String {
    let sw = STROKE_WIDTH * scale;
    format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" style="stroke:black;stroke-width:{sw}"/>"#)
}

fn endpoint(cx: i64, cy: i64, scale: i64) -> String {
    let r = ENDPOINT_RADIUS * scale;
    let sw = STROKE_WIDTH * scale;
    format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" style="stroke:black;stroke-width:{sw};fill:black"/>"#)
}

fn render_comparator(layout: &Layout, p: &Placement) -> String {
    let y0 = layout.wire_y(p.comparator.low());
    let y1 = layout.wire_y(p.comparator.high());
    let s = layout.scale;
    [endpoint(p.x, y0, s), line(p.x, y0, p.x, y1, s), endpoint(p.x, y1, s)].join("\n")
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Renders a network layout as a standalone SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, layout: &Layout) -> String {
        let (w, h) = (layout.width, layout.height);
        let mut parts = vec![
            r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}px" height="{h}px" viewBox="0 0 {w} {h}">"#
            ),
            r#"<rect width="100%" height="100%" fill="white"/>"#.to_string(),
        ];

        for p in &layout.placements {
            parts.push(render_comparator(layout, p));
        }

        for wire in 0..layout.wire_count {
            let y = layout.wire_y(wire);
            parts.push(line(0, y, w, y, layout.scale));
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
