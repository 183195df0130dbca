//! Layout types: Placement, Layout.

use crate::network::Comparator;

// ─── Placement ───────────────────────────────────────────────────────────────

/// Where one comparator is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub comparator: Comparator,
    /// Timestep index; comparators in one column touch disjoint wires.
    pub column: usize,
    /// Horizontal pixel position, including any sub-column nudge.
    pub x: i64,
}

impl Placement {
    pub fn new(comparator: Comparator, column: usize, x: i64) -> Self {
        Self {
            comparator,
            column,
            x,
        }
    }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// Final layout output consumed by renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// One entry per comparator, in network order.
    pub placements: Vec<Placement>,
    pub wire_count: usize,
    pub width: i64,
    pub height: i64,
    /// Render scale the layout was computed at; renderers size glyphs by it.
    pub scale: i64,
    pub y_scale: i64,
}

impl Layout {
    /// Vertical pixel position of a wire line.
    pub fn wire_y(&self, wire: usize) -> i64 {
        self.y_scale + wire as i64 * self.y_scale
    }

    /// Number of distinct columns used.
    pub fn column_count(&self) -> usize {
        self.placements.last().map_or(0, |p| p.column + 1)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
