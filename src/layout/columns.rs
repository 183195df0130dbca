//! Greedy column assignment.
//!
//! Comparators are assigned to columns left to right in network order. A
//! column stays open until a comparator arrives that touches one of its wires.
//! Inside a column, a comparator whose span crosses or nests with an already
//! placed one is nudged right by a third of a column so the vertical
//! connectors don't draw over each other.

use crate::config::RenderConfig;
use crate::network::{Comparator, ComparisonNetwork};

use super::types::{Layout, Placement};

/// The column currently being filled: `(comparator, x)` in insertion order.
#[derive(Default)]
struct Group {
    members: Vec<(Comparator, i64)>,
}

impl Group {
    fn conflicts(&self, c: &Comparator) -> bool {
        self.members.iter().any(|(other, _)| c.shares_wire(other))
    }

    fn rightmost(&self) -> Option<i64> {
        self.members.iter().map(|&(_, x)| x).max()
    }

    /// First position at or after `start` clear of every overlapping member.
    fn slot(&self, c: &Comparator, start: i64, nudge: i64) -> i64 {
        let mut x = start;
        for (other, other_x) in &self.members {
            if *other_x >= x && c.overlaps(other) {
                x = other_x + nudge;
            }
        }
        x
    }
}

pub struct ColumnLayout;

impl ColumnLayout {
    pub fn layout(network: &ComparisonNetwork, config: &RenderConfig) -> Layout {
        let x_scale = config.x_scale();
        let y_scale = config.y_scale();
        let nudge = x_scale / 3;

        let mut placements = Vec::with_capacity(network.len());
        let mut group = Group::default();
        let mut column = 0;
        let mut x = x_scale;

        for c in network {
            if group.conflicts(c) {
                x = x.max(group.rightmost().unwrap_or(x)) + x_scale;
                column += 1;
                group = Group::default();
            }
            let cx = group.slot(c, x, nudge);
            group.members.push((*c, cx));
            placements.push(Placement::new(*c, column, cx));
        }

        let width = x.max(group.rightmost().unwrap_or(x)) + x_scale;
        let wire_count = network.wire_count();
        Layout {
            placements,
            wire_count,
            width,
            height: (wire_count as i64 + 1) * y_scale,
            scale: i64::from(config.scale()),
            y_scale,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
