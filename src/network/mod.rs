//! ComparisonNetwork — an ordered, immutable list of comparators.

pub mod comparator;

pub use comparator::Comparator;

use std::fmt;

/// A sequence of comparators applied in order.
///
/// Construction is the only way to change the comparator list; every consumer
/// (verifier, sequencer, layout) borrows the network immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonNetwork {
    comparators: Vec<Comparator>,
}

impl ComparisonNetwork {
    pub fn new(comparators: Vec<Comparator>) -> Self {
        Self { comparators }
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comparator> {
        self.comparators.iter()
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Largest wire index referenced by any comparator, 0 when empty.
    pub fn max_wire(&self) -> usize {
        self.comparators.iter().map(Comparator::high).max().unwrap_or(0)
    }

    /// Number of wires the network spans (`max_wire() + 1`).
    pub fn wire_count(&self) -> usize {
        self.max_wire() + 1
    }
}

impl FromIterator<Comparator> for ComparisonNetwork {
    fn from_iter<I: IntoIterator<Item = Comparator>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ComparisonNetwork {
    type Item = &'a Comparator;
    type IntoIter = std::slice::Iter<'a, Comparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Comma-joined canonical comparators, e.g. `0:1,1:2,0:1`.
impl fmt::Display for ComparisonNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.comparators.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
