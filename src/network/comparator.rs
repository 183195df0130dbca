//! Comparator — a single compare-and-swap between two wires.

use std::fmt;
use std::str::FromStr;

use crate::error::{NetworkError, Result};

/// A compare-and-swap on two distinct wires, stored with `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Comparator {
    low: usize,
    high: usize,
}

impl Comparator {
    /// Build a comparator from two wire indices in either order.
    pub fn new(a: usize, b: usize) -> Result<Self> {
        if a == b {
            return Err(NetworkError::EqualInputs { wire: a });
        }
        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    /// True if both comparators touch at least one common wire.
    pub fn shares_wire(&self, other: &Comparator) -> bool {
        self.low == other.low
            || self.low == other.high
            || self.high == other.low
            || self.high == other.high
    }

    /// True if either span has an endpoint strictly inside the other's span.
    ///
    /// Touching at an endpoint is not an overlap; `shares_wire` covers that.
    pub fn overlaps(&self, other: &Comparator) -> bool {
        let inside = |wire: usize, c: &Comparator| c.low < wire && wire < c.high;
        inside(other.low, self)
            || inside(other.high, self)
            || inside(self.low, other)
            || inside(self.high, other)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.low, self.high)
    }
}

impl FromStr for Comparator {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = s.split_once(':').ok_or_else(|| NetworkError::malformed(s))?;
        let a: usize = a.trim().parse().map_err(|_| NetworkError::malformed(s))?;
        let b: usize = b.trim().parse().map_err(|_| NetworkError::malformed(s))?;
        Comparator::new(a, b)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
