//! Apply a network to a slice of arbitrary values.

use crate::error::{NetworkError, Result};
use crate::network::ComparisonNetwork;

/// Run every comparator over `values` in place.
///
/// For each comparator `(low, high)` the two slots are swapped iff
/// `less_than(values[high], values[low])`. With a strict predicate, equal
/// values never swap.
///
/// The slice must cover every wire the network touches; otherwise
/// `IndexOutOfRange` is returned and `values` is left untouched.
pub fn apply<T, F>(network: &ComparisonNetwork, values: &mut [T], mut less_than: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some(wire) = network.iter().map(|c| c.high()).max()
        && wire >= values.len()
    {
        return Err(NetworkError::IndexOutOfRange {
            wire,
            len: values.len(),
        });
    }
    for c in network {
        if less_than(&values[c.high()], &values[c.low()]) {
            values.swap(c.low(), c.high());
        }
    }
    Ok(())
}

/// `apply` with the natural ordering of `T`.
pub fn sort<T: Ord>(network: &ComparisonNetwork, values: &mut [T]) -> Result<()> {
    apply(network, values, |a, b| a < b)
}

/// Sort a copy of `values`, leaving the input as it was.
pub fn sorted<T: Ord + Clone>(network: &ComparisonNetwork, values: &[T]) -> Result<Vec<T>> {
    let mut out = values.to_vec();
    sort(network, &mut out)?;
    Ok(out)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
