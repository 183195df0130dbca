//! Zero-one principle verifier.
//!
//! A comparison network sorts every input of arbitrary comparable values iff it
//! sorts every 0/1 input of the same width. For `n` wires that is `2^n`
//! independent checks, fanned out over rayon's pool. Bit `i` of a candidate
//! sequence is the value on wire `i`.
//!
//! Both entry points short-circuit: rayon stops handing out the remaining
//! sequences once a failure is seen, so nothing keeps running after the call
//! returns.

use rayon::prelude::*;
use tracing::debug;

use crate::config::VerifyConfig;
use crate::error::{NetworkError, Result};
use crate::network::ComparisonNetwork;

/// Exhaustive zero-one checker bound to one network.
pub struct Verifier<'a> {
    network: &'a ComparisonNetwork,
    config: VerifyConfig,
}

impl<'a> Verifier<'a> {
    pub fn new(network: &'a ComparisonNetwork, config: VerifyConfig) -> Self {
        Self { network, config }
    }

    /// True if the network sorts every binary input.
    pub fn is_sorting_network(&self) -> Result<bool> {
        // A single wire is always sorted, whatever the ceiling.
        if self.network.is_empty() {
            return Ok(true);
        }
        let n = self.checked_wires()?;
        let verdict = self.run(|| {
            (0..sequence_count(n))
                .into_par_iter()
                .all(|seq| sorts_binary(self.network, n, seq))
        })?;
        debug!(wires = n, sorted = verdict, "zero-one verification finished");
        Ok(verdict)
    }

    /// The smallest binary input (as a bit pattern) the network fails to sort.
    pub fn find_counterexample(&self) -> Result<Option<u64>> {
        if self.network.is_empty() {
            return Ok(None);
        }
        let n = self.checked_wires()?;
        let found = self.run(|| {
            (0..sequence_count(n))
                .into_par_iter()
                .find_first(|&seq| !sorts_binary(self.network, n, seq))
        })?;
        debug!(wires = n, counterexample = ?found, "counterexample search finished");
        Ok(found)
    }

    fn checked_wires(&self) -> Result<usize> {
        let wires = self.network.wire_count();
        let limit = self.config.wire_ceiling();
        if wires > limit {
            return Err(NetworkError::TooManyWires { wires, limit });
        }
        debug!(
            wires,
            sequences = sequence_count(wires),
            comparators = self.network.len(),
            "starting zero-one verification"
        );
        Ok(wires)
    }

    /// Run `op` on a dedicated pool when `threads` is set, else on the global pool.
    fn run<R, F>(&self, op: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }
}

fn sequence_count(wires: usize) -> u64 {
    1u64 << wires
}

/// The sorted form of any `wires`-bit input with `ones` set bits: all ones on
/// the highest wires.
pub fn expected_sorted(wires: usize, ones: usize) -> u64 {
    ((1u64 << ones) - 1) << (wires - ones)
}

/// Apply every comparator to a bit-packed 0/1 input. All wires must be below 64.
pub fn sort_binary(network: &ComparisonNetwork, seq: u64) -> u64 {
    network.iter().fold(seq, |acc, c| {
        let lo = (acc >> c.low()) & 1;
        let hi = (acc >> c.high()) & 1;
        if lo > hi {
            acc ^ ((1u64 << c.low()) | (1u64 << c.high()))
        } else {
            acc
        }
    })
}

fn sorts_binary(network: &ComparisonNetwork, wires: usize, seq: u64) -> bool {
    sort_binary(network, seq) == expected_sorted(wires, seq.count_ones() as usize)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
