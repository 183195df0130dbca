//! Error types shared by the parser, verifier and sequencer.

use thiserror::Error;

/// Result type for comparison-network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors that can occur while building or running a comparison network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid comparator: {token}")]
    MalformedComparator { token: String },

    #[error("comparator inputs cannot be the same: {wire}:{wire}")]
    EqualInputs { wire: usize },

    #[error("wire {wire} exceeds the supported wire count of {max_wires}")]
    WireLimit { wire: usize, max_wires: usize },

    #[error("comparator references wire {wire} but the sequence has only {len} values")]
    IndexOutOfRange { wire: usize, len: usize },

    #[error("network has {wires} wires; exhaustive verification is limited to {limit}")]
    TooManyWires { wires: usize, limit: usize },

    #[error("render scale {scale} is out of range (1..={max})")]
    InvalidScale { scale: u32, max: u32 },

    #[error("failed to build verification thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl NetworkError {
    pub fn malformed(token: impl Into<String>) -> Self {
        Self::MalformedComparator {
            token: token.into(),
        }
    }
}
