//! Network engine — zero-one verification and value sequencing.

pub mod sequencer;
pub mod verifier;

pub use sequencer::{apply, sort, sorted};
pub use verifier::Verifier;
