//! Configuration for parsing, verification and rendering.
//!
//! All three are plain value types with sensible defaults; the CLI fills them
//! from flags.

use crate::error::{NetworkError, Result};

/// Largest accepted render scale.
pub const MAX_RENDER_SCALE: u32 = 64;

/// Largest wire count the bit-packed verifier can represent (`u64` sequences).
pub const VERIFY_WIRE_LIMIT: usize = 63;

/// Bounds applied while building a network from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Wire indices must be strictly below this value.
    pub max_wires: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { max_wires: 1 << 16 }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Configuration for the zero-one verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Refuse to enumerate networks wider than this. Clamped to [`VERIFY_WIRE_LIMIT`].
    pub max_wires: usize,
    /// Run on a dedicated pool with this many threads. None = rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_wires: 24,
            threads: None,
        }
    }
}

impl VerifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ceiling actually enforced.
    pub fn wire_ceiling(&self) -> usize {
        self.max_wires.min(VERIFY_WIRE_LIMIT)
    }
}

/// Configuration for the layout and SVG renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Multiplier applied to spacing (35px columns, 20px wires) and glyph size.
    /// Always in `1..=MAX_RENDER_SCALE`.
    scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with the given scale; 0 and values above [`MAX_RENDER_SCALE`] are rejected.
    pub fn with_scale(scale: u32) -> Result<Self> {
        if scale == 0 || scale > MAX_RENDER_SCALE {
            return Err(NetworkError::InvalidScale {
                scale,
                max: MAX_RENDER_SCALE,
            });
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn x_scale(&self) -> i64 {
        35 * i64::from(self.scale)
    }

    pub fn y_scale(&self) -> i64 {
        20 * i64::from(self.scale)
    }
}
