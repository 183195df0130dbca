//! Parser for the comma/line separated `low:high` text format.

use tracing::trace;

use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::network::{Comparator, ComparisonNetwork};

use super::base::{Parser, tokens};

/// Parses `0:1,2:3` style definitions, one or more comparators per line.
#[derive(Debug, Clone, Default)]
pub struct TextParser {
    pub config: NetworkConfig,
}

impl TextParser {
    pub fn new(config: NetworkConfig) -> Self {
        Self { config }
    }
}

impl Parser for TextParser {
    fn parse(&self, src: &str) -> Result<ComparisonNetwork> {
        let mut comparators = Vec::new();
        for token in tokens(src) {
            let c: Comparator = token.text.parse()?;
            if c.high() >= self.config.max_wires {
                return Err(NetworkError::WireLimit {
                    wire: c.high(),
                    max_wires: self.config.max_wires,
                });
            }
            trace!(line = token.line, comparator = %c, "parsed comparator");
            comparators.push(c);
        }
        Ok(ComparisonNetwork::new(comparators))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
