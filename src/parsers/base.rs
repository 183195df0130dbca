//! Parser trait and the shared token scanner.

use crate::error::Result;
use crate::network::ComparisonNetwork;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for network definition parsers.
pub trait Parser {
    /// Parse the input source string into a ComparisonNetwork.
    fn parse(&self, src: &str) -> Result<ComparisonNetwork>;
}

// ─── Token scanner ───────────────────────────────────────────────────────────

/// A non-blank comparator token and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Iterate comparator tokens in definition order.
///
/// Lines are split on commas; tokens are trimmed and empty ones are skipped.
pub fn tokens(src: &str) -> impl Iterator<Item = Token<'_>> {
    src.lines().enumerate().flat_map(|(i, line)| {
        line.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(move |text| Token { line: i + 1, text })
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
