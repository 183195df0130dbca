//! Network definition parsers.

pub mod base;
pub mod text;

pub use base::Parser;
pub use text::TextParser;

use crate::config::NetworkConfig;
use crate::error::Result;
use crate::network::ComparisonNetwork;

/// Parse a network definition with the default wire bound.
pub fn parse(src: &str) -> Result<ComparisonNetwork> {
    TextParser::default().parse(src)
}

/// Parse a network definition with a custom config.
pub fn parse_with_config(src: &str, config: &NetworkConfig) -> Result<ComparisonNetwork> {
    TextParser::new(config.clone()).parse(src)
}
