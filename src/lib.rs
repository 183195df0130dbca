//! sorting-network — comparison network checker, sorter and SVG renderer.
//!
//! A network is written as comma separated `low:high` comparators, any number
//! per line. Once parsed it can be checked with the zero-one principle,
//! applied to a slice of values, or drawn as SVG.
//!
//! ```
//! let network = sorting_network::parse_network("0:1,1:2,0:1").unwrap();
//! assert!(sorting_network::is_sorting_network(&network).unwrap());
//!
//! let mut values = [3, 1, 2];
//! sorting_network::apply(&network, &mut values, |a, b| a < b).unwrap();
//! assert_eq!(values, [1, 2, 3]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod network;
pub mod parsers;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::config::{NetworkConfig, RenderConfig, VerifyConfig};
pub use crate::engine::Verifier;
pub use crate::error::{NetworkError, Result};
pub use crate::network::{Comparator, ComparisonNetwork};

use crate::renderers::{Renderer, SvgRenderer};

/// Parse a network definition.
pub fn parse_network(src: &str) -> Result<ComparisonNetwork> {
    parsers::parse(src)
}

/// Check a network with the zero-one principle using the default config.
///
/// Fails only if the network is wider than the default verification ceiling.
pub fn is_sorting_network(network: &ComparisonNetwork) -> Result<bool> {
    Verifier::new(network, VerifyConfig::default()).is_sorting_network()
}

/// Apply a network to `values` in place, see [`engine::apply`].
pub fn apply<T, F>(network: &ComparisonNetwork, values: &mut [T], less_than: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    engine::apply(network, values, less_than)
}

/// Render a network as an SVG document at the default scale.
pub fn render_svg(network: &ComparisonNetwork) -> String {
    render_svg_with_config(network, &RenderConfig::default())
}

/// Render a network as an SVG document with a custom config.
pub fn render_svg_with_config(network: &ComparisonNetwork, config: &RenderConfig) -> String {
    let layout = layout::layout_with_config(network, config);
    SvgRenderer::new().render(&layout)
}
