//! Layout engine — convenience API for laying out a network.

pub mod columns;
pub mod types;

pub use columns::ColumnLayout;
pub use types::{Layout, Placement};

use tracing::debug;

use crate::config::RenderConfig;
use crate::network::ComparisonNetwork;

/// Lay out a network with the default scale.
pub fn layout(network: &ComparisonNetwork) -> Layout {
    layout_with_config(network, &RenderConfig::default())
}

/// Lay out a network with a custom config.
pub fn layout_with_config(network: &ComparisonNetwork, config: &RenderConfig) -> Layout {
    let result = ColumnLayout::layout(network, config);
    debug!(
        comparators = result.placements.len(),
        columns = result.column_count(),
        width = result.width,
        height = result.height,
        "layout finished"
    );
    result
}
