//! Renderer trait and implementations.

pub mod svg;

pub use svg::SvgRenderer;

use crate::layout::types::Layout;

/// Trait for network renderers.
pub trait Renderer {
    /// Render a laid-out network to a string.
    fn render(&self, layout: &Layout) -> String;
}
