//! WASM bindings for sorting-network.
//!
//! Exposes checking, sorting and SVG rendering to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::engine::{Verifier, apply};
use crate::{VerifyConfig, parse_network, render_svg};

/// Check whether a network definition is a sorting network.
#[wasm_bindgen]
pub fn check(src: &str) -> Result<bool, JsError> {
    let network = parse_network(src)?;
    Ok(Verifier::new(&network, VerifyConfig::default()).is_sorting_network()?)
}

/// Apply a network definition to a list of numbers.
#[wasm_bindgen(js_name = "sortValues")]
pub fn sort_values(src: &str, values: Vec<f64>) -> Result<Vec<f64>, JsError> {
    let network = parse_network(src)?;
    let mut values = values;
    apply(&network, &mut values, |a, b| a < b)?;
    Ok(values)
}

/// Render a network definition as an SVG document.
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg_js(src: &str) -> Result<String, JsError> {
    Ok(render_svg(&parse_network(src)?))
}

/// Canonical comparator text for a network definition.
#[wasm_bindgen]
pub fn normalize(src: &str) -> Result<String, JsError> {
    Ok(parse_network(src)?.to_string())
}
