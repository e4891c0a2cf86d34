//! Structural spec model and the tolerance-aware spec comparator.
//!
//! Design values carry provenance (which design nodes declared them); live
//! values are flat sets captured from the rendered page. Matching is set
//! membership only: a design value is satisfied by any close-enough live value,
//! regardless of where on the page it appears.

pub mod builder;
pub mod compare;
pub mod extract;

pub use builder::DesignSpecsBuilder;
pub use compare::compare_specs;
pub use extract::{extract_design_specs, DesignNode};

use crate::color::css_color_to_hex;
use serde::{Deserialize, Serialize};

/// Maximum Euclidean RGB distance that still counts as the same color (inclusive).
pub const COLOR_TOLERANCE: f64 = 15.0;
/// Font sizes must differ by strictly less than this many px.
pub const FONT_SIZE_TOLERANCE: f64 = 2.0;
/// Spacing values may differ by up to and including this many px.
pub const SPACING_TOLERANCE: f64 = 2.0;

/// A design node that declared a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRef {
    pub node_id: String,
    pub node_name: String,
}

impl NodeRef {
    pub fn new(node_id: impl Into<String>, node_name: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            node_name: node_name.into(),
        }
    }
}

/// A deduplicated design value and every node that declared it, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecItem<T> {
    pub value: T,
    pub nodes: Vec<NodeRef>,
}

impl<T> SpecItem<T> {
    pub fn new(value: T, node: NodeRef) -> Self {
        Self {
            value,
            nodes: vec![node],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    /// CSS px
    pub size: f64,
    /// Numeric weight, e.g. 400 or 700
    pub weight: u32,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f64, weight: u32) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Values declared by a design frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSpecs {
    #[serde(default)]
    pub colors: Vec<SpecItem<String>>,
    #[serde(default)]
    pub fonts: Vec<SpecItem<FontDescriptor>>,
    #[serde(default)]
    pub spacing: Vec<SpecItem<f64>>,
    #[serde(default)]
    pub dimensions: Dimensions,
}

/// Values observed on the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveSpecs {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub fonts: Vec<FontDescriptor>,
    #[serde(default)]
    pub spacing: Vec<f64>,
    #[serde(default)]
    pub dimensions: Dimensions,
}

impl LiveSpecs {
    /// Rewrite computed-style colors such as `rgb(0, 0, 0)` to `#rrggbb`.
    ///
    /// Values that are not recognisable colors are kept verbatim.
    pub fn normalized(mut self) -> Self {
        for color in &mut self.colors {
            if let Some(hex) = css_color_to_hex(color) {
                *color = hex;
            }
        }
        self
    }
}

/// Design items with no acceptable live counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDiffResult {
    pub color_drift: Vec<SpecItem<String>>,
    pub font_drift: Vec<SpecItem<FontDescriptor>>,
    pub spacing_drift: Vec<SpecItem<f64>>,
    pub has_drift: bool,
}
