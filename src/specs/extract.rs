//! Extraction of [`DesignSpecs`] from a parsed design node tree.

use super::{DesignSpecs, DesignSpecsBuilder, Dimensions, FontDescriptor, NodeRef};
use crate::color::rgba_to_hex;
use serde::Deserialize;

/// Font weight assumed when a text style omits it.
pub const DEFAULT_FONT_WEIGHT: u32 = 400;

/// A design-tool node as exported in the file JSON (only the fields we read).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fills: Vec<Paint>,
    pub style: Option<TypeStyle>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub item_spacing: Option<f64>,
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    pub color: Option<PaintColor>,
}

fn visible_by_default() -> bool {
    true
}

/// Channels as unit floats.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<u32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Walk `root` depth-first (pre-order) and collect its colors, fonts and spacing.
pub fn extract_design_specs(root: &DesignNode) -> DesignSpecs {
    let mut builder = DesignSpecsBuilder::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        visit(node, &mut builder);
        stack.extend(node.children.iter().rev());
    }

    let dimensions = root
        .absolute_bounding_box
        .map(|bb| Dimensions {
            width: bb.width,
            height: bb.height,
        })
        .unwrap_or_default();

    builder.build(dimensions)
}

fn visit(node: &DesignNode, builder: &mut DesignSpecsBuilder) {
    let here = || NodeRef::new(node.id.clone(), node.name.clone());

    for fill in node.fills.iter().filter(|f| f.visible && f.kind == "SOLID") {
        if let Some(c) = fill.color {
            builder.add_color(&rgba_to_hex(c.r, c.g, c.b), here());
        }
    }

    if let Some(TypeStyle {
        font_family: Some(family),
        font_size: Some(size),
        font_weight,
    }) = &node.style
    {
        let font = FontDescriptor::new(family.clone(), *size, font_weight.unwrap_or(DEFAULT_FONT_WEIGHT));
        builder.add_font(font, here());
    }

    let spacing = [
        node.padding_left,
        node.padding_right,
        node.padding_top,
        node.padding_bottom,
        node.item_spacing,
    ];
    for value in spacing.into_iter().flatten() {
        builder.add_spacing(value, here());
    }
}
