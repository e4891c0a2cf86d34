//! Provenance-accumulating collection of design values.

use super::{DesignSpecs, Dimensions, FontDescriptor, NodeRef, SpecItem};
use std::collections::HashMap;

/// Insertion-ordered map from a normalized key to its [`SpecItem`].
#[derive(Debug, Clone)]
struct ProvenanceMap<T> {
    items: Vec<SpecItem<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for ProvenanceMap<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> ProvenanceMap<T> {
    fn insert(&mut self, key: String, value: T, node: NodeRef) {
        match self.index.get(&key) {
            Some(&i) => {
                let nodes = &mut self.items[i].nodes;
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(SpecItem::new(value, node));
            }
        }
    }

    fn into_items(self) -> Vec<SpecItem<T>> {
        self.items
    }
}

/// Collects design values node by node, merging identical values.
///
/// ```
/// use figdrift::specs::{DesignSpecsBuilder, NodeRef};
///
/// let mut builder = DesignSpecsBuilder::new();
/// builder.add_color("#FF0000", NodeRef::new("1:1", "Title"));
/// builder.add_color("#ff0000", NodeRef::new("1:2", "Button"));
/// let specs = builder.build(Default::default());
/// assert_eq!(specs.colors.len(), 1);
/// assert_eq!(specs.colors[0].nodes.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DesignSpecsBuilder {
    colors: ProvenanceMap<String>,
    fonts: ProvenanceMap<FontDescriptor>,
    spacing: ProvenanceMap<f64>,
}

impl DesignSpecsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors are keyed case-insensitively; the first spelling seen is kept.
    pub fn add_color(&mut self, hex: &str, node: NodeRef) {
        self.colors.insert(hex.to_lowercase(), hex.to_string(), node);
    }

    pub fn add_font(&mut self, font: FontDescriptor, node: NodeRef) {
        let key = format!("{}-{}-{}", font.family, font.size, font.weight);
        self.fonts.insert(key, font, node);
    }

    pub fn add_spacing(&mut self, value: f64, node: NodeRef) {
        self.spacing.insert(value.to_string(), value, node);
    }

    pub fn build(self, dimensions: Dimensions) -> DesignSpecs {
        DesignSpecs {
            colors: self.colors.into_items(),
            fonts: self.fonts.into_items(),
            spacing: self.spacing.into_items(),
            dimensions,
        }
    }
}
