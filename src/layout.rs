//! Flex-style positioning of card fragments
//!
//! Places items one after another along a row or column by wrapping each in a
//! translated `<g>`. Item extents are not measured: callers pass known sizes,
//! and items without a size advance by the gap alone.

use crate::renderer::{Element, Node};

/// Axis along which items are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

/// Sequential layout of fragments with a fixed gap
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlexLayout {
    /// Space added after every item
    pub gap: f64,
    pub direction: FlexDirection,
    /// Extent of each placed item along the layout axis
    pub sizes: Vec<f64>,
}

impl FlexLayout {
    /// Lay items out left to right
    pub fn row(gap: f64) -> Self {
        Self {
            gap,
            direction: FlexDirection::Row,
            sizes: vec![],
        }
    }

    /// Lay items out top to bottom
    pub fn column(gap: f64) -> Self {
        Self {
            gap,
            direction: FlexDirection::Column,
            sizes: vec![],
        }
    }

    /// Set the item extents
    pub fn with_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Wrap each present item in a translated group.
    ///
    /// `None` items are skipped and do not consume a size slot.
    pub fn arrange<N: Into<Node>>(&self, items: impl IntoIterator<Item = Option<N>>) -> Vec<Element> {
        let mut offset = 0.0;
        items
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, item)| {
                let transform = match self.direction {
                    FlexDirection::Row => format!("translate({}, 0)", offset),
                    FlexDirection::Column => format!("translate(0, {})", offset),
                };
                offset += self.sizes.get(index).copied().unwrap_or(0.0) + self.gap;
                Element::new("g").attr("transform", transform).child(item)
            })
            .collect()
    }
}
