//! Taffy Bridge - measuring flexbox subtrees as single children
//!
//! A widget can describe its insides as a taffy tree (a chip is a bordered
//! row of swatch, spacer and label) and still appear to the grid as one
//! measurable child. The bridge:
//!
//! 1. Converts [`Constraints`] into taffy available space
//! 2. Runs taffy with a text measure function for label leaves
//! 3. Coerces the root size back into the constraints
//! 4. Resolves absolute cell positions for painting and baselines

use taffy::{AvailableSpace, Layout, NodeId, Size, Style, TaffyTree};

use crate::error::Result;
use crate::types::Constraints;

use super::text_measure::{char_width, measure_text_height, string_width};

// =============================================================================
// CONSTRAINT CONVERSION
// =============================================================================

fn to_available(max: u32) -> AvailableSpace {
    if max == Constraints::INFINITY {
        AvailableSpace::MaxContent
    } else {
        AvailableSpace::Definite(max as f32)
    }
}

/// Available space for a root measured against `constraints`.
pub fn available_space(constraints: Constraints) -> Size<AvailableSpace> {
    Size {
        width: to_available(constraints.max_width()),
        height: to_available(constraints.max_height()),
    }
}

fn to_cells(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Measure function for a text leaf.
pub fn measure_text(
    text: &str,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    if text.is_empty() {
        return Size {
            width: known_dimensions.width.unwrap_or(0.0),
            height: known_dimensions.height.unwrap_or(0.0),
        };
    }

    let text_width = string_width(text);
    let wrap_width = match (known_dimensions.width, available_space.width) {
        (Some(w), _) => to_cells(w).max(1),
        (None, AvailableSpace::Definite(w)) => to_cells(w).clamp(1, text_width.max(1)),
        (None, AvailableSpace::MinContent) => {
            text.chars().map(char_width).max().unwrap_or(1).max(1)
        }
        (None, AvailableSpace::MaxContent) => text_width.max(1),
    };

    let height = measure_text_height(text, wrap_width);
    Size {
        width: known_dimensions.width.unwrap_or(text_width.min(wrap_width) as f32),
        height: known_dimensions.height.unwrap_or(height as f32),
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Lay out the subtree under `root` and return its size coerced into
/// `constraints`.
pub fn measure_tree<T, F>(
    tree: &mut TaffyTree<T>,
    root: NodeId,
    constraints: Constraints,
    measure: F,
) -> Result<(u32, u32)>
where
    F: FnMut(Size<Option<f32>>, Size<AvailableSpace>, NodeId, Option<&mut T>, &Style) -> Size<f32>,
{
    tree.compute_layout_with_measure(root, available_space(constraints), measure)?;

    let size = tree.layout(root)?.size;
    let width = constraints.constrain_width(to_cells(size.width));
    let height = constraints.constrain_height(to_cells(size.height));
    Ok((width, height))
}

/// A node's computed layout, in whole cells, relative to the subtree root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteNode {
    pub node: NodeId,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Visit `root` and every descendant, parents before children.
pub fn visit_absolute<T>(
    tree: &TaffyTree<T>,
    root: NodeId,
    visit: &mut impl FnMut(&AbsoluteNode),
) -> Result<()> {
    visit_from(tree, root, 0.0, 0.0, visit)
}

fn visit_from<T>(
    tree: &TaffyTree<T>,
    node: NodeId,
    parent_x: f32,
    parent_y: f32,
    visit: &mut impl FnMut(&AbsoluteNode),
) -> Result<()> {
    let layout: &Layout = tree.layout(node)?;
    let x = parent_x + layout.location.x;
    let y = parent_y + layout.location.y;

    visit(&AbsoluteNode {
        node,
        x: x.round() as i32,
        y: y.round() as i32,
        width: to_cells(layout.size.width),
        height: to_cells(layout.size.height),
    });

    for child in tree.children(node)? {
        visit_from(tree, child, x, y, visit)?;
    }
    Ok(())
}
