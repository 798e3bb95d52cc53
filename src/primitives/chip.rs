//! Chip Primitive - a bordered label with a colour swatch.
//!
//! Built as a small taffy tree and measured through the taffy bridge:
//!
//! ```text
//! margin ─ card (border, padding, row) ─┬─ swatch
//!                                       ├─ spacer
//!                                       └─ label
//! ```
//!
//! The label is wrapped against the space left inside the chip's chrome and
//! handed to taffy as a fixed-size leaf, so the card is exactly as wide as
//! its contents. The chip's first baseline is the bottom of its label's
//! first line.

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId, Rect,
    Size, Style, TaffyTree,
};

use crate::error::Result;
use crate::layout::{
    AbsoluteNode, Measurable, MeasuredChild, measure_text, measure_tree, visit_absolute, wrap_text,
};
use crate::renderer::{FrameBuffer, Paint};
use crate::types::{Attr, Cell, Constraints, Density, Dp};

use super::text::LINE_BASELINE;

/// Spacing of a chip, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyle {
    /// Space left and right of the card.
    pub margin_x: u32,
    /// Space above and below the card.
    pub margin_y: u32,
    /// Space between the border and the content, left and right.
    pub padding_x: u32,
    pub swatch_width: u32,
    pub spacer_width: u32,
}

/// Width of the card border on each side.
const BORDER: u32 = 1;

impl ChipStyle {
    /// Horizontal cells taken by everything except the label.
    pub fn chrome_width(&self) -> u32 {
        2 * self.margin_x + 2 * BORDER + 2 * self.padding_x + self.swatch_width + self.spacer_width
    }

    /// Resolve the outer padding from a density-independent distance.
    pub fn with_margin(density: Density, margin: Dp) -> Self {
        let margin_x = density.round_to_px(margin).max(0) as u32;
        Self {
            margin_x,
            ..Self::default()
        }
    }
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self {
            margin_x: 1,
            margin_y: 0,
            padding_x: 1,
            swatch_width: 1,
            spacer_width: 1,
        }
    }
}

/// What a node inside the chip's tree draws.
#[derive(Debug, Clone, PartialEq)]
enum Part {
    Card,
    Swatch,
    Label(String),
}

/// A topic chip.
pub struct Chip {
    label: String,
    style: ChipStyle,
    tree: TaffyTree<Part>,
    root: NodeId,
    text: NodeId,
}

impl Chip {
    pub fn new(label: impl Into<String>, style: ChipStyle) -> Result<Self> {
        let label = label.into();
        let mut tree: TaffyTree<Part> = TaffyTree::new();

        let cells = |n: u32| LengthPercentage::Length(n as f32);
        let swatch = tree.new_leaf_with_context(fixed(style.swatch_width, 1), Part::Swatch)?;
        let spacer = tree.new_leaf(fixed(style.spacer_width, 1))?;
        // Sized on every measure
        let text = tree.new_leaf_with_context(fixed(0, 0), Part::Label(label.clone()))?;

        let card = tree.new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                align_items: Some(AlignItems::Center),
                flex_shrink: 0.0,
                border: Rect {
                    left: cells(BORDER),
                    right: cells(BORDER),
                    top: cells(BORDER),
                    bottom: cells(BORDER),
                },
                padding: Rect {
                    left: cells(style.padding_x),
                    right: cells(style.padding_x),
                    top: cells(0),
                    bottom: cells(0),
                },
                ..Default::default()
            },
            &[swatch, spacer, text],
        )?;
        tree.set_node_context(card, Some(Part::Card))?;

        let root = tree.new_with_children(
            Style {
                display: Display::Flex,
                padding: Rect {
                    left: cells(style.margin_x),
                    right: cells(style.margin_x),
                    top: cells(style.margin_y),
                    bottom: cells(style.margin_y),
                },
                ..Default::default()
            },
            &[card],
        )?;

        Ok(Self {
            label,
            style,
            tree,
            root,
            text,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for Chip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chip").field("label", &self.label).finish()
    }
}

fn fixed(width: u32, height: u32) -> Style {
    Style {
        size: Size {
            width: Dimension::Length(width as f32),
            height: Dimension::Length(height as f32),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

impl Measurable for Chip {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        let room = if constraints.has_bounded_width() {
            let room = constraints.max_width().saturating_sub(self.style.chrome_width());
            AvailableSpace::Definite(room.max(1) as f32)
        } else {
            AvailableSpace::MaxContent
        };
        let label = measure_text(
            &self.label,
            Size {
                width: None,
                height: None,
            },
            Size {
                width: room,
                height: AvailableSpace::MaxContent,
            },
        );
        self.tree.set_style(self.text, fixed(label.width as u32, label.height as u32))?;

        // Every leaf has a fixed size by now
        let (width, height) = measure_tree(
            &mut self.tree,
            self.root,
            constraints,
            |known, _available, _node, _part, _style| Size {
                width: known.width.unwrap_or(0.0),
                height: known.height.unwrap_or(0.0),
            },
        )?;

        let (tree, text) = (&self.tree, self.text);
        let mut label_top = None;
        visit_absolute(tree, self.root, &mut |node: &AbsoluteNode| {
            if node.node == text {
                label_top = Some(node.y);
            }
        })?;

        let mut size = MeasuredChild::new(width, height);
        size.first_baseline = label_top
            .and_then(|top| u32::try_from(top).ok())
            .filter(|_| !self.label.is_empty())
            .map(|top| top + LINE_BASELINE);
        Ok(size)
    }
}

impl Paint for Chip {
    fn paint(&self, buffer: &mut FrameBuffer, x: i32, y: i32) {
        let tree = &self.tree;
        let result = visit_absolute(tree, self.root, &mut |node: &AbsoluteNode| {
            let (nx, ny) = (x + node.x, y + node.y);
            match tree.get_node_context(node.node) {
                Some(Part::Card) => {
                    buffer.draw_border(nx, ny, node.width, node.height, Attr::DIM)
                }
                Some(Part::Swatch) => {
                    let swatch = Cell::new(' ', Attr::INVERSE);
                    buffer.fill(nx, ny, node.width, node.height, swatch)
                }
                Some(Part::Label(text)) => {
                    let lines = wrap_text(text, node.width.max(1));
                    for (i, line) in lines.iter().take(node.height as usize).enumerate() {
                        buffer.draw_text(nx, ny + i as i32, line, Attr::NONE);
                    }
                }
                None => {}
            }
        });
        if let Err(err) = result {
            tracing::debug!(label = %self.label, %err, "chip painted before layout");
        }
    }
}

/// Topics shown by the demo.
pub const TOPICS: [&str; 19] = [
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_size_and_baseline() {
        let mut chip = Chip::new("Books", ChipStyle::default()).unwrap();
        let size = chip.measure(Constraints::loose(80, 24)).unwrap();

        // margin + border + padding + swatch + spacer + label + padding + border + margin
        assert_eq!(size.width, 1 + 1 + 1 + 1 + 1 + 5 + 1 + 1 + 1);
        assert_eq!(size.height, 3);
        // Label sits inside the top border
        assert_eq!(size.first_baseline, Some(2));
    }

    #[test]
    fn test_chip_paint() {
        let mut chip = Chip::new("TV", ChipStyle::default()).unwrap();
        let size = chip.measure(Constraints::unbounded()).unwrap();

        let mut buf = FrameBuffer::new(size.width, size.height);
        chip.paint(&mut buf, 0, 0);
        assert_eq!(buf.row_text(0), " ╭──────╮");
        assert_eq!(buf.row_text(1), " │   TV │");
        assert_eq!(buf.row_text(2), " ╰──────╯");
        assert_eq!(buf.get(3, 1).map(|c| c.attrs), Some(Attr::INVERSE));
    }

    #[test]
    fn test_width_follows_label() {
        let style = ChipStyle::default();
        assert_eq!(style.chrome_width(), 8);

        for (label, width) in [("TV", 10), ("Film", 12), ("Books", 13), ("Arts & Crafts", 21)] {
            let mut chip = Chip::new(label, style).unwrap();
            let size = chip.measure(Constraints::loose(80, 24)).unwrap();
            assert_eq!(size.width, width, "{label}");
            assert_eq!(size.height, 3, "{label}");
        }
    }

    #[test]
    fn test_narrow_chip_wraps_label() {
        let mut chip = Chip::new("Philosophy", ChipStyle::default()).unwrap();
        let size = chip.measure(Constraints::loose(13, 24)).unwrap();

        // Five cells of label room: "Philo" / "sophy"
        assert_eq!(size.width, 13);
        assert_eq!(size.height, 4);
        assert_eq!(size.first_baseline, Some(2));

        let mut buf = FrameBuffer::new(size.width, size.height);
        chip.paint(&mut buf, 0, 0);
        assert_eq!(buf.row_text(1), " │   Philo │");
        assert_eq!(buf.row_text(2), " │   sophy │");
    }

    #[test]
    fn test_margin_from_density() {
        let style = ChipStyle::with_margin(Density::default(), Dp(16.0));
        assert_eq!(style.margin_x, 2);
    }

    #[test]
    fn test_topics() {
        assert_eq!(TOPICS.len(), 19);
        assert_eq!(TOPICS[0], "Arts & Crafts");
    }
}
