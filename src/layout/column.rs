//! Column layout: children stacked top to bottom at x = 0.
//!
//! The column claims all the space it is offered, so both max constraints
//! must be bounded.

use crate::error::{LayoutError, Result};
use crate::renderer::{FrameBuffer, Paint};
use crate::types::Constraints;

use super::types::{Measurable, MeasuredChild, Placement, PlacementResult};

/// Stack `children` vertically, each measured once against `constraints`.
pub fn column<M: Measurable>(
    children: &mut [M],
    constraints: Constraints,
) -> Result<PlacementResult> {
    if !constraints.has_bounded_width() || !constraints.has_bounded_height() {
        tracing::debug!(?constraints, "column offered unbounded space");
        return Err(LayoutError::ContractViolation(
            "column needs bounded max width and height".to_string(),
        ));
    }

    let mut placements = Vec::with_capacity(children.len());
    let mut y: i64 = 0;
    for (index, child) in children.iter_mut().enumerate() {
        let size = child.measure(constraints)?;
        placements.push(Placement {
            index,
            x: 0,
            y: y.min(i32::MAX as i64) as i32,
            width: size.width,
            height: size.height,
        });
        y += size.height as i64;
    }

    tracing::trace!(children = placements.len(), stacked = y, "column laid out");

    Ok(PlacementResult {
        width: constraints.max_width(),
        height: constraints.max_height(),
        placements,
    })
}

/// A column that owns its children and remembers its last pass.
#[derive(Debug)]
pub struct Column<W> {
    children: Vec<W>,
    placement: Option<PlacementResult>,
}

impl<W> Column<W> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            placement: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = W>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: W) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[W] {
        &self.children
    }

    pub fn placement(&self) -> Option<&PlacementResult> {
        self.placement.as_ref()
    }
}

impl<W> Default for Column<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Measurable> Measurable for Column<W> {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        self.placement = None;
        let result = column(&mut self.children, constraints)?;
        let size = MeasuredChild::new(result.width, result.height);
        self.placement = Some(result);
        Ok(size)
    }
}

impl<W: Paint> Paint for Column<W> {
    fn paint(&self, buffer: &mut FrameBuffer, x: i32, y: i32) {
        let Some(result) = &self.placement else {
            return;
        };
        for placement in &result.placements {
            if let Some(child) = self.children.get(placement.index) {
                child.paint(buffer, x + placement.x, y + placement.y);
            }
        }
    }
}
