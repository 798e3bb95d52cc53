//! First-baseline-to-top modifier.
//!
//! Positions a single child so its first text baseline sits a fixed
//! distance below the container's top edge, instead of padding from the
//! child's own top edge.

use crate::error::{LayoutError, Result};
use crate::renderer::{FrameBuffer, Paint};
use crate::types::{Constraints, Density, Dp};

use super::types::{Measurable, MeasuredChild, Placement, PlacementResult};

/// Measure `child` once and shift it so its first baseline lands at
/// `target` cells from the top.
///
/// The offset goes negative (child shifted up) when the child's own
/// baseline already sits below `target`. Container height is the child's
/// height plus that offset, floored at zero.
///
/// Fails with [`LayoutError::UnsupportedLayout`] when the child has no
/// baseline. No placement is produced in that case.
pub fn first_baseline_to_top<M: Measurable + ?Sized>(
    child: &mut M,
    constraints: Constraints,
    target: i32,
) -> Result<PlacementResult> {
    let size = child.measure(constraints)?;

    let Some(baseline) = size.first_baseline else {
        tracing::debug!(width = size.width, height = size.height, "child has no first baseline");
        return Err(LayoutError::UnsupportedLayout(
            "first baseline alignment needs a child with a text baseline".to_string(),
        ));
    };

    let offset = target as i64 - baseline as i64;
    let height = (size.height as i64 + offset).clamp(0, u32::MAX as i64) as u32;
    let y = offset.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    tracing::trace!(target, baseline, offset = y, height, "baseline offset applied");

    Ok(PlacementResult {
        width: size.width,
        height,
        placements: vec![Placement {
            index: 0,
            x: 0,
            y,
            width: size.width,
            height: size.height,
        }],
    })
}

/// Wraps one child and applies [`first_baseline_to_top`] with a
/// density-independent target.
#[derive(Debug)]
pub struct FirstBaselineToTop<W> {
    child: W,
    target: Dp,
    density: Density,
    placement: Option<PlacementResult>,
}

impl<W> FirstBaselineToTop<W> {
    pub fn new(child: W, target: Dp) -> Self {
        Self {
            child,
            target,
            density: Density::default(),
            placement: None,
        }
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn child(&self) -> &W {
        &self.child
    }

    /// Target offset in cells at the current density.
    pub fn target_px(&self) -> i32 {
        self.density.round_to_px(self.target)
    }

    pub fn placement(&self) -> Option<&PlacementResult> {
        self.placement.as_ref()
    }
}

impl<W: Measurable> Measurable for FirstBaselineToTop<W> {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        let target = self.target_px();
        self.placement = None;
        let result = first_baseline_to_top(&mut self.child, constraints, target)?;
        let mut size = MeasuredChild::new(result.width, result.height);
        // The child's baseline now sits at the target
        size.first_baseline = u32::try_from(target).ok();
        self.placement = Some(result);
        Ok(size)
    }
}

impl<W: Paint> Paint for FirstBaselineToTop<W> {
    fn paint(&self, buffer: &mut FrameBuffer, x: i32, y: i32) {
        if let Some(placement) = self.placement.as_ref().and_then(|r| r.placements.first()) {
            self.child.paint(buffer, x + placement.x, y + placement.y);
        }
    }
}
