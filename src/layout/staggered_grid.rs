//! Staggered Grid Layout
//!
//! Lays children out in a fixed number of horizontal rows.
//!
//! # Algorithm
//!
//! 1. **Measure**: every child once, against the incoming constraints
//! 2. **Assign**: child `i` goes to row `i % rows`
//! 3. **Row metrics**: row width is the sum of its children's widths, row
//!    height the tallest of its children
//! 4. **Container**: widest row by the sum of row heights, each clamped
//!    into the constraints
//! 5. **Place**: row `k` starts below rows `0..k`; children advance left to
//!    right within their row in input order
//!
//! Children are never re-measured against sizes derived from their siblings.
//! Content wider or taller than the clamped container is left for the
//! renderer to clip.

use crate::error::{LayoutError, Result};
use crate::renderer::{FrameBuffer, Paint};
use crate::types::Constraints;

use super::types::{Measurable, MeasuredChild, Placement, PlacementResult};

/// Row count used when none is given.
pub const DEFAULT_ROWS: usize = 3;

/// Lay out `children` in a staggered grid of `rows` rows.
///
/// Fails with [`LayoutError::ContractViolation`] when `rows` is zero, and
/// propagates any error a child raises while measuring. Nothing is placed
/// in either case.
pub fn staggered_grid<M: Measurable>(
    children: &mut [M],
    constraints: Constraints,
    rows: usize,
) -> Result<PlacementResult> {
    if rows == 0 {
        tracing::debug!(children = children.len(), "staggered grid called with zero rows");
        return Err(LayoutError::ContractViolation(
            "staggered grid needs at least one row".to_string(),
        ));
    }

    let mut row_widths: Vec<u64> = vec![0; rows];
    let mut row_heights: Vec<u32> = vec![0; rows];

    // Single measurement pass, accumulating row metrics as we go
    let mut measured: Vec<MeasuredChild> = Vec::with_capacity(children.len());
    for (index, child) in children.iter_mut().enumerate() {
        let size = child.measure(constraints)?;
        let row = index % rows;
        row_widths[row] += size.width as u64;
        row_heights[row] = row_heights[row].max(size.height);
        measured.push(size);
    }

    let widest = row_widths.iter().copied().max().unwrap_or(0);
    let total_height: u64 = row_heights.iter().map(|&h| h as u64).sum();
    let width = constraints.constrain_width(saturate(widest));
    let height = constraints.constrain_height(saturate(total_height));

    // Each row starts where the rows above it end
    let mut row_y: Vec<u64> = vec![0; rows];
    for row in 1..rows {
        row_y[row] = row_y[row - 1] + row_heights[row - 1] as u64;
    }

    let mut row_x: Vec<u64> = vec![0; rows];
    let placements = measured
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let row = index % rows;
            let placement = Placement {
                index,
                x: to_offset(row_x[row]),
                y: to_offset(row_y[row]),
                width: size.width,
                height: size.height,
            };
            row_x[row] += size.width as u64;
            placement
        })
        .collect();

    tracing::trace!(rows, children = measured.len(), width, height, "staggered grid laid out");

    Ok(PlacementResult {
        width,
        height,
        placements,
    })
}

fn saturate(value: u64) -> u32 {
    value.min(u32::MAX as u64) as u32
}

fn to_offset(value: u64) -> i32 {
    value.min(i32::MAX as u64) as i32
}

// =============================================================================
// WIDGET
// =============================================================================

/// A staggered grid that owns its children and remembers its last pass.
#[derive(Debug)]
pub struct StaggeredGrid<W> {
    rows: usize,
    children: Vec<W>,
    placement: Option<PlacementResult>,
}

impl<W> StaggeredGrid<W> {
    /// Create an empty grid. Zero rows is a contract violation.
    pub fn new(rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(LayoutError::ContractViolation(
                "staggered grid needs at least one row".to_string(),
            ));
        }
        Ok(Self {
            rows,
            children: Vec::new(),
            placement: None,
        })
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = W>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: W) {
        self.children.push(child);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn children(&self) -> &[W] {
        &self.children
    }

    /// Result of the most recent measure, if any.
    pub fn placement(&self) -> Option<&PlacementResult> {
        self.placement.as_ref()
    }
}

impl<W> Default for StaggeredGrid<W> {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            children: Vec::new(),
            placement: None,
        }
    }
}

impl<W: Measurable> Measurable for StaggeredGrid<W> {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        self.placement = None;
        let result = staggered_grid(&mut self.children, constraints, self.rows)?;
        let size = MeasuredChild::new(result.width, result.height);
        self.placement = Some(result);
        Ok(size)
    }
}

impl<W: Paint> Paint for StaggeredGrid<W> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::baseline::FirstBaselineToTop;
    use crate::layout::types::from_fn;
    use crate::primitives::Text;
    use crate::types::Dp;

    fn sized(sizes: &[(u32, u32)]) -> Vec<MeasuredChild> {
        sizes.iter().map(|&(w, h)| MeasuredChild::new(w, h)).collect()
    }

    #[test]
    fn test_round_robin_rows() {
        let mut children = sized(&[
            (10, 5),
            (20, 5),
            (30, 5),
            (10, 10),
            (20, 10),
            (30, 10),
            (10, 15),
        ]);
        let result = staggered_grid(&mut children, Constraints::unbounded(), 3).unwrap();

        assert_eq!(result.width, 60);
        assert_eq!(result.height, 35);

        // Row 0: children 0, 3, 6
        assert_eq!((result.placements[0].x, result.placements[0].y), (0, 0));
        assert_eq!((result.placements[3].x, result.placements[3].y), (10, 0));
        assert_eq!((result.placements[6].x, result.placements[6].y), (20, 0));

        // Row 1 starts below row 0 (height 15)
        assert_eq!((result.placements[1].x, result.placements[1].y), (0, 15));
        assert_eq!((result.placements[4].x, result.placements[4].y), (20, 15));

        // Row 2 starts below row 1 (height 10)
        assert_eq!((result.placements[2].x, result.placements[2].y), (0, 25));
        assert_eq!((result.placements[5].x, result.placements[5].y), (30, 25));
    }

    #[test]
    fn test_empty_collapses_to_min() {
        let mut children: Vec<MeasuredChild> = Vec::new();
        let constraints = Constraints::new(7, 100, 3, 50).unwrap();
        let result = staggered_grid(&mut children, constraints, 4).unwrap();

        assert_eq!((result.width, result.height), (7, 3));
        assert!(result.is_empty());
    }

    #[test]
    fn test_more_rows_than_children() {
        let mut children = sized(&[(4, 2), (6, 3)]);
        let result = staggered_grid(&mut children, Constraints::unbounded(), 5).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.width, 6);
        assert_eq!(result.height, 5);
        assert_eq!(result.placements[1].y, 2);
    }

    #[test]
    fn test_zero_rows_is_contract_violation() {
        let mut children = sized(&[(1, 1)]);
        let err = staggered_grid(&mut children, Constraints::unbounded(), 0).unwrap_err();
        assert!(err.is_contract_violation());
        assert!(StaggeredGrid::<MeasuredChild>::new(0).is_err());
    }

    #[test]
    fn test_clamped_container_keeps_offsets() {
        let mut children = sized(&[(50, 4), (50, 4), (50, 4), (50, 4)]);
        let constraints = Constraints::loose(60, 5);
        let result = staggered_grid(&mut children, constraints, 2).unwrap();

        assert_eq!((result.width, result.height), (60, 5));
        // Second child of row 0 still sits after the first, past the clamp
        assert_eq!(result.placements[2].x, 50);
        assert_eq!(result.placements[3].y, 4);
        assert_eq!(result.content_bounds(), (100, 8));
    }

    #[test]
    fn test_container_grows_to_min() {
        let mut children = sized(&[(2, 1)]);
        let constraints = Constraints::new(10, 20, 4, 20).unwrap();
        let result = staggered_grid(&mut children, constraints, 1).unwrap();
        assert_eq!((result.width, result.height), (10, 4));
    }

    #[test]
    fn test_each_child_measured_once_with_incoming_constraints() {
        use std::cell::RefCell;

        let seen: RefCell<Vec<Constraints>> = RefCell::new(Vec::new());
        let constraints = Constraints::loose(30, 9);
        let mut children: Vec<_> = (0..5)
            .map(|_| {
                from_fn(|c: Constraints| {
                    seen.borrow_mut().push(c);
                    MeasuredChild::new(3, 1)
                })
            })
            .collect();

        staggered_grid(&mut children, constraints, 2).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 5);
        assert!(seen.iter().all(|&c| c == constraints));
    }

    #[test]
    fn test_widget_remembers_placement() {
        let mut grid = StaggeredGrid::new(2)
            .unwrap()
            .with_children(sized(&[(3, 1), (4, 2), (5, 1)]));
        assert!(grid.placement().is_none());

        let size = grid.measure(Constraints::unbounded()).unwrap();
        assert_eq!((size.width, size.height), (8, 3));
        assert_eq!(size.first_baseline, None);
        assert_eq!(grid.placement().map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_failed_measure_drops_previous_placement() {
        let heading = |text: &str| FirstBaselineToTop::new(Text::new(text), Dp(8.0));
        let mut grid = StaggeredGrid::new(2).unwrap().with_children([heading("Hi")]);
        grid.measure(Constraints::unbounded()).unwrap();
        assert_eq!(grid.placement().map(|p| p.len()), Some(1));

        // Empty text has no baseline, so the second child fails
        grid.push(heading(""));
        assert!(grid.measure(Constraints::unbounded()).is_err());
        assert!(grid.placement().is_none());

        let mut buffer = FrameBuffer::new(8, 4);
        grid.paint(&mut buffer, 0, 0);
        assert_eq!(buffer.used_height(), 0);
    }

    #[test]
    fn test_default_rows() {
        assert_eq!(StaggeredGrid::<MeasuredChild>::default().rows(), DEFAULT_ROWS);
    }
}
