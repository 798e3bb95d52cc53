//! Measurement contract and placement output shared by every layout.

use crate::error::Result;
use crate::types::Constraints;

// =============================================================================
// MEASUREMENT
// =============================================================================

/// The size a child reported after being measured once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredChild {
    pub width: u32,
    pub height: u32,
    /// Distance from the child's top edge to its first text baseline.
    /// `None` for children without text.
    pub first_baseline: Option<u32>,
}

impl MeasuredChild {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            first_baseline: None,
        }
    }

    pub const fn with_baseline(mut self, first_baseline: u32) -> Self {
        self.first_baseline = Some(first_baseline);
        self
    }
}

/// A child awaiting measurement.
///
/// This is the one capability a layout borrows from its host. Layouts call
/// `measure` exactly once per child per pass.
pub trait Measurable {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild>;
}

/// A pre-measured child ignores the constraints and reports itself.
impl Measurable for MeasuredChild {
    fn measure(&mut self, _constraints: Constraints) -> Result<MeasuredChild> {
        Ok(*self)
    }
}

/// A child backed by a measuring closure. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct MeasureFn<F>(F);

/// Wrap a closure so it can stand in for a child.
pub fn from_fn<F>(f: F) -> MeasureFn<F>
where
    F: FnMut(Constraints) -> MeasuredChild,
{
    MeasureFn(f)
}

impl<F> Measurable for MeasureFn<F>
where
    F: FnMut(Constraints) -> MeasuredChild,
{
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        Ok((self.0)(constraints))
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        (**self).measure(constraints)
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Where one child landed, relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the child in the input order.
    pub index: usize,
    pub x: i32,
    /// Negative when a child is shifted above the container's top edge.
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}

/// Output of one layout pass: container size plus one placement per child.
///
/// Placements are kept in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacementResult {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

impl PlacementResult {
    /// Placement of the child at `index`, if it was placed.
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.index == index)
    }

    /// Furthest right and bottom edges reached by any child.
    ///
    /// Can exceed the container size when content overflows the clamp.
    pub fn content_bounds(&self) -> (u32, u32) {
        let right = self.placements.iter().map(Placement::right).max().unwrap_or(0);
        let bottom = self.placements.iter().map(Placement::bottom).max().unwrap_or(0);
        (clamp_edge(right), clamp_edge(bottom))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

fn clamp_edge(edge: i64) -> u32 {
    edge.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_child_reports_itself() {
        let mut child = MeasuredChild::new(4, 2).with_baseline(1);
        let measured = child.measure(Constraints::fixed(100, 100)).unwrap();
        assert_eq!(measured, child);
        assert_eq!(measured.first_baseline, Some(1));
    }

    #[test]
    fn test_closure_receives_constraints() {
        let mut child = from_fn(|c: Constraints| MeasuredChild::new(c.max_width(), 1));
        let measured = child.measure(Constraints::loose(17, 5)).unwrap();
        assert_eq!(measured.width, 17);
    }

    #[test]
    fn test_content_bounds() {
        let result = PlacementResult {
            width: 10,
            height: 3,
            placements: vec![
                Placement {
                    index: 0,
                    x: 0,
                    y: -2,
                    width: 4,
                    height: 3,
                },
                Placement {
                    index: 1,
                    x: 4,
                    y: 1,
                    width: 12,
                    height: 5,
                },
            ],
        };
        assert_eq!(result.content_bounds(), (16, 6));
        assert_eq!(result.get(1).map(|p| p.x), Some(4));
        assert!(result.get(2).is_none());
    }

    #[test]
    fn test_empty_bounds() {
        assert_eq!(PlacementResult::default().content_bounds(), (0, 0));
    }
}
