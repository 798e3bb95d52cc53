//! Core types for spark-grid.
//!
//! Geometry, constraints and cells. Every distance is measured in terminal
//! cells; `Dp` exists so callers can describe spacing independently of the
//! cell density and resolve it once per pass.

use crate::error::{LayoutError, Result};

// =============================================================================
// Constraints
// =============================================================================

/// The min/max envelope a layout pass must respect.
///
/// Built through [`Constraints::new`], which guarantees `min <= max` on
/// both axes. A max of [`Constraints::INFINITY`] means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl Constraints {
    /// Marker for an unbounded max.
    pub const INFINITY: u32 = u32::MAX;

    /// Create constraints, rejecting `min > max` on either axis.
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Result<Self> {
        if min_width > max_width {
            return Err(LayoutError::ContractViolation(format!(
                "min width {min_width} exceeds max width {max_width}"
            )));
        }
        if min_height > max_height {
            return Err(LayoutError::ContractViolation(format!(
                "min height {min_height} exceeds max height {max_height}"
            )));
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// Exactly one size allowed.
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Anything from zero up to the given size.
    pub const fn loose(max_width: u32, max_height: u32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// No limits at all.
    pub const fn unbounded() -> Self {
        Self::loose(Self::INFINITY, Self::INFINITY)
    }

    #[inline]
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    #[inline]
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    #[inline]
    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    #[inline]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Whether the width axis has a finite max.
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    /// Whether the height axis has a finite max.
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Clamp a width into `[min_width, max_width]`.
    #[inline]
    pub fn constrain_width(&self, width: u32) -> u32 {
        width.clamp(self.min_width, self.max_width)
    }

    /// Clamp a height into `[min_height, max_height]`.
    #[inline]
    pub fn constrain_height(&self, height: u32) -> u32 {
        height.clamp(self.min_height, self.max_height)
    }

    /// Same max, zero min. What most children get measured against.
    pub fn loosen(&self) -> Self {
        Self::loose(self.max_width, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

// =============================================================================
// Density-independent distances
// =============================================================================

/// A density-independent distance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

/// Cells per [`Dp`].
///
/// The default maps 8dp onto one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub density: f32,
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    /// Resolve a distance to whole cells, rounding half up.
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        (dp.0 * self.density + 0.5).floor() as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(0.125)
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::INVERSE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character shown in the cell. `'\0'` marks the trailing half of a
    /// wide character.
    pub ch: char,
    pub attrs: Attr,
}

impl Cell {
    pub const CONTINUATION: char = '\0';

    pub const fn new(ch: char, attrs: Attr) -> Self {
        Self { ch, attrs }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.attrs.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
