//! Widget primitives.
//!
//! - [`Text`] - Text display with styling and wrapping
//! - [`Chip`] - Bordered label with a swatch, laid out by taffy
//!
//! Both are leaves as far as the grid is concerned: they measure
//! themselves against the constraints they are given and report a first
//! baseline when they carry text.

mod chip;
mod text;

pub use chip::{Chip, ChipStyle, TOPICS};
pub use text::{LINE_BASELINE, Text};
