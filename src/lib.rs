//! # spark-grid
//!
//! Staggered grid and baseline layouts for terminal UIs.
//!
//! ## Architecture
//!
//! Layouts are plain functions from `(children, constraints)` to a
//! [`PlacementResult`]: a container size plus one offset per child. The only
//! thing a layout asks of its children is that they can be measured, which
//! is the [`Measurable`] trait. Widgets that can also paint themselves
//! compose into trees:
//!
//! ```text
//! Constraints → measure (once per child) → PlacementResult
//!             → paint → FrameBuffer → InlineRenderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Constraints, density-independent distances, cells
//! - [`layout`] - Staggered grid, column, first-baseline modifier, taffy bridge
//! - [`primitives`] - Text and chip widgets
//! - [`renderer`] - Frame buffer and inline terminal output
//! - [`config`] - JSON configuration for the demo

pub mod config;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod types;

pub use types::*;

pub use error::{LayoutError, Result};

pub use config::{ConfigError, GridConfig};

pub use layout::{
    Column, FirstBaselineToTop, Measurable, MeasuredChild, Placement, PlacementResult,
    StaggeredGrid, column, first_baseline_to_top, staggered_grid,
};

pub use primitives::{Chip, ChipStyle, TOPICS, Text};

pub use renderer::{FrameBuffer, InlineRenderer, Paint, Widget};
