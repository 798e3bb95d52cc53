//! Layout Module
//!
//! Single-pass layouts over measurable children.
//!
//! # Architecture
//!
//! Every layout follows the same contract:
//!
//! 1. Receive [`Constraints`](crate::types::Constraints) from the parent
//! 2. Measure each child exactly once through [`Measurable`]
//! 3. Decide a container size and one [`Placement`] per child
//!
//! The output is a [`PlacementResult`]. Composite widgets keep their last
//! result so they can paint their children afterwards.
//!
//! # Example
//!
//! ```
//! use spark_grid::layout::{MeasuredChild, staggered_grid};
//! use spark_grid::Constraints;
//!
//! let mut children = vec![MeasuredChild::new(4, 1), MeasuredChild::new(6, 2)];
//! let result = staggered_grid(&mut children, Constraints::loose(80, 24), 2).unwrap();
//! assert_eq!((result.width, result.height), (6, 3));
//! ```

mod baseline;
mod column;
mod staggered_grid;
mod taffy_bridge;
mod text_measure;
mod types;

pub use baseline::{FirstBaselineToTop, first_baseline_to_top};
pub use column::{Column, column};
pub use staggered_grid::{DEFAULT_ROWS, StaggeredGrid, staggered_grid};
pub use taffy_bridge::{
    AbsoluteNode, available_space, measure_text, measure_tree, visit_absolute,
};
pub use text_measure::*;
pub use types::*;
