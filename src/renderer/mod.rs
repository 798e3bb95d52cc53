//! Terminal rendering.
//!
//! Widgets paint into a [`FrameBuffer`] after they have been measured; the
//! [`InlineRenderer`] then writes the buffer out through crossterm.

mod buffer;
mod inline;

pub use buffer::FrameBuffer;
pub use inline::InlineRenderer;

use crate::layout::Measurable;

/// Something that can draw its last layout into a frame buffer.
///
/// `(x, y)` is where the parent placed it. Painting before measuring
/// draws nothing for composites.
pub trait Paint {
    fn paint(&self, buffer: &mut FrameBuffer, x: i32, y: i32);
}

impl<P: Paint + ?Sized> Paint for Box<P> {
    fn paint(&self, buffer: &mut FrameBuffer, x: i32, y: i32) {
        (**self).paint(buffer, x, y);
    }
}

/// A child that can be both measured and painted.
pub trait Widget: Measurable + Paint {}

impl<T: Measurable + Paint + ?Sized> Widget for T {}
