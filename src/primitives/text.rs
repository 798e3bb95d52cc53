//! Text Primitive - Display text with styling and wrapping.
//!
//! A leaf widget. Wraps at the max width it is measured against and reports
//! its first baseline at the bottom edge of its first line.
//!
//! # Example
//!
//! ```
//! use spark_grid::layout::Measurable;
//! use spark_grid::primitives::Text;
//! use spark_grid::{Attr, Constraints};
//!
//! let mut title = Text::new("Hi there!").with_attrs(Attr::BOLD);
//! let size = title.measure(Constraints::loose(80, 24)).unwrap();
//! assert_eq!((size.width, size.height, size.first_baseline), (9, 1, Some(1)));
//! ```

use crate::error::Result;
use crate::layout::{Measurable, MeasuredChild, string_width, wrap_text};
use crate::renderer::{FrameBuffer, Paint};
use crate::types::{Attr, Constraints};

/// Distance from the top of a text line to its baseline, in cells.
pub const LINE_BASELINE: u32 = 1;

/// A run of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    content: String,
    attrs: Attr,
    lines: Vec<String>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            attrs: Attr::NONE,
            lines: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lines produced by the last measure.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Measurable for Text {
    fn measure(&mut self, constraints: Constraints) -> Result<MeasuredChild> {
        let wrap_width = if constraints.has_bounded_width() {
            constraints.max_width().max(1)
        } else {
            0
        };
        self.lines = wrap_text(&self.content, wrap_width);

        let width = self.lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        let height = self.lines.len() as u32;

        let mut size = MeasuredChild::new(
            constraints.constrain_width(width),
            constraints.constrain_height(height),
        );
        if !self.lines.is_empty() {
            size.first_baseline = Some(LINE_BASELINE);
        }
        Ok(size)
    }
}

impl Paint for Text {
    fn paint(&self, buffer: &mut FrameBuffer, x: i32, y: i32) {
        for (i, line) in self.lines.iter().enumerate() {
            buffer.draw_text(x, y + i as i32, line, self.attrs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let mut text = Text::new("hello");
        let size = text.measure(Constraints::unbounded()).unwrap();
        assert_eq!((size.width, size.height), (5, 1));
        assert_eq!(size.first_baseline, Some(LINE_BASELINE));
    }

    #[test]
    fn test_wraps_at_max_width() {
        let mut text = Text::new("hello world");
        let size = text.measure(Constraints::loose(5, 10)).unwrap();
        assert_eq!((size.width, size.height), (5, 3));
        assert_eq!(text.lines(), &["hello", " worl", "d"]);
    }

    #[test]
    fn test_empty_text_has_no_baseline() {
        let mut text = Text::new("");
        let size = text.measure(Constraints::unbounded()).unwrap();
        assert_eq!((size.width, size.height), (0, 0));
        assert_eq!(size.first_baseline, None);
    }

    #[test]
    fn test_paint() {
        let mut text = Text::new("ab\ncd");
        text.measure(Constraints::unbounded()).unwrap();

        let mut buf = FrameBuffer::new(4, 3);
        text.paint(&mut buf, 1, 1);
        assert_eq!(buf.row_text(1), " ab");
        assert_eq!(buf.row_text(2), " cd");
    }
}
