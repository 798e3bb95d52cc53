//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that widgets paint into. Every
//! drawing call takes signed coordinates and silently clips to the buffer,
//! since laid-out children may sit partly above or left of their container.

use crate::layout::char_width;
use crate::types::{Attr, Cell};

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with blank cells.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell, ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// One row of cells, or an empty slice past the bottom.
    pub fn row(&self, y: u32) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Draw a single line of text starting at (x, y).
    ///
    /// Wide characters take two cells; the second holds a continuation
    /// marker. Returns the number of cells advanced.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, attrs: Attr) -> u32 {
        let mut cx = x;
        for c in text.chars() {
            let w = char_width(c);
            if w == 0 {
                continue;
            }
            self.set(cx, y, Cell::new(c, attrs));
            if w == 2 {
                self.set(cx + 1, y, Cell::new(Cell::CONTINUATION, attrs));
            }
            cx += w as i32;
        }
        (cx - x) as u32
    }

    /// Fill a rectangle with one cell.
    pub fn fill(&mut self, x: i32, y: i32, width: u32, height: u32, cell: Cell) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.set(x + dx, y + dy, cell);
            }
        }
    }

    /// Draw a rounded single-line border. Needs at least 2x2 cells.
    pub fn draw_border(&mut self, x: i32, y: i32, width: u32, height: u32, attrs: Attr) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width as i32 - 1;
        let bottom = y + height as i32 - 1;

        for cx in x + 1..right {
            self.set(cx, y, Cell::new('─', attrs));
            self.set(cx, bottom, Cell::new('─', attrs));
        }
        for cy in y + 1..bottom {
            self.set(x, cy, Cell::new('│', attrs));
            self.set(right, cy, Cell::new('│', attrs));
        }
        self.set(x, y, Cell::new('╭', attrs));
        self.set(right, y, Cell::new('╮', attrs));
        self.set(x, bottom, Cell::new('╰', attrs));
        self.set(right, bottom, Cell::new('╯', attrs));
    }

    /// Number of rows up to and including the last non-blank one.
    pub fn used_height(&self) -> u32 {
        (0..self.height)
            .rev()
            .find(|&y| self.row(y).iter().any(|c| !c.is_blank()))
            .map_or(0, |y| y + 1)
    }

    /// Plain text of a row, trailing blanks trimmed.
    pub fn row_text(&self, y: u32) -> String {
        let text: String = self
            .row(y)
            .iter()
            .filter(|c| c.ch != Cell::CONTINUATION)
            .map(|c| c.ch)
            .collect();
        text.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clips() {
        let mut buf = FrameBuffer::new(3, 2);
        buf.set(-1, 0, Cell::new('x', Attr::NONE));
        buf.set(3, 0, Cell::new('x', Attr::NONE));
        buf.set(0, 2, Cell::new('x', Attr::NONE));
        assert_eq!(buf.used_height(), 0);

        buf.set(2, 1, Cell::new('x', Attr::NONE));
        assert_eq!(buf.get(2, 1).map(|c| c.ch), Some('x'));
        assert_eq!(buf.used_height(), 2);
    }

    #[test]
    fn test_draw_text_clipped_left() {
        let mut buf = FrameBuffer::new(4, 1);
        buf.draw_text(-2, 0, "hello", Attr::NONE);
        assert_eq!(buf.row_text(0), "llo");
    }

    #[test]
    fn test_draw_text_wide_chars() {
        let mut buf = FrameBuffer::new(6, 1);
        let advanced = buf.draw_text(0, 0, "日本", Attr::NONE);
        assert_eq!(advanced, 4);
        assert_eq!(buf.row_text(0), "日本");
        assert_eq!(buf.get(1, 0).map(|c| c.ch), Some(Cell::CONTINUATION));
    }

    #[test]
    fn test_draw_border() {
        let mut buf = FrameBuffer::new(4, 3);
        buf.draw_border(0, 0, 4, 3, Attr::NONE);
        assert_eq!(buf.row_text(0), "╭──╮");
        assert_eq!(buf.row_text(1), "│  │");
        assert_eq!(buf.row_text(2), "╰──╯");
    }

    #[test]
    fn test_fill() {
        let mut buf = FrameBuffer::new(3, 3);
        buf.fill(1, 1, 5, 5, Cell::new('#', Attr::NONE));
        assert_eq!(buf.row_text(0), "");
        assert_eq!(buf.row_text(2), " ##");
    }
}
