//! Inline renderer for normal terminal mode.
//!
//! Writes a frame into the normal terminal buffer, below the prompt:
//!
//! - Only rows up to the last non-blank one are written
//! - Trailing blanks on each row are dropped
//! - A second render erases the previous frame first

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell};

/// Inline renderer over any writer.
pub struct InlineRenderer<W: Write> {
    out: W,
    previous_height: u32,
}

impl<W: Write> InlineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous_height: 0,
        }
    }

    /// Render a frame inline, replacing the previous one.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        if self.previous_height > 0 {
            queue!(
                self.out,
                MoveUp(self.previous_height.min(u16::MAX as u32) as u16),
                MoveToColumn(0),
                Clear(ClearType::FromCursorDown)
            )?;
        }

        let height = buffer.used_height();
        for y in 0..height {
            self.render_row(buffer.row(y))?;
            queue!(self.out, Print('\n'))?;
        }

        self.out.flush()?;
        self.previous_height = height;
        tracing::trace!(rows = height, "inline frame written");
        Ok(())
    }

    fn render_row(&mut self, row: &[Cell]) -> io::Result<()> {
        let end = row.iter().rposition(|c| !c.is_blank()).map_or(0, |i| i + 1);
        let mut current = Attr::NONE;

        for cell in &row[..end] {
            if cell.ch == Cell::CONTINUATION {
                continue;
            }
            if cell.attrs != current {
                self.apply_attrs(cell.attrs)?;
                current = cell.attrs;
            }
            queue!(self.out, Print(cell.ch))?;
        }

        if !current.is_empty() {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn apply_attrs(&mut self, attrs: Attr) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        let mapping = [
            (Attr::BOLD, Attribute::Bold),
            (Attr::DIM, Attribute::Dim),
            (Attr::ITALIC, Attribute::Italic),
            (Attr::UNDERLINE, Attribute::Underlined),
            (Attr::INVERSE, Attribute::Reverse),
        ];
        for (flag, attribute) in mapping {
            if attrs.contains(flag) {
                queue!(self.out, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }

    /// Height of the previously rendered frame.
    pub fn previous_height(&self) -> u32 {
        self.previous_height
    }

    /// Forget the previous frame so the next render does not erase it.
    pub fn reset(&mut self) {
        self.previous_height = 0;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl InlineRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

// =============================================================================
// Tests
// =============================================================================
