//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Widths come from `unicode-width`:
//! - ASCII printable: 1 cell
//! - CJK and most emoji: 2 cells
//! - Control and zero-width characters: 0 cells

use unicode_width::UnicodeWidthChar;

/// Display width of a single character in cells.
#[inline]
pub fn char_width(c: char) -> u32 {
    c.width().unwrap_or(0) as u32
}

/// Width of the widest line of `s`, in cells.
pub fn string_width(s: &str) -> u32 {
    s.split('\n')
        .map(|line| line.chars().map(char_width).sum::<u32>())
        .max()
        .unwrap_or(0)
}

/// Number of lines `text` occupies when wrapped at `available_width`.
///
/// Returns 0 for empty text and at least 1 otherwise.
pub fn measure_text_height(text: &str, available_width: u32) -> u32 {
    wrap_text(text, available_width).len() as u32
}

/// Wrap `text` to lines no wider than `width` cells.
///
/// Breaks at explicit newlines and at the character that would overflow.
/// A single character wider than `width` still gets its own line. A zero
/// width disables wrapping.
pub fn wrap_text(text: &str, width: u32) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0u32;

    for c in text.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
            continue;
        }

        let w = char_width(c);
        if current_width + w > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        current_line.push(c);
        current_width += w;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}
