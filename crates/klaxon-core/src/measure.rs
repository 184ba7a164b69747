#![forbid(unsafe_code)]

//! The text measurement seam.
//!
//! Layout never measures text itself; it asks a [`TextMeasurer`] for the
//! height of a word-wrapped block. Hosts with a real text stack implement
//! the trait over it. [`MonospaceMetrics`] is the built-in reference
//! implementation: fixed glyph advance derived from the font size, greedy
//! word wrap, no line limit. It is exact and platform-independent, which is
//! what the layout tests want.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::font::FontSpec;

/// Measures the height of word-wrapped text.
pub trait TextMeasurer {
    /// Height of `text` wrapped into `max_width`, in logical units.
    ///
    /// Empty text measures zero. Non-empty text measures at least one line,
    /// whitespace-only text included.
    fn wrapped_height(&self, text: &str, font: FontSpec, max_width: f32) -> f32;
}

/// Deterministic monospace measurement.
///
/// Every glyph column advances half the font size; a line is the font size
/// plus a fixed gap. Wrapping is greedy on whitespace-separated words, with
/// words wider than the line broken mid-word. `\n` forces a line break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Extra height per line on top of the font size.
    pub line_gap: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { line_gap: 4.0 }
    }
}

impl MonospaceMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal advance of one glyph column.
    #[must_use]
    pub fn advance(&self, font: FontSpec) -> f32 {
        font.size * 0.5
    }

    /// Height of one wrapped line.
    #[must_use]
    pub fn line_height(&self, font: FontSpec) -> f32 {
        font.size + self.line_gap
    }

    fn columns(word: &str) -> usize {
        word.graphemes(true).map(UnicodeWidthStr::width).sum()
    }

    fn wrap_line(line: &str, max_cols: usize) -> usize {
        let mut lines = 1;
        let mut col = 0;
        for word in line.split_whitespace() {
            let w = Self::columns(word);
            if col > 0 {
                if col + 1 + w <= max_cols {
                    col += 1 + w;
                    continue;
                }
                lines += 1;
                col = 0;
            }
            if w <= max_cols {
                col = w;
            } else {
                // Break an over-long word mid-word.
                let extra = (w - 1) / max_cols;
                lines += extra;
                col = w - extra * max_cols;
            }
        }
        lines
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn wrapped_height(&self, text: &str, font: FontSpec, max_width: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let advance = self.advance(font);
        let max_cols = if advance > 0.0 {
            ((max_width / advance).floor() as usize).max(1)
        } else {
            usize::MAX
        };
        let lines: usize = text
            .split('\n')
            .map(|line| Self::wrap_line(line, max_cols))
            .sum();
        lines as f32 * self.line_height(font)
    }
}
