#![forbid(unsafe_code)]

//! Layout inputs: panel metrics and alert content.

use klaxon_core::FontSpec;
use serde::{Deserialize, Serialize};

/// Fixed panel dimensions, in logical units.
///
/// The defaults are the classic alert proportions: a 270-wide panel, 4-unit
/// content insets, a text box never shorter than 60, 44-unit action rows,
/// and half-unit hairlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Panel width. The panel never grows or shrinks horizontally.
    pub container_width: f32,
    /// Inset between the panel edge and text/button content.
    pub content_inset: f32,
    /// Minimum height of the text box, even when empty.
    pub min_text_height: f32,
    /// Height of one action row.
    pub action_row_height: f32,
    /// Divider thickness.
    pub hairline: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            container_width: 270.0,
            content_inset: 4.0,
            min_text_height: 60.0,
            action_row_height: 44.0,
            hairline: 0.5,
        }
    }
}

impl LayoutMetrics {
    /// Width available to text content.
    #[must_use]
    pub fn text_width(&self) -> f32 {
        self.container_width - 2.0 * self.content_inset
    }
}

/// What goes into the panel: the text blocks and how many actions follow.
///
/// A text block only occupies height when its string is present and
/// non-empty *and* a font is supplied; otherwise it measures zero and is
/// omitted from the plan entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertContent<'a> {
    pub title: Option<&'a str>,
    pub title_font: Option<FontSpec>,
    pub message: Option<&'a str>,
    pub message_font: Option<FontSpec>,
    pub action_count: usize,
}

impl<'a> AlertContent<'a> {
    #[must_use]
    pub fn new(action_count: usize) -> Self {
        Self {
            action_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, text: &'a str, font: FontSpec) -> Self {
        self.title = Some(text);
        self.title_font = Some(font);
        self
    }

    #[must_use]
    pub fn message(mut self, text: &'a str, font: FontSpec) -> Self {
        self.message = Some(text);
        self.message_font = Some(font);
        self
    }
}
