#![forbid(unsafe_code)]

//! Alert styling as an explicit value.
//!
//! Every controller owns its own [`AlertTheme`] copy; there is no shared
//! registry to configure behind the scenes. The defaults are the classic
//! alert look: white panel, hairline-gray dividers, blue cancel, red
//! destructive.

use klaxon_core::{FontSpec, Rgba};

/// Fonts and colors for one alert.
///
/// `title_font`/`message_font` are optional: an absent font means the
/// corresponding text block measures zero height and is omitted from the
/// panel. Action fonts are always present since action buttons are never
/// omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTheme {
    pub title_font: Option<FontSpec>,
    pub message_font: Option<FontSpec>,
    pub default_action_font: FontSpec,
    pub cancel_action_font: FontSpec,
    pub destructive_action_font: FontSpec,

    /// Panel fill.
    pub background: Rgba,
    /// Divider lines.
    pub line_color: Rgba,
    pub title_color: Rgba,
    pub message_color: Rgba,
    pub default_action_color: Rgba,
    pub destructive_action_color: Rgba,
    pub cancel_action_color: Rgba,

    /// Panel corner radius in logical units.
    pub corner_radius: f32,
    /// Backdrop tint behind the panel.
    pub backdrop_color: Rgba,
    /// Backdrop opacity in `[0.0, 1.0]`.
    pub backdrop_opacity: f32,
}

impl Default for AlertTheme {
    fn default() -> Self {
        Self {
            title_font: Some(FontSpec::system(18.0)),
            message_font: Some(FontSpec::system(14.0)),
            default_action_font: FontSpec::system(16.0),
            cancel_action_font: FontSpec::system(16.0),
            destructive_action_font: FontSpec::system(16.0),
            background: Rgba::WHITE,
            line_color: Rgba::rgb(204, 204, 207),
            title_color: Rgba::BLACK,
            message_color: Rgba::DARK_GRAY,
            default_action_color: Rgba::BLACK,
            destructive_action_color: Rgba::RED,
            cancel_action_color: Rgba::BLUE,
            corner_radius: 11.0,
            backdrop_color: Rgba::BLACK,
            backdrop_opacity: 0.4,
        }
    }
}

impl AlertTheme {
    /// Set the title font. `None` omits the title block entirely.
    pub fn title_font(mut self, font: Option<FontSpec>) -> Self {
        self.title_font = font;
        self
    }

    /// Set the message font. `None` omits the message block entirely.
    pub fn message_font(mut self, font: Option<FontSpec>) -> Self {
        self.message_font = font;
        self
    }

    pub fn default_action_font(mut self, font: FontSpec) -> Self {
        self.default_action_font = font;
        self
    }

    pub fn cancel_action_font(mut self, font: FontSpec) -> Self {
        self.cancel_action_font = font;
        self
    }

    pub fn destructive_action_font(mut self, font: FontSpec) -> Self {
        self.destructive_action_font = font;
        self
    }

    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    pub fn line_color(mut self, color: Rgba) -> Self {
        self.line_color = color;
        self
    }

    pub fn title_color(mut self, color: Rgba) -> Self {
        self.title_color = color;
        self
    }

    pub fn message_color(mut self, color: Rgba) -> Self {
        self.message_color = color;
        self
    }

    pub fn default_action_color(mut self, color: Rgba) -> Self {
        self.default_action_color = color;
        self
    }

    pub fn destructive_action_color(mut self, color: Rgba) -> Self {
        self.destructive_action_color = color;
        self
    }

    pub fn cancel_action_color(mut self, color: Rgba) -> Self {
        self.cancel_action_color = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn backdrop_color(mut self, color: Rgba) -> Self {
        self.backdrop_color = color;
        self
    }

    pub fn backdrop_opacity(mut self, opacity: f32) -> Self {
        self.backdrop_opacity = opacity;
        self
    }

    /// Backdrop color with its configured opacity applied.
    #[must_use]
    pub fn effective_backdrop(&self) -> Rgba {
        self.backdrop_color.with_opacity(self.backdrop_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_look() {
        let theme = AlertTheme::default();
        assert_eq!(theme.title_font, Some(FontSpec::system(18.0)));
        assert_eq!(theme.message_font, Some(FontSpec::system(14.0)));
        assert_eq!(theme.default_action_font, FontSpec::system(16.0));
        assert_eq!(theme.background, Rgba::WHITE);
        assert_eq!(theme.line_color, Rgba::rgb(204, 204, 207));
        assert_eq!(theme.cancel_action_color, Rgba::BLUE);
        assert_eq!(theme.destructive_action_color, Rgba::RED);
        assert_eq!(theme.corner_radius, 11.0);
        assert_eq!(theme.backdrop_opacity, 0.4);
    }

    #[test]
    fn builders_replace_fields() {
        let theme = AlertTheme::default()
            .title_font(None)
            .background(Rgba::BLACK)
            .backdrop_opacity(0.8);
        assert_eq!(theme.title_font, None);
        assert_eq!(theme.background, Rgba::BLACK);
        assert_eq!(theme.backdrop_opacity, 0.8);
    }

    #[test]
    fn effective_backdrop_scales_alpha() {
        let theme = AlertTheme::default();
        assert_eq!(theme.effective_backdrop(), Rgba::BLACK.with_opacity(0.4));
    }
}
