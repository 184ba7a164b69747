#![forbid(unsafe_code)]

//! Selectable alert actions.

use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use klaxon_core::{FontSpec, Rgba};

use crate::theme::AlertTheme;

/// How an action is styled when no explicit color/font override is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    Destructive,
    Cancel,
}

/// Shared flag an action raises when it fires.
///
/// The controller hands a clone of its signal to every action it places.
/// Raising the flag is how the controller learns "an action fired, begin
/// dismissal" without any completion closure owning the controller.
#[derive(Debug, Clone, Default)]
pub struct DismissSignal(Rc<Cell<bool>>);

impl DismissSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Read and clear the flag.
    #[must_use]
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.get()
    }
}

/// One selectable action: a label, a style, and an optional handler.
///
/// Label and style are fixed at construction; the color/font overrides may
/// be set afterwards and win over the theme defaults for the action's
/// style. The action is owned by its controller and dropped on dismissal.
pub struct AlertAction {
    label: String,
    style: ActionStyle,
    handler: Option<Box<dyn FnMut()>>,
    text_color: Option<Rgba>,
    font: Option<FontSpec>,
    completion: Option<DismissSignal>,
}

impl std::fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertAction")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .field("text_color", &self.text_color)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl AlertAction {
    /// Create an action with no handler; selecting it only dismisses.
    pub fn new(label: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            label: label.into(),
            style,
            handler: None,
            text_color: None,
            font: None,
            completion: None,
        }
    }

    /// Set the handler invoked when the action is selected.
    pub fn on_select(mut self, handler: impl FnMut() + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Override the theme's text color for this action.
    pub fn text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Override the theme's font for this action.
    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    /// The override color if set, else the theme default for this style.
    #[must_use]
    pub fn resolved_color(&self, theme: &AlertTheme) -> Rgba {
        self.text_color.unwrap_or(match self.style {
            ActionStyle::Cancel => theme.cancel_action_color,
            ActionStyle::Default => theme.default_action_color,
            ActionStyle::Destructive => theme.destructive_action_color,
        })
    }

    /// The override font if set, else the theme default for this style.
    #[must_use]
    pub fn resolved_font(&self, theme: &AlertTheme) -> FontSpec {
        self.font.unwrap_or(match self.style {
            ActionStyle::Cancel => theme.cancel_action_font,
            ActionStyle::Default => theme.default_action_font,
            ActionStyle::Destructive => theme.destructive_action_font,
        })
    }

    /// Register the dismissal signal raised after every activation. Called
    /// once by the controller when the action is placed.
    pub(crate) fn bind(&mut self, signal: DismissSignal) {
        self.completion = Some(signal);
    }

    /// Run the handler, then raise the dismissal signal.
    ///
    /// The handler runs first, always followed by the signal: a panicking
    /// handler is caught and logged rather than allowed to suppress
    /// dismissal.
    pub fn activate(&mut self) {
        if let Some(handler) = self.handler.as_mut()
            && catch_unwind(AssertUnwindSafe(|| handler())).is_err()
        {
            tracing::error!(label = %self.label, "action handler panicked");
        }
        if let Some(signal) = &self.completion {
            signal.raise();
        }
    }
}
