#![forbid(unsafe_code)]

//! The presentation controller.
//!
//! [`AlertController`] owns the alert's content, actions, and theme, and
//! drives the presentation lifecycle:
//!
//! ```text
//! Initial -> Showing -> Shown -> Hiding -> Dismissed
//! ```
//!
//! Transitions are monotonic. `present` computes geometry and materializes
//! elements on the host surface, then schedules the entrance animations;
//! action activation or an outside backdrop tap schedules the exit; the
//! final backdrop fade completion removes everything and fires the
//! dismissal callback. A dismissal requested while the entrance is still
//! animating is queued and begins the moment `Shown` is reached, so the
//! show and hide animations never overlap.

use bitflags::bitflags;
use klaxon_core::{Point, Rect, TextMeasurer};
use klaxon_layout::{AlertContent, GeometryPlan, LayoutMetrics, compute_layout};

use crate::action::{AlertAction, DismissSignal};
use crate::animation::{AnimationSpec, AnimationToken};
use crate::surface::{AlertSurface, ElementId, HitRegion};
use crate::theme::AlertTheme;

/// Overall presentation shape. Stored for hosts that render sheets
/// differently; the panel geometry is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertStyle {
    #[default]
    Alert,
    ActionSheet,
}

/// Lifecycle state of one alert presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationState {
    /// Constructed, not yet presented.
    Initial,
    /// Entrance animations in flight.
    Showing,
    /// Fully visible, accepting input.
    Shown,
    /// Exit animations in flight; input is ignored.
    Hiding,
    /// Removed from the surface. Terminal.
    Dismissed,
}

bitflags! {
    /// Entrance animations still awaiting completion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct PendingShow: u8 {
        const BACKDROP = 1 << 0;
        const PANEL = 1 << 1;
    }
}

/// Owns one alert from construction to dismissal.
///
/// Exactly one controller exists per presented alert. The host calls
/// [`present`](Self::present) once, routes taps and action activations
/// back in, and delivers animation completions by token. After the state
/// reaches [`PresentationState::Dismissed`] every entry point is a no-op.
pub struct AlertController {
    title: Option<String>,
    message: Option<String>,
    style: AlertStyle,
    theme: AlertTheme,
    metrics: LayoutMetrics,
    actions: Vec<AlertAction>,
    state: PresentationState,
    plan: Option<GeometryPlan>,
    dismiss_signal: DismissSignal,
    pending_show: PendingShow,
    pending_dismissal: bool,
    backdrop: Option<ElementId>,
    panel: Option<ElementId>,
    on_dismissed: Option<Box<dyn FnOnce()>>,
}

impl AlertController {
    pub fn new(title: Option<&str>, message: Option<&str>, style: AlertStyle) -> Self {
        Self {
            title: title.map(str::to_owned),
            message: message.map(str::to_owned),
            style,
            theme: AlertTheme::default(),
            metrics: LayoutMetrics::default(),
            actions: Vec::new(),
            state: PresentationState::Initial,
            plan: None,
            dismiss_signal: DismissSignal::new(),
            pending_show: PendingShow::empty(),
            pending_dismissal: false,
            backdrop: None,
            panel: None,
            on_dismissed: None,
        }
    }

    /// Replace the theme. Only meaningful before [`present`](Self::present).
    pub fn theme(mut self, theme: AlertTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the panel metrics. Only meaningful before
    /// [`present`](Self::present).
    pub fn metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Append an action. Call order is display order.
    pub fn add_action(&mut self, action: AlertAction) {
        self.actions.push(action);
    }

    /// Register the callback fired exactly once when dismissal completes.
    pub fn on_dismissed(&mut self, callback: impl FnOnce() + 'static) {
        self.on_dismissed = Some(Box::new(callback));
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn style(&self) -> AlertStyle {
        self.style
    }

    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// The plan computed by the last [`present`](Self::present), if any.
    #[must_use]
    pub fn plan(&self) -> Option<&GeometryPlan> {
        self.plan.as_ref()
    }

    /// Compute layout, materialize every element on `surface`, and start
    /// the entrance animations.
    ///
    /// An alert with neither title nor message gets a single blank-space
    /// title so the panel is never textless. A title or message whose font
    /// is absent from the theme is omitted with a diagnostic rather than
    /// treated as an error. Calling this in any state but
    /// [`PresentationState::Initial`] is ignored.
    pub fn present(&mut self, surface: &mut dyn AlertSurface, measurer: &dyn TextMeasurer) {
        if self.state != PresentationState::Initial {
            tracing::warn!(state = ?self.state, "present called more than once; ignoring");
            return;
        }

        let has_title = self.title.as_deref().is_some_and(|t| !t.is_empty());
        let has_message = self.message.as_deref().is_some_and(|m| !m.is_empty());
        if !has_title && !has_message {
            tracing::warn!("alert has no text; substituting a blank title");
            self.title = Some(" ".to_owned());
        }
        if self.title.is_some() && self.theme.title_font.is_none() {
            tracing::warn!("title font not configured; omitting title");
        }
        if self.message.is_some() && self.theme.message_font.is_none() {
            tracing::warn!("message font not configured; omitting message");
        }

        let viewport = surface.viewport_size();
        let content = AlertContent {
            title: self.title.as_deref(),
            title_font: self.theme.title_font,
            message: self.message.as_deref(),
            message_font: self.theme.message_font,
            action_count: self.actions.len(),
        };
        let plan = compute_layout(&content, &self.metrics, viewport, measurer);

        let backdrop = surface.create_panel(
            Rect::new(0.0, 0.0, viewport.width, viewport.height),
            self.theme.effective_backdrop(),
            0.0,
        );
        let panel =
            surface.create_panel(plan.container, self.theme.background, self.theme.corner_radius);
        surface.add_child(backdrop, panel);

        if let (Some(text), Some(frame), Some(font)) =
            (self.title.as_deref(), plan.title, self.theme.title_font)
        {
            let block = surface.create_text_block(frame, text, font, self.theme.title_color);
            surface.add_child(panel, block);
        }
        if let (Some(text), Some(frame), Some(font)) =
            (self.message.as_deref(), plan.message, self.theme.message_font)
        {
            let block = surface.create_text_block(frame, text, font, self.theme.message_color);
            surface.add_child(panel, block);
        }

        for frame in &plan.dividers {
            let line = surface.create_line(*frame, self.theme.line_color);
            surface.add_child(panel, line);
        }

        for (index, (action, frame)) in self.actions.iter_mut().zip(&plan.actions).enumerate() {
            action.bind(self.dismiss_signal.clone());
            let button = surface.create_button(
                *frame,
                action.label(),
                action.resolved_font(&self.theme),
                action.resolved_color(&self.theme),
            );
            surface.register_hit(button, HitRegion::Action(index));
            surface.add_child(panel, button);
        }

        // Only an actionless alert dismisses on backdrop taps.
        if self.actions.is_empty() {
            surface.register_hit(backdrop, HitRegion::Backdrop);
        }

        self.backdrop = Some(backdrop);
        self.panel = Some(panel);
        self.plan = Some(plan);
        self.state = PresentationState::Showing;
        self.pending_show = PendingShow::all();

        surface.animate(backdrop, AnimationSpec::show_backdrop(), AnimationToken::ShowBackdrop);
        surface.animate(panel, AnimationSpec::show_panel(), AnimationToken::ShowPanel);
        tracing::debug!(actions = self.actions.len(), "alert presented");
    }

    /// Route a backdrop tap at `point` (viewport coordinates).
    ///
    /// Meaningful only for an actionless alert: a tap outside the panel
    /// dismisses it, a tap inside is ignored. Taps during or after
    /// [`PresentationState::Hiding`] are idempotent no-ops.
    pub fn handle_tap(&mut self, point: Point, surface: &mut dyn AlertSurface) {
        if !self.actions.is_empty() {
            tracing::debug!("backdrop tap ignored; alert has actions");
            return;
        }
        match self.state {
            PresentationState::Showing | PresentationState::Shown => {
                let inside = self
                    .plan
                    .as_ref()
                    .is_some_and(|plan| plan.container.contains(point));
                if !inside {
                    self.request_dismissal(surface);
                }
            }
            PresentationState::Hiding | PresentationState::Dismissed => {
                tracing::debug!("backdrop tap ignored; dismissal already underway");
            }
            PresentationState::Initial => {}
        }
    }

    /// Activate the action at `index`: run its handler, then begin
    /// dismissal.
    ///
    /// Ignored once [`PresentationState::Hiding`] has begun. During
    /// [`PresentationState::Showing`] the handler runs immediately and the
    /// hide is queued until `Shown`.
    pub fn activate_action(&mut self, index: usize, surface: &mut dyn AlertSurface) {
        match self.state {
            PresentationState::Showing | PresentationState::Shown => {}
            state => {
                tracing::debug!(index, ?state, "action activation ignored");
                return;
            }
        }
        let Some(action) = self.actions.get_mut(index) else {
            tracing::warn!(index, count = self.actions.len(), "no action at index");
            return;
        };
        action.activate();
        if self.dismiss_signal.take() {
            self.request_dismissal(surface);
        }
    }

    /// Deliver an animation completion from the host.
    ///
    /// Tokens that do not belong to the current state (a completion
    /// arriving after the transition it drove has been superseded) are
    /// ignored.
    pub fn animation_finished(&mut self, token: AnimationToken, surface: &mut dyn AlertSurface) {
        match (self.state, token) {
            (PresentationState::Showing, AnimationToken::ShowBackdrop) => {
                self.show_animation_settled(PendingShow::BACKDROP, surface);
            }
            (PresentationState::Showing, AnimationToken::ShowPanel) => {
                self.show_animation_settled(PendingShow::PANEL, surface);
            }
            (PresentationState::Hiding, AnimationToken::HidePanel) => {
                // The backdrop fade outlives the panel; nothing to do yet.
            }
            (PresentationState::Hiding, AnimationToken::HideBackdrop) => {
                self.finish_dismissal(surface);
            }
            (state, token) => {
                tracing::debug!(?state, ?token, "stale animation completion ignored");
            }
        }
    }

    fn show_animation_settled(&mut self, done: PendingShow, surface: &mut dyn AlertSurface) {
        self.pending_show.remove(done);
        if !self.pending_show.is_empty() {
            return;
        }
        self.state = PresentationState::Shown;
        if self.pending_dismissal {
            self.pending_dismissal = false;
            self.begin_hide(surface);
        }
    }

    fn request_dismissal(&mut self, surface: &mut dyn AlertSurface) {
        match self.state {
            PresentationState::Shown => self.begin_hide(surface),
            PresentationState::Showing => {
                self.pending_dismissal = true;
                tracing::debug!("dismissal queued until the entrance settles");
            }
            _ => {}
        }
    }

    fn begin_hide(&mut self, surface: &mut dyn AlertSurface) {
        let (Some(panel), Some(backdrop)) = (self.panel, self.backdrop) else {
            return;
        };
        self.state = PresentationState::Hiding;
        surface.animate(panel, AnimationSpec::hide_panel(), AnimationToken::HidePanel);
        surface.animate(backdrop, AnimationSpec::hide_backdrop(), AnimationToken::HideBackdrop);
        tracing::debug!("alert hiding");
    }

    fn finish_dismissal(&mut self, surface: &mut dyn AlertSurface) {
        if let Some(backdrop) = self.backdrop.take() {
            surface.remove(backdrop);
        }
        self.panel = None;
        self.plan = None;
        self.actions.clear();
        self.state = PresentationState::Dismissed;
        tracing::debug!("alert dismissed");
        if let Some(callback) = self.on_dismissed.take() {
            callback();
        }
    }
}

impl std::fmt::Debug for AlertController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertController")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("style", &self.style)
            .field("actions", &self.actions.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
