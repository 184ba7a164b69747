#![forbid(unsafe_code)]

//! Modal alert presentation for Klaxon.
//!
//! This crate turns a [`klaxon_layout::GeometryPlan`] into a live alert:
//! [`AlertController`] owns the title, message, and [`AlertAction`]s,
//! materializes panel/text/divider/button elements on a host
//! [`AlertSurface`], and runs the show/hide animation state machine.
//! Styling is an explicit [`AlertTheme`] value carried by each controller;
//! there is no global configuration.
//!
//! The host owns rendering, input routing, and animation execution. It
//! implements [`AlertSurface`], forwards taps via
//! [`AlertController::handle_tap`] / [`AlertController::activate_action`],
//! and reports animation completions via
//! [`AlertController::animation_finished`].
//!
//! # Example
//!
//! ```ignore
//! let mut alert = AlertController::new(
//!     Some("Delete?"),
//!     Some("This cannot be undone."),
//!     AlertStyle::Alert,
//! );
//! alert.add_action(AlertAction::new("Cancel", ActionStyle::Cancel));
//! alert.add_action(
//!     AlertAction::new("Delete", ActionStyle::Destructive).on_select(|| delete_it()),
//! );
//! alert.on_dismissed(|| println!("gone"));
//! alert.present(&mut surface, &measurer);
//! ```

mod action;
mod animation;
mod controller;
mod surface;
mod theme;

pub use action::{ActionStyle, AlertAction, DismissSignal};
pub use animation::{
    AnimationSpec, AnimationToken, BACKDROP_FADE_DURATION, CHOREOGRAPHY_DELAY, Change, Curve,
    PANEL_HIDDEN_SCALE, PANEL_HIDE_DURATION, PANEL_SHOW_DURATION, PANEL_SPRING, SpringParams,
};
pub use controller::{AlertController, AlertStyle, PresentationState};
pub use surface::{AlertSurface, ElementId, HitRegion};
pub use theme::AlertTheme;
