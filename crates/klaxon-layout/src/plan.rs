#![forbid(unsafe_code)]

//! The layout engine's output.

use klaxon_core::Rect;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A complete geometry plan for one alert panel.
///
/// `container` is in viewport coordinates; every other frame is relative to
/// the container's origin. Plans are ephemeral: each layout pass produces a
/// whole new value, nothing is patched in place.
///
/// # Invariants
///
/// - `container.height` equals the text box height plus the action rows
///   exactly; divider placement introduces no drift.
/// - `actions.len()` equals the requested action count.
/// - `title`/`message` are `None` whenever their measured height is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryPlan {
    /// Panel bounds, centered in the viewport, origin rounded to whole
    /// units.
    pub container: Rect,
    /// Height of the text box segment (title + message + insets, clamped to
    /// the configured minimum).
    pub text_box_height: f32,
    /// Title frame, when the title occupies height.
    pub title: Option<Rect>,
    /// Message frame, when the message occupies height.
    pub message: Option<Rect>,
    /// Hairline dividers: the line under the text box first, then interior
    /// lines in top-to-bottom (or the single vertical line for the
    /// two-action row).
    pub dividers: SmallVec<[Rect; 4]>,
    /// One slot per action, in display order.
    pub actions: SmallVec<[Rect; 4]>,
}
