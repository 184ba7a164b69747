#![forbid(unsafe_code)]

//! The host rendering seam.
//!
//! Klaxon never draws. [`crate::AlertController`] turns a geometry plan
//! into calls on an [`AlertSurface`], and the host maps those onto whatever
//! it renders with. Elements are opaque [`ElementId`]s minted by the host;
//! the controller only holds onto the ones it needs to animate or remove.

use klaxon_core::{FontSpec, Rect, Rgba, Size};

use crate::animation::{AnimationSpec, AnimationToken};

/// Opaque handle for a host-side element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What a tap on an element means to the controller.
///
/// Hosts route input by registered region: a tap landing on an element
/// registered as `Action(i)` becomes
/// [`crate::AlertController::activate_action`] with index `i`; a tap on the
/// `Backdrop` element becomes [`crate::AlertController::handle_tap`] with
/// the tap point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    Backdrop,
    Action(usize),
}

/// Host surface the controller materializes onto.
///
/// Frames passed to the `create_*` methods are in the parent's coordinate
/// space once the element is attached with [`AlertSurface::add_child`];
/// elements created but never attached sit in viewport coordinates.
/// Removing an element also removes every element attached under it.
pub trait AlertSurface {
    /// Current viewport extent, in logical units.
    fn viewport_size(&self) -> Size;

    /// Create a filled rounded rectangle.
    fn create_panel(&mut self, frame: Rect, background: Rgba, corner_radius: f32) -> ElementId;

    /// Create a word-wrapped, center-aligned text block.
    fn create_text_block(
        &mut self,
        frame: Rect,
        text: &str,
        font: FontSpec,
        color: Rgba,
    ) -> ElementId;

    /// Create a filled line segment.
    fn create_line(&mut self, frame: Rect, color: Rgba) -> ElementId;

    /// Create a tappable labeled button.
    fn create_button(
        &mut self,
        frame: Rect,
        label: &str,
        font: FontSpec,
        color: Rgba,
    ) -> ElementId;

    /// Attach `child` under `parent`.
    fn add_child(&mut self, parent: ElementId, child: ElementId);

    /// Tag an element so the host can route taps on it.
    fn register_hit(&mut self, element: ElementId, region: HitRegion);

    /// Schedule an animation; the host reports completion through
    /// [`crate::AlertController::animation_finished`] with `token`.
    fn animate(&mut self, element: ElementId, spec: AnimationSpec, token: AnimationToken);

    /// Remove an element and its subtree from the surface.
    fn remove(&mut self, element: ElementId);
}
