#![forbid(unsafe_code)]

//! In-memory host surface for driving alerts in tests.
//!
//! [`RecordingSurface`] implements [`klaxon_alert::AlertSurface`] by
//! recording every command instead of rendering. Scheduled animations land
//! in a queue the test drains by hand, so completion delivery (and
//! therefore every state transition) is fully deterministic:
//!
//! ```ignore
//! let mut surface = RecordingSurface::new(Size::new(375.0, 667.0));
//! alert.present(&mut surface, &MonospaceMetrics::new());
//! while let Some(scheduled) = surface.take_next_animation() {
//!     alert.animation_finished(scheduled.token, &mut surface);
//! }
//! ```

use std::collections::VecDeque;

use klaxon_alert::{AlertSurface, AnimationSpec, AnimationToken, ElementId, HitRegion};
use klaxon_core::{FontSpec, Rect, Rgba, Size};

/// What kind of element a `create_*` call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Panel { background: Rgba, corner_radius: f32 },
    TextBlock { text: String, font: FontSpec, color: Rgba },
    Line { color: Rgba },
    Button { label: String, font: FontSpec, color: Rgba },
}

/// One recorded element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub id: ElementId,
    pub frame: Rect,
    pub kind: ElementKind,
}

/// One animation scheduled but not yet completed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledAnimation {
    pub element: ElementId,
    pub spec: AnimationSpec,
    pub token: AnimationToken,
}

/// Records every surface command; renders nothing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Size,
    next_id: u64,
    elements: Vec<ElementRecord>,
    children: Vec<(ElementId, ElementId)>,
    hit_regions: Vec<(ElementId, HitRegion)>,
    scheduled: VecDeque<ScheduledAnimation>,
    removed: Vec<ElementId>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    fn mint(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId::new(self.next_id)
    }

    /// Every element ever created, in creation order.
    #[must_use]
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ElementRecord> {
        self.elements.iter().find(|record| record.id == id)
    }

    pub fn panels(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements
            .iter()
            .filter(|record| matches!(record.kind, ElementKind::Panel { .. }))
    }

    pub fn text_blocks(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements
            .iter()
            .filter(|record| matches!(record.kind, ElementKind::TextBlock { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements
            .iter()
            .filter(|record| matches!(record.kind, ElementKind::Line { .. }))
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements
            .iter()
            .filter(|record| matches!(record.kind, ElementKind::Button { .. }))
    }

    /// Direct children of `parent`, in attachment order.
    #[must_use]
    pub fn children_of(&self, parent: ElementId) -> Vec<ElementId> {
        self.children
            .iter()
            .filter(|(p, _)| *p == parent)
            .map(|(_, child)| *child)
            .collect()
    }

    /// The region `element` was registered under, if any.
    #[must_use]
    pub fn hit_region(&self, element: ElementId) -> Option<HitRegion> {
        self.hit_regions
            .iter()
            .find(|(id, _)| *id == element)
            .map(|(_, region)| *region)
    }

    /// The element registered under `region`, if any.
    #[must_use]
    pub fn element_with_region(&self, region: HitRegion) -> Option<ElementId> {
        self.hit_regions
            .iter()
            .find(|(_, r)| *r == region)
            .map(|(id, _)| *id)
    }

    /// Pop the oldest scheduled animation so the test can deliver its
    /// completion.
    pub fn take_next_animation(&mut self) -> Option<ScheduledAnimation> {
        self.scheduled.pop_front()
    }

    /// Animations scheduled and not yet taken.
    #[must_use]
    pub fn pending_animations(&self) -> &VecDeque<ScheduledAnimation> {
        &self.scheduled
    }

    /// Whether `element` or any ancestor has been removed.
    #[must_use]
    pub fn is_removed(&self, element: ElementId) -> bool {
        if self.removed.contains(&element) {
            return true;
        }
        self.children
            .iter()
            .find(|(_, child)| *child == element)
            .is_some_and(|(parent, _)| self.is_removed(*parent))
    }

    /// Elements passed directly to `remove`.
    #[must_use]
    pub fn removed_roots(&self) -> &[ElementId] {
        &self.removed
    }
}

impl AlertSurface for RecordingSurface {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn create_panel(&mut self, frame: Rect, background: Rgba, corner_radius: f32) -> ElementId {
        let id = self.mint();
        tracing::trace!(?id, ?frame, "create_panel");
        self.elements.push(ElementRecord {
            id,
            frame,
            kind: ElementKind::Panel {
                background,
                corner_radius,
            },
        });
        id
    }

    fn create_text_block(
        &mut self,
        frame: Rect,
        text: &str,
        font: FontSpec,
        color: Rgba,
    ) -> ElementId {
        let id = self.mint();
        tracing::trace!(?id, text, "create_text_block");
        self.elements.push(ElementRecord {
            id,
            frame,
            kind: ElementKind::TextBlock {
                text: text.to_owned(),
                font,
                color,
            },
        });
        id
    }

    fn create_line(&mut self, frame: Rect, color: Rgba) -> ElementId {
        let id = self.mint();
        tracing::trace!(?id, ?frame, "create_line");
        self.elements.push(ElementRecord {
            id,
            frame,
            kind: ElementKind::Line { color },
        });
        id
    }

    fn create_button(
        &mut self,
        frame: Rect,
        label: &str,
        font: FontSpec,
        color: Rgba,
    ) -> ElementId {
        let id = self.mint();
        tracing::trace!(?id, label, "create_button");
        self.elements.push(ElementRecord {
            id,
            frame,
            kind: ElementKind::Button {
                label: label.to_owned(),
                font,
                color,
            },
        });
        id
    }

    fn add_child(&mut self, parent: ElementId, child: ElementId) {
        self.children.push((parent, child));
    }

    fn register_hit(&mut self, element: ElementId, region: HitRegion) {
        tracing::trace!(?element, ?region, "register_hit");
        self.hit_regions.push((element, region));
    }

    fn animate(&mut self, element: ElementId, spec: AnimationSpec, token: AnimationToken) {
        tracing::trace!(?element, ?token, "animate");
        self.scheduled.push_back(ScheduledAnimation {
            element,
            spec,
            token,
        });
    }

    fn remove(&mut self, element: ElementId) {
        tracing::trace!(?element, "remove");
        self.removed.push(element);
    }
}
