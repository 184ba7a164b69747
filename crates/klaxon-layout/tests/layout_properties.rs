#![forbid(unsafe_code)]

//! Property tests for the layout engine across the whole input domain.

use klaxon_core::{FontSpec, MonospaceMetrics, Size};
use klaxon_layout::{AlertContent, GeometryPlan, LayoutMetrics, compute_layout};
use proptest::option;
use proptest::prelude::*;

fn plan_for(
    title: Option<&str>,
    message: Option<&str>,
    count: usize,
    viewport: Size,
) -> GeometryPlan {
    let mut content = AlertContent::new(count);
    if let Some(title) = title {
        content = content.title(title, FontSpec::system(18.0));
    }
    if let Some(message) = message {
        content = content.message(message, FontSpec::system(14.0));
    }
    compute_layout(
        &content,
        &LayoutMetrics::default(),
        viewport,
        &MonospaceMetrics::new(),
    )
}

proptest! {
    #[test]
    fn counts_match_action_count(
        title in option::of(".{0,80}"),
        message in option::of(".{0,200}"),
        count in 0usize..=8,
    ) {
        let plan = plan_for(title.as_deref(), message.as_deref(), count, Size::new(375.0, 667.0));
        prop_assert_eq!(plan.actions.len(), count);
        let expected_dividers = match count {
            0 => 0,
            1 => 1,
            2 => 2,
            n => n,
        };
        prop_assert_eq!(plan.dividers.len(), expected_dividers);
    }

    #[test]
    fn height_identity_holds(
        title in option::of(".{0,80}"),
        message in option::of(".{0,200}"),
        count in 0usize..=8,
    ) {
        let plan = plan_for(title.as_deref(), message.as_deref(), count, Size::new(375.0, 667.0));
        let rows = if count == 2 { 44.0 } else { 44.0 * count as f32 };
        prop_assert_eq!(plan.container.height, plan.text_box_height + rows);
        prop_assert!(plan.text_box_height >= 60.0);
    }

    #[test]
    fn child_frames_stay_inside_the_panel(
        title in option::of(".{0,80}"),
        message in option::of(".{0,200}"),
        count in 0usize..=8,
    ) {
        let plan = plan_for(title.as_deref(), message.as_deref(), count, Size::new(375.0, 667.0));
        for slot in &plan.actions {
            prop_assert!(slot.x >= 0.0);
            prop_assert!(slot.right() <= plan.container.width);
            prop_assert!(slot.y >= plan.text_box_height);
            prop_assert!(slot.bottom() <= plan.container.height);
        }
        for line in &plan.dividers {
            prop_assert!(line.y >= plan.text_box_height);
            prop_assert!(line.y <= plan.container.height);
            prop_assert!(line.right() <= plan.container.width);
        }
    }

    #[test]
    fn text_frames_require_text(
        message in option::of(".{0,200}"),
        count in 0usize..=4,
    ) {
        let plan = plan_for(None, message.as_deref(), count, Size::new(375.0, 667.0));
        prop_assert!(plan.title.is_none());
        match message.as_deref() {
            Some(text) if !text.is_empty() => prop_assert!(plan.message.is_some()),
            _ => prop_assert!(plan.message.is_none()),
        }
    }

    #[test]
    fn plans_are_bit_identical(
        title in option::of(".{0,80}"),
        message in option::of(".{0,200}"),
        count in 0usize..=8,
        width in 50.0f32..2000.0,
        height in 50.0f32..2000.0,
    ) {
        let viewport = Size::new(width, height);
        let first = plan_for(title.as_deref(), message.as_deref(), count, viewport);
        let second = plan_for(title.as_deref(), message.as_deref(), count, viewport);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plans_round_trip_through_serde(
        title in option::of(".{0,80}"),
        count in 0usize..=5,
    ) {
        let plan = plan_for(title.as_deref(), None, count, Size::new(375.0, 667.0));
        let json = serde_json::to_string(&plan).expect("serialize plan");
        let back: GeometryPlan = serde_json::from_str(&json).expect("deserialize plan");
        prop_assert_eq!(back, plan);
    }
}
