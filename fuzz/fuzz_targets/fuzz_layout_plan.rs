#![no_main]

//! The layout engine is a total function: any content, any metrics, any
//! viewport must produce a plan without panicking, and the structural
//! invariants must hold on whatever comes out.

use arbitrary::Arbitrary;
use klaxon_core::{FontSpec, MonospaceMetrics, Size};
use klaxon_layout::{AlertContent, LayoutMetrics, compute_layout};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    title: Option<String>,
    title_size: u8,
    message: Option<String>,
    message_size: u8,
    action_count: u8,
    container_width: u16,
    content_inset: u8,
    min_text_height: u16,
    action_row_height: u16,
    viewport_width: u16,
    viewport_height: u16,
}

fuzz_target!(|input: Input| {
    let mut content = AlertContent::new(usize::from(input.action_count));
    if let Some(title) = input.title.as_deref() {
        content = content.title(title, FontSpec::system(f32::from(input.title_size)));
    }
    if let Some(message) = input.message.as_deref() {
        content = content.message(message, FontSpec::system(f32::from(input.message_size)));
    }

    let metrics = LayoutMetrics {
        container_width: f32::from(input.container_width),
        content_inset: f32::from(input.content_inset),
        min_text_height: f32::from(input.min_text_height),
        action_row_height: f32::from(input.action_row_height),
        hairline: 0.5,
    };
    let viewport = Size::new(
        f32::from(input.viewport_width),
        f32::from(input.viewport_height),
    );

    let plan = compute_layout(&content, &metrics, viewport, &MonospaceMetrics::new());

    let count = usize::from(input.action_count);
    assert_eq!(plan.actions.len(), count);
    let expected_dividers = match count {
        0 => 0,
        1 => 1,
        2 => 2,
        n => n,
    };
    assert_eq!(plan.dividers.len(), expected_dividers);
    assert!(plan.text_box_height >= metrics.min_text_height);
    let rows = if count == 2 {
        metrics.action_row_height
    } else {
        metrics.action_row_height * count as f32
    };
    assert_eq!(plan.container.height, plan.text_box_height + rows);
});
