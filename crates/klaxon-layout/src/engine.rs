#![forbid(unsafe_code)]

//! The layout algorithm.

use klaxon_core::{FontSpec, Rect, Size, TextMeasurer};
use smallvec::SmallVec;

use crate::metrics::{AlertContent, LayoutMetrics};
use crate::plan::GeometryPlan;

/// Compute the full geometry plan for an alert panel.
///
/// Total over its input domain: absent or empty text, zero actions, and
/// degenerate viewports all have a defined result. The two-action case is
/// special on purpose — two actions share a single row side by side, every
/// other count stacks full-height rows.
#[must_use]
pub fn compute_layout(
    content: &AlertContent<'_>,
    metrics: &LayoutMetrics,
    viewport: Size,
    measurer: &dyn TextMeasurer,
) -> GeometryPlan {
    let width = metrics.container_width;
    let inset = metrics.content_inset;
    let text_width = metrics.text_width();
    let count = content.action_count;

    let title_height = measured_height(content.title, content.title_font, text_width, measurer);
    let message_height =
        measured_height(content.message, content.message_font, text_width, measurer);

    let mut text_box = if title_height == 0.0 {
        inset
    } else {
        title_height + 2.0 * inset
    };
    if message_height != 0.0 {
        text_box += message_height + inset;
    }
    if text_box < metrics.min_text_height {
        text_box = metrics.min_text_height;
    }

    let actions_height = if count == 2 {
        metrics.action_row_height
    } else {
        metrics.action_row_height * count as f32
    };
    let total = text_box + actions_height;

    let container = Rect::centered_in(viewport, Size::new(width, total));

    // Text frames. The title offset centers the title alone when there is
    // no message, else the title+gap+message block as a whole.
    let title_y = if message_height == 0.0 {
        (text_box - title_height) / 2.0
    } else {
        (text_box - title_height - message_height - inset) / 2.0
    };
    let title =
        (title_height > 0.0).then(|| Rect::new(inset, title_y, text_width, title_height));

    let message_y = if title_height == 0.0 {
        (text_box - message_height) / 2.0
    } else {
        title_y + title_height + inset
    };
    let message =
        (message_height > 0.0).then(|| Rect::new(inset, message_y, text_width, message_height));

    let mut dividers: SmallVec<[Rect; 4]> = SmallVec::new();
    if count > 0 {
        dividers.push(Rect::new(0.0, text_box, width, metrics.hairline));
    }
    if count == 2 {
        dividers.push(Rect::new(
            width / 2.0 - metrics.hairline,
            text_box,
            metrics.hairline,
            total - text_box,
        ));
    }
    if count > 2 {
        for i in 1..count {
            dividers.push(Rect::new(
                0.0,
                text_box + i as f32 * metrics.action_row_height,
                width,
                metrics.hairline,
            ));
        }
    }

    let mut actions: SmallVec<[Rect; 4]> = SmallVec::new();
    if count == 2 {
        for i in 0..2 {
            actions.push(Rect::new(
                inset + i as f32 * width * 0.5,
                text_box + inset,
                width * 0.5 - 2.0 * inset,
                metrics.action_row_height - 2.0 * inset,
            ));
        }
    } else {
        for i in 0..count {
            actions.push(Rect::new(
                inset,
                text_box + i as f32 * metrics.action_row_height + inset,
                text_width,
                metrics.action_row_height - 2.0 * inset,
            ));
        }
    }

    GeometryPlan {
        container,
        text_box_height: text_box,
        title,
        message,
        dividers,
        actions,
    }
}

fn measured_height(
    text: Option<&str>,
    font: Option<FontSpec>,
    max_width: f32,
    measurer: &dyn TextMeasurer,
) -> f32 {
    match (text, font) {
        (Some(text), Some(font)) if !text.is_empty() => {
            measurer.wrapped_height(text, font, max_width)
        }
        _ => 0.0,
    }
}
