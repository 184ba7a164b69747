#![forbid(unsafe_code)]

//! What `present` actually puts on the surface.

use klaxon_alert::{
    ActionStyle, AlertAction, AlertController, AlertStyle, AlertTheme, AnimationSpec,
    AnimationToken, HitRegion,
};
use klaxon_core::{MonospaceMetrics, Rect, Rgba, Size};
use klaxon_harness::{ElementKind, RecordingSurface};
use tracing_test::traced_test;

const VIEWPORT: Size = Size::new(375.0, 667.0);

fn surface() -> RecordingSurface {
    RecordingSurface::new(VIEWPORT)
}

#[test]
fn confirm_alert_materializes_full_geometry() {
    let mut alert = AlertController::new(
        Some("Delete?"),
        Some("This cannot be undone."),
        AlertStyle::Alert,
    );
    alert.add_action(AlertAction::new("Cancel", ActionStyle::Cancel));
    alert.add_action(AlertAction::new("Delete", ActionStyle::Destructive));

    let mut surface = surface();
    alert.present(&mut surface, &MonospaceMetrics::new());

    // Backdrop covers the viewport; panel is the centered 270x104 rounded
    // rectangle (a one-line title and one-line message clamp to the
    // 60-unit text box, plus one shared action row).
    let panels: Vec<_> = surface.panels().collect();
    assert_eq!(panels.len(), 2);
    let backdrop = panels[0];
    let panel = panels[1];
    assert_eq!(backdrop.frame, Rect::new(0.0, 0.0, 375.0, 667.0));
    assert_eq!(
        backdrop.kind,
        ElementKind::Panel {
            background: Rgba::BLACK.with_opacity(0.4),
            corner_radius: 0.0,
        }
    );
    assert_eq!(panel.frame, Rect::new(53.0, 282.0, 270.0, 104.0));
    assert_eq!(
        panel.kind,
        ElementKind::Panel {
            background: Rgba::WHITE,
            corner_radius: 11.0,
        }
    );

    // Title and message blocks inside the text box.
    let blocks: Vec<_> = surface.text_blocks().collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].frame, Rect::new(4.0, 8.0, 262.0, 22.0));
    assert_eq!(blocks[1].frame, Rect::new(4.0, 34.0, 262.0, 18.0));
    match &blocks[0].kind {
        ElementKind::TextBlock { text, color, .. } => {
            assert_eq!(text, "Delete?");
            assert_eq!(*color, Rgba::BLACK);
        }
        other => panic!("expected title text block, got {other:?}"),
    }

    // One horizontal divider under the text box, one vertical divider at
    // the midpoint.
    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].frame, Rect::new(0.0, 60.0, 270.0, 0.5));
    assert_eq!(lines[1].frame, Rect::new(134.5, 60.0, 0.5, 44.0));

    // Two side-by-side buttons with style-resolved colors.
    let buttons: Vec<_> = surface.buttons().collect();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].frame, Rect::new(4.0, 64.0, 127.0, 36.0));
    assert_eq!(buttons[1].frame, Rect::new(139.0, 64.0, 127.0, 36.0));
    match &buttons[0].kind {
        ElementKind::Button { label, color, .. } => {
            assert_eq!(label, "Cancel");
            assert_eq!(*color, Rgba::BLUE);
        }
        other => panic!("expected cancel button, got {other:?}"),
    }
    match &buttons[1].kind {
        ElementKind::Button { label, color, .. } => {
            assert_eq!(label, "Delete");
            assert_eq!(*color, Rgba::RED);
        }
        other => panic!("expected delete button, got {other:?}"),
    }
    assert_eq!(surface.hit_region(buttons[0].id), Some(HitRegion::Action(0)));
    assert_eq!(surface.hit_region(buttons[1].id), Some(HitRegion::Action(1)));

    // With actions present, the backdrop is not tappable.
    assert_eq!(surface.element_with_region(HitRegion::Backdrop), None);

    // Panel hangs off the backdrop; everything else hangs off the panel.
    assert_eq!(surface.children_of(backdrop.id), vec![panel.id]);
    assert_eq!(surface.children_of(panel.id).len(), 6);
}

#[traced_test]
#[test]
fn textless_alert_gets_a_blank_title() {
    let mut alert = AlertController::new(None, None, AlertStyle::Alert);
    let mut surface = surface();
    alert.present(&mut surface, &MonospaceMetrics::new());

    assert!(logs_contain("substituting a blank title"));

    // Panel clamps to the 60-unit minimum with no actions below it.
    let panels: Vec<_> = surface.panels().collect();
    assert_eq!(panels[1].frame.height, 60.0);
    assert!(surface.lines().next().is_none());
    assert!(surface.buttons().next().is_none());

    // The substituted blank title is a real (centered) text block.
    let blocks: Vec<_> = surface.text_blocks().collect();
    assert_eq!(blocks.len(), 1);
    match &blocks[0].kind {
        ElementKind::TextBlock { text, .. } => assert_eq!(text, " "),
        other => panic!("expected blank title block, got {other:?}"),
    }

    // Zero actions makes the backdrop tappable.
    assert_eq!(
        surface.element_with_region(HitRegion::Backdrop),
        Some(panels[0].id)
    );
}

#[traced_test]
#[test]
fn missing_title_font_omits_the_block_with_a_diagnostic() {
    let mut alert = AlertController::new(Some("Hi"), None, AlertStyle::Alert)
        .theme(AlertTheme::default().title_font(None));
    alert.add_action(AlertAction::new("OK", ActionStyle::Default));

    let mut surface = surface();
    alert.present(&mut surface, &MonospaceMetrics::new());

    assert!(logs_contain("title font not configured"));
    assert!(surface.text_blocks().next().is_none());
    // Presentation proceeds: panel, divider, and button all exist.
    assert_eq!(surface.panels().count(), 2);
    assert_eq!(surface.lines().count(), 1);
    assert_eq!(surface.buttons().count(), 1);
}

#[test]
fn action_overrides_flow_through_to_buttons() {
    let mut alert = AlertController::new(Some("Hi"), None, AlertStyle::Alert);
    alert.add_action(
        AlertAction::new("Later", ActionStyle::Default).text_color(Rgba::rgb(9, 9, 9)),
    );

    let mut surface = surface();
    alert.present(&mut surface, &MonospaceMetrics::new());

    let button = surface.buttons().next().expect("button");
    match &button.kind {
        ElementKind::Button { color, .. } => assert_eq!(*color, Rgba::rgb(9, 9, 9)),
        other => panic!("expected button, got {other:?}"),
    }
}

#[test]
fn present_schedules_the_entrance_choreography() {
    let mut alert = AlertController::new(Some("Hi"), None, AlertStyle::Alert);
    let mut surface = surface();
    alert.present(&mut surface, &MonospaceMetrics::new());

    let panels: Vec<_> = surface.panels().map(|record| record.id).collect();
    let first = surface.take_next_animation().expect("backdrop animation");
    let second = surface.take_next_animation().expect("panel animation");
    assert!(surface.take_next_animation().is_none());

    // Backdrop fade is scheduled first and targets the backdrop element;
    // the panel spring starts after its lead delay.
    assert_eq!(first.element, panels[0]);
    assert_eq!(first.token, AnimationToken::ShowBackdrop);
    assert_eq!(first.spec, AnimationSpec::show_backdrop());
    assert_eq!(second.element, panels[1]);
    assert_eq!(second.token, AnimationToken::ShowPanel);
    assert_eq!(second.spec, AnimationSpec::show_panel());
}

#[traced_test]
#[test]
fn present_is_single_shot() {
    let mut alert = AlertController::new(Some("Hi"), None, AlertStyle::Alert);
    let mut surface = surface();
    alert.present(&mut surface, &MonospaceMetrics::new());
    let created = surface.elements().len();

    alert.present(&mut surface, &MonospaceMetrics::new());
    assert!(logs_contain("present called more than once"));
    assert_eq!(surface.elements().len(), created);
}
