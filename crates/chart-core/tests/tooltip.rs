// File: crates/chart-core/tests/tooltip.rs
// Purpose: Hover state machine driven without a live input device.

use dashboard_chart_core::tooltip::{tooltip_label, tooltip_text, DEFAULT_OFFSET};
use dashboard_chart_core::{
    render_line_chart, ChartLayout, DataPoint, MarkerId, Point, PointerEvent, Scene, Series, TooltipController,
    TooltipState,
};

fn scene() -> Scene {
    let series = Series::time(vec![
        DataPoint::new(1_000.0, 100.0, "/school/div-01/ascii-art"),
        DataPoint::new(2_000.0, 50.0, "/school/div-01/go-reloaded"),
        DataPoint::new(3_000.0, 150.0, "/school/div-01/lem-in"),
    ]);
    render_line_chart(&series, &ChartLayout::xp_progress()).expect("render")
}

/// Canvas position of a marker centre.
fn canvas_pos(scene: &Scene, id: usize) -> Point {
    let m = &scene.markers[id];
    Point::new(m.center.x + scene.origin.x, m.center.y + scene.origin.y)
}

#[test]
fn starts_hidden() {
    let t = TooltipController::new();
    assert_eq!(*t.state(), TooltipState::Hidden);
    assert!(t.text().is_none());
}

#[test]
fn enter_shows_last_path_segment_and_value() {
    let scene = scene();
    let mut t = TooltipController::new();
    let at = Point::new(300.0, 200.0);
    t.handle(&scene, PointerEvent::Enter { marker: MarkerId(1), at });
    assert!(t.is_visible());
    assert_eq!(t.text(), Some("go-reloaded: 0.15"));
    assert_eq!(t.position(), Some(Point::new(305.0, 172.0)));
}

#[test]
fn leave_hides() {
    let scene = scene();
    let mut t = TooltipController::new();
    t.handle(&scene, PointerEvent::Enter { marker: MarkerId(0), at: Point::new(0.0, 0.0) });
    t.handle(&scene, PointerEvent::Leave { marker: MarkerId(0) });
    assert_eq!(*t.state(), TooltipState::Hidden);
}

#[test]
fn move_follows_pointer_only_while_visible() {
    let scene = scene();
    let mut t = TooltipController::new();
    t.handle(&scene, PointerEvent::Move { at: Point::new(10.0, 10.0) });
    assert!(!t.is_visible());

    t.handle(&scene, PointerEvent::Enter { marker: MarkerId(2), at: Point::new(10.0, 10.0) });
    t.handle(&scene, PointerEvent::Move { at: Point::new(50.0, 60.0) });
    assert_eq!(t.position(), Some(Point::new(50.0 + DEFAULT_OFFSET.x, 60.0 + DEFAULT_OFFSET.y)));
}

#[test]
fn rapid_enter_overwrites_and_stale_leave_is_ignored() {
    let scene = scene();
    let mut t = TooltipController::new();
    t.handle(&scene, PointerEvent::Enter { marker: MarkerId(0), at: Point::new(1.0, 1.0) });
    t.handle(&scene, PointerEvent::Enter { marker: MarkerId(1), at: Point::new(2.0, 2.0) });
    assert_eq!(t.active_marker(), Some(MarkerId(1)));
    // the late leave for the first marker must not hide the second
    t.handle(&scene, PointerEvent::Leave { marker: MarkerId(0) });
    assert_eq!(t.text(), Some("go-reloaded: 0.15"));
    t.handle(&scene, PointerEvent::Leave { marker: MarkerId(1) });
    assert!(!t.is_visible());
}

#[test]
fn unknown_marker_enter_is_ignored() {
    let scene = scene();
    let mut t = TooltipController::new();
    t.handle(&scene, PointerEvent::Enter { marker: MarkerId(99), at: Point::new(1.0, 1.0) });
    assert!(!t.is_visible());
}

#[test]
fn tracking_raw_motion_hit_tests_markers() {
    let scene = scene();
    let mut t = TooltipController::new();

    t.track(&scene, Point::new(-100.0, -100.0));
    assert!(!t.is_visible());

    let over_first = canvas_pos(&scene, 0);
    t.track(&scene, over_first);
    assert_eq!(t.active_marker(), Some(MarkerId(0)));
    assert_eq!(t.text(), Some("ascii-art: 0.1"));

    // small move inside the same marker keeps it and follows the pointer
    let nudged = over_first.offset(2.0, -2.0);
    t.track(&scene, nudged);
    assert_eq!(t.active_marker(), Some(MarkerId(0)));
    assert_eq!(t.position(), Some(nudged.offset(DEFAULT_OFFSET.x, DEFAULT_OFFSET.y)));

    t.track(&scene, canvas_pos(&scene, 2));
    assert_eq!(t.text(), Some("lem-in: 0.3"));

    t.track(&scene, Point::new(scene.width / 2.0, scene.height + 50.0));
    assert!(!t.is_visible());
}

#[test]
fn label_keeps_only_the_last_segment() {
    assert_eq!(tooltip_label("/school/div-01/ascii-art"), "ascii-art");
    assert_eq!(tooltip_label("plain"), "plain");
    assert_eq!(tooltip_label("/trailing/"), "");
    assert_eq!(tooltip_text(&DataPoint::new(0.0, 2.5, "/a/b")), "b: 2.5");
}
