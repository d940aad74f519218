use std::time::{Duration, Instant};

use scrollintent::{Classifier, Config, Key, KeyScope, Metrics, Rect, QUIET_PERIOD};

fn container() -> Metrics {
    // 100x40 border box, 15-cell vertical track, 2-cell horizontal track.
    Metrics::new(Rect::new(0, 0, 100, 40), 85, 38)
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_wheel_then_scroll_then_quiet() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    // wheel; scrollTop 0 -> 40; scroll event
    assert_eq!(c.on_wheel(), Some(true));
    assert_eq!(c.on_scroll(&container().with_scroll(0, 40), t0), Some(true));

    // quiet period elapses with no further input
    let after = t0 + QUIET_PERIOD + Duration::from_millis(10);
    assert_eq!(c.poll(after), Some(false));
    assert!(!c.is_manual());
}

#[test]
fn test_programmatic_scroll_never_manual() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    // scrollTop jumps to 100 with no prior signal
    assert_eq!(c.on_scroll(&container().with_scroll(0, 100), t0), None);
    // and keeps moving
    assert_eq!(c.on_scroll(&container().with_scroll(0, 200), t0), None);
    assert_eq!(c.on_scroll(&container().with_scroll(10, 200), t0), None);
    assert!(!c.is_manual());
}

#[test]
fn test_non_moving_scroll_event_is_not_a_change() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    c.on_wheel();
    let m = container().with_scroll(0, 40);
    assert_eq!(c.on_scroll(&m, t0), Some(true));
    // Same offsets again: no delta, no notification.
    assert_eq!(c.on_scroll(&m, t0), None);
}

#[test]
fn test_touch_then_scroll() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    assert_eq!(c.on_touch_start(), Some(true));
    assert_eq!(c.on_scroll(&container().with_scroll(0, 7), t0), Some(true));
}

#[test]
fn test_keyboard_then_scroll_then_quiet_exactly_once() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    assert_eq!(c.on_key_down(Key::PageDown, false), Some(true));
    assert_eq!(c.on_scroll(&container().with_scroll(0, 20), t0), Some(true));

    let after = t0 + QUIET_PERIOD + Duration::from_millis(1);
    assert_eq!(c.poll(after), Some(false));
    // Repeated polls stay silent.
    assert_eq!(c.poll(after + Duration::from_millis(500)), None);
    assert_eq!(c.poll(after + Duration::from_secs(5)), None);
}

#[test]
fn test_scroll_re_arms_the_deadline() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    c.on_wheel();
    c.on_scroll(&container().with_scroll(0, 10), t0);

    // Another move 60ms in pushes the deadline out.
    let t1 = t0 + Duration::from_millis(60);
    c.on_scroll(&container().with_scroll(0, 20), t1);

    // 110ms after t0 the original deadline would have fired; the re-armed
    // one has not.
    assert_eq!(c.poll(t0 + Duration::from_millis(110)), None);
    assert!(c.is_manual());
    assert_eq!(c.poll(t1 + QUIET_PERIOD), Some(false));
}

// ============================================================================
// Scrollbar drag
// ============================================================================

#[test]
fn test_pointer_down_near_right_edge_starts_drag() {
    let mut c = Classifier::new(Config::new());
    let m = container();

    // (r.right - 2, r.top + 5) with a 15-cell vertical track
    assert_eq!(c.on_pointer_down(&m, 98, 5), Some(true));
    assert!(c.is_dragging_scrollbar());

    // pointer-up anywhere drops the drag immediately
    assert_eq!(c.on_pointer_up(Instant::now()), Some(false));
    assert!(!c.is_dragging_scrollbar());
}

#[test]
fn test_pointer_down_in_content_area_is_ignored() {
    let mut c = Classifier::new(Config::new());
    assert_eq!(c.on_pointer_down(&container(), 40, 20), None);
    assert!(!c.is_dragging_scrollbar());
}

#[test]
fn test_pointer_down_on_bottom_edge_starts_drag() {
    let mut c = Classifier::new(Config::new());
    // Horizontal track occupies the trailing 2 rows.
    assert_eq!(c.on_pointer_down(&container(), 40, 39), Some(true));
    assert!(c.is_dragging_scrollbar());
}

#[test]
fn test_pointer_leave_drops_the_drag() {
    let mut c = Classifier::new(Config::new());
    c.on_pointer_down(&container(), 98, 5);
    assert_eq!(c.on_pointer_leave(), Some(false));
    assert!(!c.is_dragging_scrollbar());
    // Leave without an active drag is a no-op.
    assert_eq!(c.on_pointer_leave(), None);
}

#[test]
fn test_drag_release_defers_to_deadline_while_wheel_episode_live() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    c.on_wheel();
    c.on_pointer_down(&container(), 98, 5);

    // Wheel episode still live: release does not notify false yet.
    assert_eq!(c.on_pointer_up(t0), None);
    assert!(c.is_manual());

    // The deadline armed by the release ends the episode.
    assert_eq!(c.poll(t0 + QUIET_PERIOD), Some(false));
}

#[test]
fn test_drag_move_classifies_manual() {
    let mut c = Classifier::new(Config::new());
    let t0 = Instant::now();

    c.on_pointer_down(&container(), 98, 5);
    assert_eq!(c.on_scroll(&container().with_scroll(0, 12), t0), Some(true));
}

#[test]
fn test_zero_thickness_scrollbar_never_hits() {
    let mut c = Classifier::new(Config::new());
    // Client box fills the border box: overlay scrollbars, no track.
    let m = Metrics::new(Rect::new(0, 0, 100, 40), 100, 40);
    assert_eq!(c.on_pointer_down(&m, 99, 5), None);
    assert_eq!(c.on_pointer_down(&m, 40, 39), None);
}

// ============================================================================
// Keyboard configuration
// ============================================================================

#[test]
fn test_ignore_keys_only_affects_keyboard_signal() {
    let mut c = Classifier::new(Config::new().ignore_key(Key::Home).ignore_key(Key::End));

    assert_eq!(c.on_key_down(Key::Home, false), None);
    assert_eq!(c.on_key_down(Key::End, false), None);
    assert_eq!(c.on_key_down(Key::Up, false), Some(true));

    // Wheel is not configurable and still signals.
    let mut c = Classifier::new(Config::new().ignore_key(Key::Home));
    assert_eq!(c.on_wheel(), Some(true));
}

#[test]
fn test_focused_scope_requires_focus() {
    let mut c = Classifier::new(Config::new().key_scope(KeyScope::Focused));
    let t0 = Instant::now();

    assert_eq!(c.on_key_down(Key::Down, false), None);
    assert_eq!(c.on_scroll(&container().with_scroll(0, 4), t0), None);

    assert_eq!(c.on_key_down(Key::Down, true), Some(true));
    assert_eq!(c.on_scroll(&container().with_scroll(0, 8), t0), Some(true));
}

#[test]
fn test_custom_quiet_period() {
    let mut c = Classifier::new(Config::new().quiet_period(Duration::from_millis(250)));
    let t0 = Instant::now();

    c.on_wheel();
    c.on_scroll(&container().with_scroll(0, 5), t0);

    assert_eq!(c.poll(t0 + Duration::from_millis(150)), None);
    assert_eq!(c.poll(t0 + Duration::from_millis(251)), Some(false));
}
