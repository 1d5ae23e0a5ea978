mod common;

use std::time::{Duration, Instant};

use common::overlay;
use scrolling::prelude::*;

fn down(x: f32, y: f32) -> Event {
    Event::MouseDown {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn up(x: f32, y: f32) -> Event {
    Event::MouseUp {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn horizontal(builder: OverlayBuilder) -> ScrollOverlay<common::MockArea> {
    // x track spans (0, 192) - (200, 200); bar is 67px, travel 133px
    overlay(
        Size::new(200.0, 200.0),
        Size::new(600.0, 200.0),
        builder.interactive(true),
    )
}

#[test]
fn test_drag_to_end_scrolls_to_max() {
    let mut overlay = horizontal(OverlayBuilder::new());
    let now = Instant::now();

    assert_eq!(overlay.event(&down(10.0, 195.0)), EventResponse::Handled);
    assert!(overlay.is_dragging());

    assert_eq!(
        overlay.event(&Event::MouseMove { x: 143.0, y: 195.0 }),
        EventResponse::Handled
    );
    // Written on the next frame only
    assert!(overlay.host().writes.is_empty());
    assert!(overlay.needs_frame());

    overlay.frame(now);
    assert_eq!(overlay.host().offset.x, 400.0);
    assert_eq!(overlay.host().writes, vec![(Axis::X, 400.0)]);
    assert_eq!(overlay.axis(Axis::X).unwrap().bar.offset, 133.0);

    overlay.event(&Event::MouseMove { x: 10.0, y: 195.0 });
    overlay.frame(now);
    assert_eq!(overlay.host().offset.x, 0.0);
    assert_eq!(overlay.axis(Axis::X).unwrap().bar.offset, 0.0);
}

#[test]
fn test_drag_is_clamped_to_track() {
    let mut overlay = horizontal(OverlayBuilder::new());
    let now = Instant::now();

    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseMove { x: 900.0, y: 40.0 });
    overlay.frame(now);
    assert_eq!(overlay.host().writes.last(), Some(&(Axis::X, 400.0)));

    overlay.event(&Event::MouseMove { x: -300.0, y: 40.0 });
    overlay.frame(now);
    assert_eq!(overlay.host().writes.last(), Some(&(Axis::X, 0.0)));
}

#[test]
fn test_drag_moves_coalesce_per_frame() {
    let mut overlay = horizontal(OverlayBuilder::new());

    overlay.event(&down(10.0, 195.0));
    for x in [20.0, 40.0, 60.0, 76.5] {
        overlay.event(&Event::MouseMove { x, y: 195.0 });
    }
    overlay.frame(Instant::now());

    let writes = &overlay.host().writes;
    assert_eq!(writes.len(), 1);
    let (axis, offset) = writes[0];
    assert_eq!(axis, Axis::X);
    assert!((offset - 200.0).abs() < 0.01);
}

#[test]
fn test_mouse_up_ends_drag_session() {
    let mut overlay = horizontal(OverlayBuilder::new());

    overlay.event(&down(10.0, 195.0));
    // Released far outside the overlay
    assert_eq!(overlay.event(&up(-50.0, 900.0)), EventResponse::Handled);
    assert!(!overlay.is_dragging());

    assert_eq!(
        overlay.event(&Event::MouseMove { x: 150.0, y: 195.0 }),
        EventResponse::Ignored
    );
    overlay.frame(Instant::now());
    assert!(overlay.host().writes.is_empty());
}

#[test]
fn test_drag_survives_leaving_surface() {
    let mut overlay = horizontal(OverlayBuilder::new());

    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseLeave);
    assert!(overlay.is_dragging());

    overlay.event(&Event::MouseMove { x: 143.0, y: 500.0 });
    overlay.frame(Instant::now());
    assert_eq!(overlay.host().offset.x, 400.0);
    overlay.event(&up(143.0, 500.0));
    assert!(!overlay.is_dragging());
}

#[test]
fn test_new_drag_uses_fresh_start_offset() {
    let mut overlay = horizontal(OverlayBuilder::new());
    let now = Instant::now();

    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseMove { x: 76.5, y: 195.0 });
    overlay.frame(now);
    overlay.event(&up(76.5, 195.0));
    let bar = overlay.axis(Axis::X).unwrap().bar.offset;
    assert_eq!(bar, 67.0);

    // Grab the bar near its right end this time
    overlay.event(&down(bar + 60.0, 195.0));
    overlay.event(&Event::MouseMove {
        x: bar + 60.0,
        y: 195.0,
    });
    overlay.frame(now);
    assert_eq!(overlay.axis(Axis::X).unwrap().bar.offset, 67.0);
}

#[test]
fn test_track_click_centers_bar() {
    let mut overlay = horizontal(OverlayBuilder::new());

    assert_eq!(overlay.event(&down(150.0, 195.0)), EventResponse::Handled);
    assert!(!overlay.is_dragging());

    let expected = (150.0 - 67.0 / 2.0) / 133.0 * 400.0;
    assert!((overlay.host().offset.x - expected).abs() < 0.01);

    overlay.frame(Instant::now());
    let bar = overlay.axis(Axis::X).unwrap();
    assert!((bar.bar.offset + bar.bar.size / 2.0 - 150.0).abs() <= 1.0);
}

#[test]
fn test_track_click_near_edges_clamps() {
    let mut overlay = horizontal(OverlayBuilder::new());
    overlay.track_click(Axis::X, 199.0);
    assert_eq!(overlay.host().offset.x, 400.0);
    assert_eq!(overlay.host().writes.last(), Some(&(Axis::X, 400.0)));
}

#[test]
fn test_track_click_on_bar_is_ignored() {
    let mut overlay = horizontal(OverlayBuilder::new());
    assert!(!overlay.track_click(Axis::X, 30.0));
    assert!(overlay.host().writes.is_empty());
}

#[test]
fn test_track_click_pages() {
    let mut overlay = horizontal(OverlayBuilder::new().track_click(TrackClick::Page));
    let now = Instant::now();

    assert!(overlay.track_click(Axis::X, 150.0));
    assert_eq!(overlay.host().offset.x, 200.0);
    overlay.frame(now);

    assert!(overlay.track_click(Axis::X, 190.0));
    assert_eq!(overlay.host().offset.x, 400.0);
    overlay.frame(now);
    assert_eq!(overlay.axis(Axis::X).unwrap().bar.offset, 133.0);

    assert!(overlay.track_click(Axis::X, 10.0));
    assert_eq!(overlay.host().offset.x, 200.0);
}

#[test]
fn test_animated_track_click() {
    let transition = Transition::new(Duration::from_millis(100), TimingFunction::Linear);
    let mut overlay = horizontal(
        OverlayBuilder::new()
            .track_click(TrackClick::Page)
            .animate(transition),
    );
    let t0 = Instant::now();

    assert!(overlay.track_click(Axis::X, 150.0));
    assert_eq!(overlay.host().offset.x, 0.0);
    assert!(overlay.needs_frame());

    overlay.frame(t0);
    overlay.frame(t0 + Duration::from_millis(50));
    assert!((overlay.host().offset.x - 100.0).abs() < 0.5);

    // A second click pages on from the pending target, not the current offset
    assert!(overlay.track_click(Axis::X, 190.0));
    overlay.frame(t0 + Duration::from_millis(50));
    overlay.frame(t0 + Duration::from_millis(150));
    assert_eq!(overlay.host().offset.x, 400.0);

    overlay.frame(t0 + Duration::from_millis(160));
    assert!(!overlay.needs_frame());
}

#[test]
fn test_drag_cancels_animation() {
    let transition = Transition::new(Duration::from_millis(100), TimingFunction::Linear);
    let mut overlay = horizontal(OverlayBuilder::new().animate(transition));
    let t0 = Instant::now();

    overlay.track_click(Axis::X, 190.0);
    overlay.frame(t0);
    overlay.event(&down(5.0, 195.0));
    overlay.frame(t0 + Duration::from_millis(200));
    assert_eq!(overlay.host().offset.x, 0.0);
}

#[test]
fn test_passive_overlay_ignores_pointer() {
    let mut overlay = overlay(
        Size::new(200.0, 200.0),
        Size::new(600.0, 200.0),
        OverlayBuilder::new(),
    );
    assert_eq!(overlay.event(&down(10.0, 195.0)), EventResponse::Ignored);
    assert!(!overlay.begin_drag(Axis::X, 10.0));
    assert!(!overlay.track_click(Axis::X, 150.0));
    assert!(!overlay.is_dragging());
    assert!(overlay.host().writes.is_empty());
}

#[test]
fn test_clicks_outside_tracks_are_ignored() {
    let mut overlay = horizontal(OverlayBuilder::new());
    assert_eq!(overlay.event(&down(100.0, 100.0)), EventResponse::Ignored);
    assert_eq!(
        overlay.event(&Event::MouseDown {
            x: 150.0,
            y: 195.0,
            button: MouseButton::Right,
        }),
        EventResponse::Ignored
    );
}

#[test]
fn test_hover_keeps_bars_active() {
    let mut overlay = horizontal(OverlayBuilder::new().hide_delay(Duration::from_millis(500)));
    let t0 = Instant::now();

    overlay.host_mut().scroll_natively(Axis::X, 100.0);
    overlay.on_scroll();
    overlay.frame(t0);
    assert!(overlay.is_active());

    overlay.event(&Event::MouseMove { x: 150.0, y: 196.0 });
    assert_eq!(overlay.hovered(), Some(Axis::X));
    assert_eq!(overlay.next_deadline(), None);
    overlay.poll(t0 + Duration::from_secs(10));
    assert!(overlay.is_active());

    let t1 = t0 + Duration::from_secs(10);
    overlay.event(&Event::MouseLeave);
    assert_eq!(overlay.hovered(), None);
    assert!(overlay.needs_frame());
    overlay.frame(t1);
    assert_eq!(overlay.next_deadline(), Some(t1 + Duration::from_millis(500)));

    overlay.poll(t1 + Duration::from_millis(500));
    assert!(!overlay.is_active());
}

#[test]
fn test_removing_axis_ends_drag() {
    let mut overlay = horizontal(OverlayBuilder::new());
    overlay.event(&down(10.0, 195.0));
    assert!(overlay.is_dragging());

    overlay.host_mut().scroll.width = 200.0;
    overlay.update();
    assert!(overlay.axis(Axis::X).is_none());
    assert!(!overlay.is_dragging());
}

#[test]
fn test_vertical_drag() {
    let mut overlay = overlay(
        Size::new(200.0, 200.0),
        Size::new(200.0, 800.0),
        OverlayBuilder::new().interactive(true),
    );
    // y track spans (192, 0) - (200, 200); bar is 50px, travel 150px
    let y = overlay.axis(Axis::Y).unwrap();
    assert_eq!(y.bar.size, 50.0);
    assert_eq!(y.max_bar_offset, 150.0);

    overlay.event(&down(196.0, 20.0));
    overlay.event(&Event::MouseMove { x: 10.0, y: 95.0 });
    overlay.frame(Instant::now());
    assert_eq!(overlay.host().offset.y, 300.0);
    assert_eq!(overlay.axis(Axis::Y).unwrap().bar.offset, 75.0);
}

#[test]
fn test_release_off_track_restarts_hide_timer() {
    let mut overlay = horizontal(OverlayBuilder::new().hide_delay(Duration::from_millis(500)));
    let t0 = Instant::now();

    overlay.event(&Event::MouseMove { x: 10.0, y: 195.0 });
    assert_eq!(overlay.hovered(), Some(Axis::X));
    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseMove { x: 100.0, y: 50.0 });
    assert_eq!(overlay.hovered(), None);
    overlay.frame(t0);
    assert!(overlay.is_active());

    overlay.event(&up(100.0, 50.0));
    assert!(overlay.needs_frame());
    let t1 = t0 + Duration::from_millis(100);
    overlay.frame(t1);
    assert_eq!(overlay.next_deadline(), Some(t1 + Duration::from_millis(500)));

    overlay.poll(t1 + Duration::from_millis(500));
    assert!(!overlay.is_active());
}

#[test]
fn test_release_on_track_keeps_bars_active() {
    let mut overlay = horizontal(OverlayBuilder::new());
    let t0 = Instant::now();

    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseMove { x: 60.0, y: 195.0 });
    overlay.frame(t0);
    overlay.event(&up(60.0, 195.0));
    assert_eq!(overlay.hovered(), Some(Axis::X));
    assert!(!overlay.needs_frame());

    overlay.poll(t0 + Duration::from_secs(10));
    assert!(overlay.is_active());
}

#[test]
fn test_held_drag_keeps_bars_active() {
    let mut overlay = horizontal(OverlayBuilder::new().hide_delay(Duration::from_millis(500)));
    let t0 = Instant::now();

    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseMove { x: 60.0, y: 120.0 });
    overlay.frame(t0);
    assert!(overlay.is_active());
    assert_eq!(overlay.next_deadline(), None);

    // Pointer held still, well past the hide delay
    let t1 = t0 + Duration::from_secs(2);
    overlay.poll(t1);
    assert!(overlay.is_dragging());
    assert!(overlay.is_active());

    overlay.event(&up(60.0, 120.0));
    overlay.frame(t1);
    overlay.poll(t1 + Duration::from_millis(500));
    assert!(!overlay.is_active());
}

#[test]
fn test_wheel_over_track_is_handled() {
    let mut overlay = horizontal(OverlayBuilder::new());
    let wheel = |x, y| Event::Wheel {
        x,
        y,
        delta_x: 0.0,
        delta_y: 40.0,
    };

    assert_eq!(overlay.event(&wheel(150.0, 195.0)), EventResponse::Handled);
    assert_eq!(overlay.event(&wheel(150.0, 100.0)), EventResponse::Ignored);
    assert!(overlay.host().writes.is_empty());
}

#[test]
fn test_hover_indicator_follows_pointer() {
    let mut overlay = overlay(
        Size::new(200.0, 200.0),
        Size::new(600.0, 200.0),
        OverlayBuilder::new().indicator(Indicator::Hover),
    );
    let t0 = Instant::now();
    assert!(!overlay.bars_visible());
    overlay.take_changes();

    // Passive overlays still react to the area hover
    assert_eq!(overlay.event(&Event::MouseEnter), EventResponse::Ignored);
    assert!(overlay.bars_visible());
    assert!(overlay.take_changes().contains(Changes::VISIBILITY));

    overlay.event(&Event::MouseLeave);
    assert!(overlay.bars_visible());
    assert!(overlay.needs_frame());
    overlay.frame(t0);
    assert_eq!(overlay.next_deadline(), Some(t0 + Duration::from_millis(500)));

    overlay.event(&Event::MouseEnter);
    assert_eq!(overlay.next_deadline(), None);

    overlay.event(&Event::MouseLeave);
    overlay.frame(t0);
    overlay.poll(t0 + Duration::from_millis(499));
    assert!(overlay.bars_visible());
    overlay.poll(t0 + Duration::from_millis(500));
    assert!(!overlay.bars_visible());
    assert!(overlay.take_changes().contains(Changes::VISIBILITY));
}

#[test]
fn test_hover_indicator_stays_during_drag() {
    let mut overlay = horizontal(OverlayBuilder::new().indicator(Indicator::Hover));
    let t0 = Instant::now();

    overlay.event(&Event::MouseEnter);
    overlay.event(&down(10.0, 195.0));
    overlay.event(&Event::MouseLeave);
    overlay.frame(t0);
    overlay.poll(t0 + Duration::from_secs(10));
    assert!(overlay.bars_visible());

    let t1 = t0 + Duration::from_secs(10);
    overlay.event(&up(10.0, 500.0));
    assert!(overlay.bars_visible());
    overlay.frame(t1);
    overlay.poll(t1 + Duration::from_millis(500));
    assert!(!overlay.bars_visible());
}

#[test]
fn test_scroll_indicator_follows_activity() {
    let mut overlay = overlay(
        Size::new(200.0, 200.0),
        Size::new(200.0, 600.0),
        OverlayBuilder::new().indicator(Indicator::Scroll),
    );
    let t0 = Instant::now();
    assert!(!overlay.bars_visible());

    overlay.host_mut().scroll_natively(Axis::Y, 100.0);
    overlay.on_scroll();
    overlay.frame(t0);
    assert!(overlay.bars_visible());
    overlay.take_changes();

    overlay.poll(t0 + Duration::from_millis(500));
    assert!(!overlay.bars_visible());
    assert!(overlay.take_changes().contains(Changes::VISIBILITY));
}

#[test]
fn test_default_indicator_always_shows_tracks() {
    let mut overlay = horizontal(OverlayBuilder::new());
    assert!(overlay.bars_visible());
    overlay.event(&Event::MouseLeave);
    assert!(overlay.bars_visible());
}

#[test]
fn test_dataset_picks_jump_curve() {
    common::init_logger();
    let area = common::MockArea::new(Size::new(200.0, 200.0), Size::new(600.0, 200.0));
    let container = Container::new(area)
        .data("scrolling-interactive", "")
        .data("scrolling-transition", "quad:in")
        .data("scrolling-duration", "100");
    let mut overlay =
        ScrollOverlay::new(container, OverlayBuilder::new().track_click(TrackClick::Page)).unwrap();
    let t0 = Instant::now();

    assert!(overlay.track_click(Axis::X, 150.0));
    overlay.frame(t0);
    overlay.frame(t0 + Duration::from_millis(50));
    // A quarter of the way at half time
    assert!((overlay.host().offset.x - 50.0).abs() < 0.5);

    overlay.frame(t0 + Duration::from_millis(100));
    assert_eq!(overlay.host().offset.x, 200.0);
}
