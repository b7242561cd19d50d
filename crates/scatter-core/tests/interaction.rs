// File: crates/scatter-core/tests/interaction.rs
// Purpose: Event-driven state transitions: hover tooltip, drag pan, wheel zoom, regenerate.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::animation::POINT_POP_DURATION;
use scatter_core::sample::{GeneratorParams, Point, Sample};
use scatter_core::{ChartEvent, ChartState, FitError, RenderOptions, WheelMode};

/// State with three collinear points and the instant their pop-in has finished.
fn fixed_state() -> (ChartState, Instant) {
    let mut st = ChartState::new(GeneratorParams::default(), RenderOptions::default());
    let sample = Sample::from_points(vec![Point::new(1.0, 3.0), Point::new(2.0, 5.0), Point::new(3.0, 7.0)]);
    let started = Instant::now();
    st.set_sample(sample, started);
    (st, started + POINT_POP_DURATION)
}

fn screen_pos(st: &ChartState, idx: usize) -> (f32, f32) {
    let scene = st.settled_scene();
    let p = scene.points[idx];
    let (x, y) = scene.view.apply((p.cx as f64, p.cy as f64));
    (x as f32, y as f32)
}

#[test]
fn hover_shows_point_coordinates_and_leave_hides() {
    let (mut st, now) = fixed_state();
    let mut rng = StdRng::seed_from_u64(0);

    let (x, y) = screen_pos(&st, 1);
    st.apply(ChartEvent::PointerMove { x, y }, &mut rng, now);
    assert!(st.tooltip().visible);
    assert_eq!(st.tooltip().datum, Some(Point::new(2.0, 5.0)));
    assert_eq!(st.tooltip().label().as_deref(), Some("x: 2.00, y: 5.00"));

    // Moving within the point only repositions the overlay
    st.apply(ChartEvent::PointerMove { x: x + 2.0, y: y + 1.0 }, &mut rng, now);
    assert_eq!(st.tooltip().datum, Some(Point::new(2.0, 5.0)));
    assert_eq!(st.tooltip().cursor, (x + 2.0, y + 1.0));
    let scene = st.scene_at(now + Duration::from_secs(5));
    let tip = scene.tooltip.expect("overlay present");
    assert_eq!(tip.anchor, (x + 2.0 + 10.0, y + 1.0 - 28.0));

    // Off every point
    st.apply(ChartEvent::PointerMove { x: 1.0, y: 1.0 }, &mut rng, now);
    assert!(!st.tooltip().visible);
    assert_eq!(st.tooltip().label(), None);

    st.apply(ChartEvent::PointerMove { x, y }, &mut rng, now);
    assert!(st.tooltip().visible);
    st.apply(ChartEvent::PointerLeave, &mut rng, now);
    assert!(!st.tooltip().visible);
    assert!(st.scene_at(now).tooltip.is_none());
}

#[test]
fn invisible_points_are_not_hoverable() {
    let (mut st, settled) = fixed_state();
    let started = settled - POINT_POP_DURATION;
    let mut rng = StdRng::seed_from_u64(0);
    let (x, y) = screen_pos(&st, 1);

    // Radius is still 0 at the first frame, so the centre shows nothing
    st.apply(ChartEvent::PointerMove { x, y }, &mut rng, started);
    assert!(!st.tooltip().visible);
    assert!(st.scene_at(started).tooltip.is_none());

    // Halfway through the pop-in the radius is 2.5: the centre hits, 4 px out misses
    let half = started + POINT_POP_DURATION / 2;
    st.apply(ChartEvent::PointerMove { x: x + 4.0, y }, &mut rng, half);
    assert!(!st.tooltip().visible);
    st.apply(ChartEvent::PointerMove { x, y }, &mut rng, half);
    assert!(st.tooltip().visible);

    st.apply(ChartEvent::PointerMove { x: x + 4.0, y }, &mut rng, settled);
    assert_eq!(st.tooltip().datum, Some(Point::new(2.0, 5.0)));
}

#[test]
fn tooltip_formats_two_decimals() {
    let mut st = ChartState::new(GeneratorParams::default(), RenderOptions::default());
    let started = Instant::now();
    st.set_sample(Sample::from_points(vec![Point::new(1.0, 3.14159), Point::new(2.0, 8.0)]), started);
    let mut rng = StdRng::seed_from_u64(0);
    let (x, y) = screen_pos(&st, 0);
    st.apply(ChartEvent::PointerMove { x, y }, &mut rng, started + POINT_POP_DURATION);
    assert_eq!(st.tooltip().label().as_deref(), Some("x: 1.00, y: 3.14"));
}

#[test]
fn hover_still_hits_after_zoom() {
    let (mut st, now) = fixed_state();
    let mut rng = StdRng::seed_from_u64(0);
    let (x, y) = screen_pos(&st, 2);

    // deltaY of -500 px doubles the scale around the cursor
    st.apply(ChartEvent::Wheel { x, y, delta_y: -500.0, mode: WheelMode::Pixel }, &mut rng, now);
    assert!((st.view().k - 2.0).abs() < 1e-9);
    let (zx, zy) = screen_pos(&st, 2);
    assert!((zx - x).abs() < 1e-3 && (zy - y).abs() < 1e-3, "anchor moved: ({zx},{zy}) vs ({x},{y})");

    st.apply(ChartEvent::PointerMove { x, y }, &mut rng, now);
    assert_eq!(st.tooltip().datum, Some(Point::new(3.0, 7.0)));
}

#[test]
fn drag_pans_and_reset_restores_identity() {
    let (mut st, now) = fixed_state();
    let mut rng = StdRng::seed_from_u64(0);

    st.apply(ChartEvent::Wheel { x: 400.0, y: 250.0, delta_y: -500.0, mode: WheelMode::Pixel }, &mut rng, now);
    let before = *st.view();

    st.apply(ChartEvent::DragStart { x: 300.0, y: 200.0 }, &mut rng, now);
    assert!(st.is_dragging());
    st.apply(ChartEvent::PointerMove { x: 320.0, y: 190.0 }, &mut rng, now);
    st.apply(ChartEvent::DragEnd, &mut rng, now);
    assert!(!st.is_dragging());
    assert!((st.view().x - (before.x + 20.0)).abs() < 1e-9);
    assert!((st.view().y - (before.y - 10.0)).abs() < 1e-9);

    // Moves after the drag ended do not pan
    let after = *st.view();
    st.apply(ChartEvent::PointerMove { x: 10.0, y: 10.0 }, &mut rng, now);
    assert_eq!(*st.view(), after);

    st.apply(ChartEvent::ResetZoom, &mut rng, now);
    assert!(st.view().is_identity());
}

#[test]
fn generate_replaces_sample_and_refits() {
    let mut st = ChartState::new(GeneratorParams::default(), RenderOptions::default());
    assert!(st.sample().is_empty());
    assert_eq!(st.fit(), &Err(FitError::EmptySample));

    let mut rng = StdRng::seed_from_u64(11);
    let now = Instant::now();
    let g1 = st.apply(ChartEvent::Generate, &mut rng, now).expect("generation");
    let first = st.sample().clone();
    let fit1 = *st.fit().as_ref().expect("fit");
    assert_eq!(first.len(), 20);

    let g2 = st.apply(ChartEvent::Generate, &mut rng, now).expect("generation");
    assert!(g2 > g1);
    assert_ne!(st.sample(), &first);
    let fit2 = *st.fit().as_ref().expect("fit");
    assert_eq!(fit2, scatter_core::fit(st.sample().points()).expect("refit"));
    assert_ne!(fit1, fit2);
}

#[test]
fn undefined_fit_draws_no_line() {
    let mut st = ChartState::new(GeneratorParams::default(), RenderOptions::default());
    st.set_sample(Sample::from_points(vec![Point::new(1.0, 1.0), Point::new(1.0, 3.0)]), Instant::now());
    assert!(matches!(st.fit(), Err(FitError::Undefined { .. })));
    let scene = st.settled_scene();
    assert_eq!(scene.points.len(), 2);
    assert!(scene.line.is_empty());
    assert_eq!(scene.legend.as_deref(), Some("fit undefined"));
}
