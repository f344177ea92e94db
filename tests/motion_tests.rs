// Host-side tests for the time-driven helpers: hover tween, smooth scroll
// and orbit damping.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use glam::{Vec2, Vec3};

#[test]
fn hover_tween_rises_monotonically_to_one() {
    let mut tween = HoverTween::default();
    tween.enter(0.0);
    let mut prev = tween.sample(0.0);
    assert_eq!(prev, 0.0);
    for step in 1..=60 {
        let v = tween.sample(step as f32 / 50.0);
        assert!(v >= prev, "not monotonic at step {}", step);
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
    assert_eq!(tween.sample(1.0), 1.0);
    assert_eq!(tween.sample(10.0), 1.0);
}

#[test]
fn hover_tween_uses_ease_out_curve() {
    let mut tween = HoverTween::new(1.0);
    tween.enter(2.0);
    assert!((tween.sample(2.5) - 0.75).abs() < 1e-6);
    assert!((tween.sample(2.25) - 0.4375).abs() < 1e-6);
}

#[test]
fn hover_tween_reverses_from_current_value() {
    let mut tween = HoverTween::new(1.0);
    tween.enter(0.0);
    let mid = tween.sample(0.5);
    tween.leave(0.5);
    assert_eq!(tween.sample(0.5), mid);
    let mut prev = mid;
    for step in 1..=20 {
        let v = tween.sample(0.5 + step as f32 / 20.0);
        assert!(v <= prev);
        prev = v;
    }
    assert_eq!(tween.sample(1.5), 0.0);
}

#[test]
fn hover_tween_ignores_repeated_target() {
    let mut tween = HoverTween::new(1.0);
    tween.enter(0.0);
    let before = tween.sample(0.4);
    tween.enter(0.4);
    assert_eq!(tween.sample(0.4), before);
    assert_eq!(tween.sample(1.0), 1.0);
}

#[test]
fn zero_duration_tween_snaps() {
    let mut tween = HoverTween::new(0.0);
    tween.enter(3.0);
    assert_eq!(tween.sample(3.0), 1.0);
    tween.set_target(7.0, 3.0);
    assert_eq!(tween.target(), 1.0);
}

#[test]
fn scroll_tracker_eases_towards_target() {
    let mut scroll = ScrollTracker::new(0.1);
    scroll.update(100.0);
    assert_eq!(scroll.offset(), 10.0);
    assert_eq!(scroll.speed(), 90.0);
    assert!((scroll.uniform_speed() - 0.9).abs() < 1e-6);
    scroll.update(100.0);
    assert!((scroll.offset() - 19.0).abs() < 0.011);
}

#[test]
fn scroll_tracker_settles_and_truncates() {
    let mut scroll = ScrollTracker::default();
    for _ in 0..400 {
        scroll.update(250.0);
    }
    assert!((scroll.offset() - 250.0).abs() < 0.1);
    assert!(scroll.speed() >= 0.0 && scroll.speed() < 0.1);
    let hundredths = scroll.offset() * 100.0;
    assert!((hundredths - hundredths.round()).abs() < 1e-2);
}

#[test]
fn scroll_tracker_lands_exactly_on_target_in_both_directions() {
    let mut scroll = ScrollTracker::default();
    for _ in 0..2000 {
        scroll.update(100.0);
    }
    assert_eq!(scroll.offset(), 100.0);
    assert_eq!(scroll.speed(), 0.0);
    assert_eq!(scroll.uniform_speed(), 0.0);

    scroll.jump_to(500.0);
    for _ in 0..2000 {
        scroll.update(0.0);
    }
    assert_eq!(scroll.offset(), 0.0);
    assert_eq!(scroll.speed(), 0.0);
}

#[test]
fn scroll_tracker_keeps_easing_while_gap_is_large() {
    let mut scroll = ScrollTracker::default();
    scroll.jump_to(99.0);
    scroll.update(100.0);
    assert!(scroll.offset() < 100.0);
    assert!(scroll.speed() > 0.0);
}

#[test]
fn scroll_tracker_jump_has_no_speed() {
    let mut scroll = ScrollTracker::default();
    scroll.jump_to(900.0);
    assert_eq!(scroll.offset(), 900.0);
    assert_eq!(scroll.speed(), 0.0);
    scroll.update(900.0);
    assert_eq!(scroll.speed(), 0.0);
}

#[test]
fn orbit_starts_from_camera_position() {
    let orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);
    assert!((orbit.position() - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    assert!(orbit.is_settled());
    assert!((orbit.polar_angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn orbit_drag_glides_to_full_delta() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO);
    orbit.drag(Vec2::new(100.0, 0.0), 600.0);
    assert!(!orbit.is_settled());

    let first = orbit.update();
    let expected_first = -100.0 * 2.0 * std::f32::consts::PI / 600.0 * 0.05;
    assert!((orbit.azimuth() - expected_first).abs() < 1e-5);
    assert!((first.length() - 1.0).abs() < 1e-5);

    for _ in 0..600 {
        orbit.update();
    }
    let expected_total = -100.0 * 2.0 * std::f32::consts::PI / 600.0;
    assert!((orbit.azimuth() - expected_total).abs() < 1e-3);
    assert!(orbit.is_settled());
}

#[test]
fn orbit_polar_angle_is_clamped() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO);
    orbit.drag(Vec2::new(0.0, 5000.0), 100.0);
    for _ in 0..600 {
        let p = orbit.update();
        assert!(p.is_finite());
    }
    assert!(orbit.polar_angle() > 0.0);
    assert!(orbit.polar_angle() < std::f32::consts::PI);
}

#[test]
fn orbit_ignores_drag_with_collapsed_viewport() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO);
    orbit.drag(Vec2::new(50.0, 50.0), 0.0);
    assert!(orbit.is_settled());
}
