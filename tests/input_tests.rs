// Host-side tests for the DOM input accumulator drained once per frame.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
#[path = "../src/input.rs"]
mod input;

use crate::core::*;
use crate::input::InputState;
use glam::Vec2;

const SIZE: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn drag_accumulates_only_while_dragging() {
    let mut state = InputState::default();
    state.pointer_moved(Vec2::new(100.0, 100.0));
    state.pointer_moved(Vec2::new(150.0, 100.0));
    assert_eq!(state.drag_accum, Vec2::ZERO);

    state.dragging = true;
    state.pointer_moved(Vec2::new(160.0, 90.0));
    state.pointer_moved(Vec2::new(200.0, 80.0));
    state.dragging = false;
    state.pointer_moved(Vec2::new(400.0, 400.0));

    let mut frame = FrameInput::at(0.0);
    state.drain_into(&mut frame, SIZE);
    assert_eq!(frame.orbit_drag, Vec2::new(50.0, -20.0));
}

#[test]
fn first_move_of_a_drag_without_prior_pointer_adds_nothing() {
    let mut state = InputState {
        dragging: true,
        ..Default::default()
    };
    state.pointer_moved(Vec2::new(300.0, 300.0));
    assert_eq!(state.drag_accum, Vec2::ZERO);
}

#[test]
fn second_drain_sees_only_new_events() {
    let mut state = InputState::default();
    state.dragging = true;
    state.pointer_moved(Vec2::new(10.0, 10.0));
    state.pointer_moved(Vec2::new(30.0, 10.0));
    state.hover(2, true);
    state.resized = true;

    let mut first = FrameInput::at(0.0);
    assert!(state.take_resize());
    state.drain_into(&mut first, SIZE);
    assert_eq!(first.orbit_drag, Vec2::new(20.0, 0.0));
    assert_eq!(
        first.hover_changes.as_slice(),
        &[HoverChange {
            element: 2,
            entered: true
        }]
    );

    let mut second = FrameInput::at(0.016);
    assert!(!state.take_resize());
    state.drain_into(&mut second, SIZE);
    assert_eq!(second.orbit_drag, Vec2::ZERO);
    assert!(second.hover_changes.is_empty());
    // The pointer itself persists between frames
    assert_eq!(second.pointer_ndc, first.pointer_ndc);
}

#[test]
fn hover_changes_keep_arrival_order() {
    let mut state = InputState::default();
    state.hover(0, true);
    state.hover(0, false);
    state.hover(1, true);
    let mut frame = FrameInput::at(0.0);
    state.drain_into(&mut frame, SIZE);
    let order: Vec<(usize, bool)> = frame
        .hover_changes
        .iter()
        .map(|c| (c.element, c.entered))
        .collect();
    assert_eq!(order, vec![(0, true), (0, false), (1, true)]);
}

#[test]
fn last_pointer_position_wins() {
    let mut state = InputState::default();
    state.pointer_moved(Vec2::new(0.0, 0.0));
    state.pointer_moved(Vec2::new(800.0, 600.0));
    state.pointer_moved(Vec2::new(400.0, 300.0));
    let mut frame = FrameInput::at(0.0);
    state.drain_into(&mut frame, SIZE);
    assert_eq!(frame.pointer_ndc, Some(Vec2::ZERO));
}

#[test]
fn pointer_outside_page_has_no_ndc() {
    let mut state = InputState::default();
    state.pointer_moved(Vec2::new(100.0, 100.0));
    state.pointer = None;
    let mut frame = FrameInput::at(0.0);
    frame.pointer_ndc = Some(Vec2::ONE);
    state.drain_into(&mut frame, SIZE);
    assert_eq!(frame.pointer_ndc, None);
}

#[test]
fn pointer_ndc_uses_the_size_passed_at_drain() {
    let mut state = InputState::default();
    state.pointer_moved(Vec2::new(600.0, 400.0));

    let mut before_resize = FrameInput::at(0.0);
    state.drain_into(&mut before_resize, SIZE);
    let mut after_resize = FrameInput::at(0.0);
    state.drain_into(&mut after_resize, Vec2::new(1200.0, 800.0));

    let ndc = before_resize.pointer_ndc.unwrap();
    assert!((ndc - Vec2::new(0.5, -1.0 / 3.0)).length() < 1e-6);
    assert_eq!(after_resize.pointer_ndc, Some(Vec2::ZERO));
}

#[test]
fn collapsed_viewport_drops_pointer_ndc() {
    let mut state = InputState::default();
    state.pointer_moved(Vec2::new(10.0, 10.0));
    let mut frame = FrameInput::at(0.0);
    state.drain_into(&mut frame, Vec2::ZERO);
    assert_eq!(frame.pointer_ndc, None);
}
