// Host-side tests for pointer-to-grid conversion and the idle timer.
// The library root is wasm-only, so the pure engine module tree is mounted directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;
mod common;

use common::approx;
use engine::*;

const RECT: Rect = Rect::new(100.0, 50.0, 400.0, 400.0);

#[test]
fn focus_point_from_client_coordinates() {
    // 8 cells over 400px: 50px per cell
    let focus = focus_from_sample(PointerSample::new(325.0, 150.0), RECT, 8).unwrap();
    assert!(approx(focus.col, 4.5));
    assert!(approx(focus.row, 2.0));
}

#[test]
fn non_square_rect_uses_per_axis_cell_size() {
    let rect = Rect::new(0.0, 0.0, 800.0, 400.0);
    let focus = focus_from_sample(PointerSample::new(200.0, 200.0), rect, 8).unwrap();
    assert!(approx(focus.col, 2.0));
    assert!(approx(focus.row, 4.0));
}

#[test]
fn outside_positions_are_passed_through_unclamped() {
    let focus = focus_from_sample(PointerSample::new(50.0, 500.0), RECT, 8).unwrap();
    assert!(approx(focus.col, -1.0));
    assert!(approx(focus.row, 9.0));
}

#[test]
fn degenerate_rect_skips_conversion() {
    let sample = PointerSample::new(10.0, 10.0);
    assert_eq!(focus_from_sample(sample, Rect::new(0.0, 0.0, 0.0, 100.0), 8), None);
    assert_eq!(focus_from_sample(sample, Rect::new(0.0, 0.0, 100.0, 0.0), 8), None);
    assert_eq!(focus_from_sample(sample, Rect::default(), 8), None);
    assert_eq!(cell_from_sample(sample, Rect::default(), 8), None);
}

#[test]
fn click_maps_to_containing_cell() {
    assert_eq!(
        cell_from_sample(PointerSample::new(149.0, 51.0), RECT, 8),
        Some(Cell::new(0, 0))
    );
    assert_eq!(
        cell_from_sample(PointerSample::new(150.0, 100.0), RECT, 8),
        Some(Cell::new(1, 1))
    );
    // right/bottom edge lands in the last cell
    assert_eq!(
        cell_from_sample(PointerSample::new(500.0, 450.0), RECT, 8),
        Some(Cell::new(7, 7))
    );
}

#[test]
fn idle_timer_fires_once_at_deadline() {
    let mut timer = IdleTimer::new(IDLE_TIMEOUT_MS);
    assert!(!timer.poll(1e9));
    timer.arm(1000.0);
    assert!(!timer.poll(3999.0));
    assert!(timer.poll(4000.0));
    assert!(!timer.poll(4001.0));
    assert!(!timer.is_armed());
}

#[test]
fn user_goes_idle_three_seconds_after_last_move() {
    let mut input = InputCoordinator::new(8);
    input.pointer_move(PointerSample::new(150.0, 150.0), RECT, 1000.0);
    assert!(input.is_user_active());
    assert!(!input.poll_idle(3999.0));
    assert!(input.is_user_active());
    assert!(input.poll_idle(4000.0));
    assert!(!input.is_user_active());
}

#[test]
fn each_move_restarts_the_idle_timer() {
    let mut input = InputCoordinator::new(8);
    input.pointer_move(PointerSample::new(150.0, 150.0), RECT, 0.0);
    input.pointer_move(PointerSample::new(160.0, 150.0), RECT, 2000.0);
    assert!(!input.poll_idle(3000.0));
    assert!(input.is_user_active());
    assert!(!input.poll_idle(4999.0));
    assert!(input.poll_idle(5000.0));
}

#[test]
fn event_timestamp_arms_the_timer_when_present() {
    let mut input = InputCoordinator::new(8);
    input.pointer_move(PointerSample::at(150.0, 150.0, 500.0), RECT, 9000.0);
    assert_eq!(input.idle_deadline(), Some(3500.0));
}

#[test]
fn newest_move_wins_before_the_frame() {
    let mut input = InputCoordinator::new(8);
    input.pointer_move(PointerSample::new(150.0, 150.0), RECT, 0.0);
    input.pointer_move(PointerSample::new(450.0, 400.0), RECT, 1.0);
    let pending = input.take_pending().unwrap();
    assert!(approx(pending.col, 7.0));
    assert!(approx(pending.row, 7.0));
    assert_eq!(input.take_pending(), None);
}

#[test]
fn degenerate_rect_still_marks_activity() {
    let mut input = InputCoordinator::new(8);
    let focus = input.pointer_move(PointerSample::new(1.0, 1.0), Rect::default(), 0.0);
    assert_eq!(focus, None);
    assert!(input.is_user_active());
    assert_eq!(input.pending(), None);
}

#[test]
fn leave_drops_pending_but_keeps_user_active() {
    let mut input = InputCoordinator::new(8);
    input.pointer_move(PointerSample::new(150.0, 150.0), RECT, 0.0);
    input.pointer_leave();
    assert_eq!(input.pending(), None);
    assert!(input.is_user_active());
    assert!(input.poll_idle(3000.0));
}

#[test]
fn touch_start_arms_the_idle_timer() {
    let mut input = InputCoordinator::new(8);
    input.touch_start(200.0);
    assert!(input.is_user_active());
    assert_eq!(input.idle_deadline(), Some(3200.0));
}
