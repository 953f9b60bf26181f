// Host-side tests for the distance-falloff tilt.
// The library root is wasm-only, so the pure engine module tree is mounted directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;
mod common;

use common::*;
use engine::*;

fn tilt8() -> TiltEngine {
    TiltEngine::new(&grid8(), Grid::new(8)).expect("valid config")
}

#[test]
fn scenario_focus_at_center_of_8x8() {
    let tilt = tilt8();
    let focus = FocusPoint::new(4.0, 4.0);

    let center = tilt.target_for(Cell::new(4, 4), focus);
    assert_eq!(center.rotation, Rotation::new(-45.0, 45.0));
    assert_eq!(center.phase, TiltPhase::Enter);

    // distance 3 == radius: zero strength
    let edge = tilt.target_for(Cell::new(4, 7), focus);
    assert!(approx(edge.rotation.x, 0.0) && approx(edge.rotation.y, 0.0));

    let mid = tilt.target_for(Cell::new(4, 6), focus);
    assert!(approx(mid.rotation.x, -15.0), "got {:?}", mid.rotation);
    assert!(approx(mid.rotation.y, 15.0), "got {:?}", mid.rotation);
}

#[test]
fn beyond_radius_is_exactly_rest() {
    let tilt = tilt8();
    let focus = FocusPoint::new(0.0, 0.0);
    for cell in Grid::new(8).cells() {
        if focus.distance_to(cell) > 3.0 {
            let t = tilt.target_for(cell, focus);
            assert_eq!(t.rotation, Rotation::ZERO);
            assert_eq!(t.phase, TiltPhase::Leave);
        }
    }
}

#[test]
fn magnitude_does_not_increase_with_distance() {
    let tilt = tilt8();
    let mut prev = f64::INFINITY;
    for step in 0..=60 {
        let col = step as f64 * 0.05;
        // cell (0,0) seen from a focus sliding away along the row
        let t = tilt.target_for(Cell::new(0, 0), FocusPoint::new(0.0, col));
        let magnitude = t.rotation.y.abs();
        assert!(magnitude <= prev + 1e-12, "increased at d={col}");
        assert!(approx(t.rotation.x, -t.rotation.y));
        prev = magnitude;
    }
}

#[test]
fn out_of_grid_focus_is_not_an_error() {
    let tilt = tilt8();
    let t = tilt.target_for(Cell::new(0, 0), FocusPoint::new(-2.0, 0.0));
    assert!(t.rotation.y > 0.0);
    let far = tilt.target_for(Cell::new(0, 0), FocusPoint::new(-100.0, 50.0));
    assert_eq!(far.rotation, Rotation::ZERO);
}

#[test]
fn apply_uses_configured_enter_ease_and_fixed_leave_ease() {
    let config = CubesConfig {
        easing: "sine.inOut".to_string(),
        ..grid8()
    };
    let mut tilt = TiltEngine::new(&config, Grid::new(8)).unwrap();
    let mut rec = Recorder::default();
    tilt.apply_tilt(&mut rec, FocusPoint::new(4.0, 4.0));

    let enter: Ease = "sine.inOut".parse().unwrap();
    let leave: Ease = LEAVE_EASE.parse().unwrap();
    let mut covered = 0;
    for call in &rec.calls {
        assert!(call.tween.overwrite);
        if call.targets.len() == 1 {
            assert_eq!(call.tween.ease, enter);
            assert_eq!(call.tween.duration, 0.3);
        } else {
            assert_eq!(call.tween.ease, leave);
            assert_eq!(call.tween.duration, 0.6);
            assert_eq!(call.property, Property::Rotation(Rotation::ZERO));
        }
        covered += call.targets.len();
    }
    assert_eq!(covered, 64, "every cell receives exactly one request");
}

#[test]
fn newest_focus_fully_determines_rotation() {
    let mut tilt = tilt8();
    let mut rec = Recorder::default();
    tilt.apply_tilt(&mut rec, FocusPoint::new(0.0, 0.0));
    assert_eq!(tilt.rotation(Cell::new(0, 0)), Some(Rotation::new(-45.0, 45.0)));

    tilt.apply_tilt(&mut rec, FocusPoint::new(7.0, 7.0));
    assert_eq!(tilt.rotation(Cell::new(0, 0)), Some(Rotation::ZERO));
    assert_eq!(tilt.rotation(Cell::new(7, 7)), Some(Rotation::new(-45.0, 45.0)));
    assert_eq!(rec.last_rotation(Cell::new(0, 0)), Some(Rotation::ZERO));
}

#[test]
fn reset_all_relaxes_every_cell_over_leave_duration() {
    let mut tilt = tilt8();
    let mut rec = Recorder::default();
    tilt.apply_tilt(&mut rec, FocusPoint::new(3.0, 3.0));
    rec.clear();

    tilt.reset_all(&mut rec);
    assert_eq!(rec.calls.len(), 1);
    let call = &rec.calls[0];
    assert_eq!(call.targets.len(), 64);
    assert_eq!(call.tween.duration, 0.6);
    for cell in Grid::new(8).cells() {
        assert_eq!(tilt.rotation(cell), Some(Rotation::ZERO));
    }
}
