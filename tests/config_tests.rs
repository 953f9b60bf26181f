// Host-side tests for option parsing, validation and scene markup.
// The library root is wasm-only, so the pure engine module tree is mounted directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::style::*;
use engine::*;

#[test]
fn defaults_match_documented_values() {
    let c = CubesConfig::default();
    assert_eq!(c.grid_size, 10);
    assert_eq!(c.max_angle, 45.0);
    assert_eq!(c.radius, 3.0);
    assert_eq!(c.duration, Durations { enter: 0.3, leave: 0.6 });
    assert_eq!(c.easing, "power3.out");
    assert_eq!(c.cell_gap, Some(CellGap::Uniform(5.0)));
    assert_eq!(c.shadow, Shadow::Enabled(false));
    assert!(c.auto_animate);
    assert!(c.ripple_on_click);
    assert_eq!(c.ripple_speed, 2.0);
    assert_eq!(c.container, "#cubesContainer");
    assert!(c.validate().is_ok());
    assert!(CubesConfig::dashboard().validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(CubesConfig::from_json("{}").unwrap(), CubesConfig::default());
}

#[test]
fn camel_case_fields_and_aliases() {
    let c = CubesConfig::from_json(
        r##"{
            "gridSize": 8,
            "maxTiltAngle": 30,
            "influenceRadius": 2.5,
            "duration": { "enter": 0.5 },
            "rippleSpeed": 4,
            "rippleOnClick": false,
            "faceColor": "#112233",
            "shadow": "0 0 4px red",
            "cellGap": { "row": 2 }
        }"##,
    )
    .unwrap();
    assert_eq!(c.grid_size, 8);
    assert_eq!(c.max_angle, 30.0);
    assert_eq!(c.radius, 2.5);
    assert_eq!(c.duration, Durations { enter: 0.5, leave: 0.6 });
    assert_eq!(c.ripple_speed, 4.0);
    assert!(!c.ripple_on_click);
    assert_eq!(c.shadow, Shadow::Custom("0 0 4px red".to_string()));
    assert_eq!(c.cell_gap, Some(CellGap::Axes { row: Some(2.0), col: None }));
}

#[test]
fn null_gap_and_boolean_shadow() {
    let c = CubesConfig::from_json(r#"{ "cellGap": null, "shadow": true }"#).unwrap();
    assert_eq!(c.cell_gap, None);
    assert_eq!(c.shadow, Shadow::Enabled(true));
}

#[test]
fn invalid_options_are_typed_errors() {
    let err = |json: &str| CubesConfig::from_json(json).unwrap_err();
    assert!(matches!(err(r#"{"gridSize": 0}"#), ConfigError::GridSize(0)));
    assert!(matches!(err(r#"{"radius": 0}"#), ConfigError::Radius(_)));
    assert!(matches!(err(r#"{"rippleSpeed": -1}"#), ConfigError::RippleSpeed(_)));
    assert!(matches!(err(r#"{"cubeSize": 0}"#), ConfigError::CubeSize(_)));
    assert!(matches!(
        err(r#"{"duration": {"leave": -0.1}}"#),
        ConfigError::Duration { name: "leave", .. }
    ));
    assert!(matches!(err(r#"{"easing": "bounce.out"}"#), ConfigError::Ease(_)));
    assert!(matches!(
        err(r#"{"rippleColor": "teal-ish"}"#),
        ConfigError::Color { field: "rippleColor", .. }
    ));
    assert!(matches!(err(r#"{"gridSize": "big"}"#), ConfigError::Parse(_)));
    assert!(matches!(err("not json"), ConfigError::Parse(_)));
}

#[test]
fn error_messages_name_the_problem() {
    let e = CubesConfig::from_json(r#"{"rippleSpeed": 0}"#).unwrap_err();
    assert_eq!(e.to_string(), "ripple speed must be positive, got 0");
    let e = CubesConfig::from_json(r##"{"faceColor": "#12"}"##).unwrap_err();
    assert!(e.to_string().starts_with("faceColor: "), "{e}");
}

#[test]
fn gap_forms() {
    assert_eq!(gaps(Some(CellGap::Uniform(5.0))), ("5px".to_string(), "5px".to_string()));
    assert_eq!(
        gaps(Some(CellGap::Axes { row: Some(2.5), col: None })),
        ("2.5px".to_string(), "5%".to_string())
    );
    assert_eq!(gaps(None), ("5%".to_string(), "5%".to_string()));
}

#[test]
fn shadow_forms() {
    assert_eq!(shadow_css(&Shadow::Enabled(true)), DEFAULT_SHADOW);
    assert_eq!(shadow_css(&Shadow::Enabled(false)), "none");
    assert_eq!(shadow_css(&Shadow::Custom(String::new())), "none");
    assert_eq!(shadow_css(&Shadow::Custom("0 0 1px red".into())), "0 0 1px red");
}

#[test]
fn wrapper_and_scene_styles() {
    let c = CubesConfig {
        grid_size: 4,
        cube_size: Some(20.0),
        ..CubesConfig::default()
    };
    let wrapper = wrapper_style(&c);
    assert!(wrapper.contains("--cube-face-bg: #060010"));
    assert!(wrapper.contains("--cube-face-shadow: none"));
    assert!(wrapper.contains("width: 80px; height: 80px"));

    let scene = scene_style(&c);
    assert!(scene.contains("grid-template-columns: repeat(4, 20px)"));
    assert!(scene.contains("column-gap: 5px; row-gap: 5px"));

    let fluid = scene_style(&CubesConfig::default());
    assert!(fluid.contains("grid-template-rows: repeat(10, 1fr)"));
    assert!(!wrapper_style(&CubesConfig::default()).contains("width"));
}

#[test]
fn markup_has_one_cube_per_cell_and_six_faces_each() {
    let html = cubes_markup(3);
    assert_eq!(html.matches(r#"class="cube""#).count(), 9);
    assert_eq!(html.matches("cube-face cube-face--").count(), 54);
    assert!(html.contains(r#"data-row="2" data-col="1""#));
    for face in FACE_NAMES {
        assert_eq!(html.matches(&format!("cube-face--{face}\"")).count(), 9);
    }
}

#[test]
fn scene_markup_escapes_style_attributes() {
    let c = CubesConfig {
        border_style: r#"1px solid "x""#.to_string(),
        ..CubesConfig::default()
    };
    let html = scene_markup(&c);
    assert!(html.contains("cubes-animation--scene"));
    assert!(html.contains("&quot;x&quot;"));
}
