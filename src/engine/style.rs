use super::config::{CellGap, CubesConfig, Shadow};
use super::constants::{DEFAULT_SHADOW, FACE_NAMES, FALLBACK_GAP};
use std::fmt::Write;

/// `(row-gap, column-gap)` as CSS lengths.
pub fn gaps(cell_gap: Option<CellGap>) -> (String, String) {
    let px = |v: Option<f64>| v.map_or_else(|| FALLBACK_GAP.to_string(), |v| format!("{v}px"));
    match cell_gap {
        Some(CellGap::Uniform(v)) => (px(Some(v)), px(Some(v))),
        Some(CellGap::Axes { row, col }) => (px(row), px(col)),
        None => (px(None), px(None)),
    }
}

pub fn shadow_css(shadow: &Shadow) -> &str {
    match shadow {
        Shadow::Enabled(true) => DEFAULT_SHADOW,
        Shadow::Enabled(false) => "none",
        Shadow::Custom(s) if s.trim().is_empty() => "none",
        Shadow::Custom(s) => s,
    }
}

/// Inline style of the wrapper: face custom properties, plus a fixed
/// footprint when `cubeSize` is set.
pub fn wrapper_style(config: &CubesConfig) -> String {
    let mut style = format!(
        "--cube-face-border: {}; --cube-face-bg: {}; --cube-face-shadow: {}",
        config.border_style,
        config.face_color,
        shadow_css(&config.shadow)
    );
    if let Some(size) = config.cube_size {
        let side = config.grid_size as f64 * size;
        _ = write!(style, "; width: {side}px; height: {side}px");
    }
    style
}

/// Inline style of the scene: the CSS grid template and gaps.
pub fn scene_style(config: &CubesConfig) -> String {
    let track = match config.cube_size {
        Some(size) => format!("repeat({}, {size}px)", config.grid_size),
        None => format!("repeat({}, 1fr)", config.grid_size),
    };
    let (row_gap, col_gap) = gaps(config.cell_gap);
    format!(
        "grid-template-columns: {track}; grid-template-rows: {track}; column-gap: {col_gap}; row-gap: {row_gap}"
    )
}

/// Markup for every cube in row-major order, six faces each.
pub fn cubes_markup(grid_size: usize) -> String {
    let mut html = String::new();
    for r in 0..grid_size {
        for c in 0..grid_size {
            _ = write!(html, r#"<div class="cube" data-row="{r}" data-col="{c}">"#);
            for face in FACE_NAMES {
                _ = write!(html, r#"<div class="cube-face cube-face--{face}"></div>"#);
            }
            html.push_str("</div>");
        }
    }
    html
}

pub fn scene_markup(config: &CubesConfig) -> String {
    format!(
        r#"<div class="cubes-animation" style="{}"><div class="cubes-animation--scene" style="{}">{}</div></div>"#,
        escape_attr(&wrapper_style(config)),
        escape_attr(&scene_style(config)),
        cubes_markup(config.grid_size)
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
