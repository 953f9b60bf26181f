use super::color::{ColorError, Rgba};
use super::ease::{Ease, EaseError};
use serde::Deserialize;
use thiserror::Error;

/// Enter/leave tilt animation lengths in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Durations {
    pub enter: f64,
    pub leave: f64,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            enter: 0.3,
            leave: 0.6,
        }
    }
}

/// Spacing between cubes, in pixels.
///
/// A bare number applies to both axes. The object form sets each axis
/// separately; a missing axis falls back to a percentage gap.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellGap {
    Uniform(f64),
    Axes { row: Option<f64>, col: Option<f64> },
}

/// Face shadow: `true` for the stock shadow, `false` for none, or any CSS
/// `box-shadow` value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Shadow {
    Enabled(bool),
    Custom(String),
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::Enabled(false)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1, got {0}")]
    GridSize(usize),
    #[error("cube size must be positive, got {0}")]
    CubeSize(f64),
    #[error("influence radius must be positive, got {0}")]
    Radius(f64),
    #[error("max tilt angle must be finite, got {0}")]
    MaxAngle(f64),
    #[error("{name} duration must be non-negative, got {value}")]
    Duration { name: &'static str, value: f64 },
    #[error("ripple speed must be positive, got {0}")]
    RippleSpeed(f64),
    #[error(transparent)]
    Ease(#[from] EaseError),
    #[error("{field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },
    #[error("invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options for one cubes effect. Immutable once the effect is built.
///
/// Field names deserialize from camelCase so a plain JS options object can
/// be passed through `JSON.stringify`. `maxTiltAngle` and `influenceRadius`
/// are accepted as aliases of `maxAngle` and `radius`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CubesConfig {
    pub grid_size: usize,
    pub cube_size: Option<f64>,
    #[serde(alias = "maxTiltAngle")]
    pub max_angle: f64,
    #[serde(alias = "influenceRadius")]
    pub radius: f64,
    pub easing: String,
    pub duration: Durations,
    pub cell_gap: Option<CellGap>,
    pub border_style: String,
    pub face_color: String,
    pub shadow: Shadow,
    pub auto_animate: bool,
    pub ripple_on_click: bool,
    pub ripple_color: String,
    pub ripple_speed: f64,
    pub container: String,
}

impl Default for CubesConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            cube_size: None,
            max_angle: 45.0,
            radius: 3.0,
            easing: "power3.out".to_string(),
            duration: Durations::default(),
            cell_gap: Some(CellGap::Uniform(5.0)),
            border_style: "1px solid #fff".to_string(),
            face_color: "#060010".to_string(),
            shadow: Shadow::default(),
            auto_animate: true,
            ripple_on_click: true,
            ripple_color: "#fff".to_string(),
            ripple_speed: 2.0,
            container: "#cubesContainer".to_string(),
        }
    }
}

impl CubesConfig {
    /// Preset used by the energy dashboard's hero panel.
    pub fn dashboard() -> Self {
        Self {
            grid_size: 8,
            border_style: "1px solid #00f5ff".to_string(),
            shadow: Shadow::Custom("0 0 6px rgba(0,245,255,0.3)".to_string()),
            ripple_color: "#00f5ff".to_string(),
            ..Self::default()
        }
    }

    /// Parse a JSON options object, filling omitted fields with defaults,
    /// and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CubesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 1 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if let Some(size) = self.cube_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::CubeSize(size));
            }
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Radius(self.radius));
        }
        if !self.max_angle.is_finite() {
            return Err(ConfigError::MaxAngle(self.max_angle));
        }
        for (name, value) in [("enter", self.duration.enter), ("leave", self.duration.leave)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Duration { name, value });
            }
        }
        if !(self.ripple_speed.is_finite() && self.ripple_speed > 0.0) {
            return Err(ConfigError::RippleSpeed(self.ripple_speed));
        }
        self.enter_ease()?;
        self.face_rgba()?;
        self.ripple_rgba()?;
        Ok(())
    }

    pub fn enter_ease(&self) -> Result<Ease, EaseError> {
        self.easing.parse()
    }

    pub fn face_rgba(&self) -> Result<Rgba, ConfigError> {
        self.face_color
            .parse()
            .map_err(|source| ConfigError::Color {
                field: "faceColor",
                source,
            })
    }

    pub fn ripple_rgba(&self) -> Result<Rgba, ConfigError> {
        self.ripple_color
            .parse()
            .map_err(|source| ConfigError::Color {
                field: "rippleColor",
                source,
            })
    }
}
