use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EaseError {
    #[error("unknown easing {0:?}")]
    Unknown(String),
}

/// Base curve of an easing function, expressed as its "in" form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Linear,
    /// `t^(n + 1)`: power1 is quadratic, power4 quintic.
    Power(u8),
    Sine,
    Expo,
    Circ,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    In,
    Out,
    InOut,
}

/// Named easing, parsed from identifiers such as `power3.out`,
/// `sine.inOut` or `none`. A bare curve name defaults to `.out`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ease {
    pub curve: Curve,
    pub mode: Mode,
}

impl Ease {
    pub const LINEAR: Ease = Ease {
        curve: Curve::Linear,
        mode: Mode::Out,
    };

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    /// Endpoints are exact: `apply(0) == 0`, `apply(1) == 1`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.mode {
            Mode::In => self.ease_in(t),
            Mode::Out => 1.0 - self.ease_in(1.0 - t),
            Mode::InOut => {
                if t < 0.5 {
                    self.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - self.ease_in(2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }

    fn ease_in(&self, t: f64) -> f64 {
        match self.curve {
            Curve::Linear => t,
            Curve::Power(n) => t.powi(n as i32 + 1),
            Curve::Sine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Curve::Expo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Curve::Circ => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease {
            curve: Curve::Power(3),
            mode: Mode::Out,
        }
    }
}

impl FromStr for Ease {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || EaseError::Unknown(s.to_string());
        let trimmed = s.trim();
        let (name, mode) = match trimmed.split_once('.') {
            Some((name, mode)) => (name, Some(mode)),
            None => (trimmed, None),
        };
        let curve = match name.to_ascii_lowercase().as_str() {
            "none" | "linear" | "power0" => Curve::Linear,
            "power1" | "quad" => Curve::Power(1),
            "power2" | "cubic" => Curve::Power(2),
            "power3" | "quart" => Curve::Power(3),
            "power4" | "quint" | "strong" => Curve::Power(4),
            "sine" => Curve::Sine,
            "expo" => Curve::Expo,
            "circ" => Curve::Circ,
            _ => return Err(unknown()),
        };
        let mode = match mode.map(str::to_ascii_lowercase).as_deref() {
            None | Some("out") | Some("easeout") => Mode::Out,
            Some("in") | Some("easein") => Mode::In,
            Some("inout") | Some("easeinout") => Mode::InOut,
            Some(_) => return Err(unknown()),
        };
        Ok(Ease { curve, mode })
    }
}
