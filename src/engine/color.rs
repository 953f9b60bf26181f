use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("unsupported color syntax {0:?}")]
    Syntax(String),
    #[error("bad hex digits in {0:?}")]
    Hex(String),
    #[error("bad channel value in {0:?}")]
    Channel(String),
}

/// Straight (non-premultiplied) RGBA color; channels in 0..=255, alpha 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn lerp(self, to: Rgba, t: f64) -> Rgba {
        Rgba {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
            a: self.a + (to.a - self.a) * t,
        }
    }

    /// CSS `rgba(...)` string with rounded channels.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round().clamp(0.0, 255.0),
            self.g.round().clamp(0.0, 255.0),
            self.b.round().clamp(0.0, 255.0),
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(s, hex);
        }
        let lower = s.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorError::Syntax(s.to_string()))?;
        parse_functional(s, args)
    }
}

fn parse_hex(raw: &str, hex: &str) -> Result<Rgba, ColorError> {
    if !hex.is_ascii() {
        return Err(ColorError::Hex(raw.to_string()));
    }
    let digit = |i: usize, width: usize| -> Result<f64, ColorError> {
        let chunk = &hex[i * width..i * width + width];
        let v = u8::from_str_radix(chunk, 16).map_err(|_| ColorError::Hex(raw.to_string()))?;
        // short form repeats the nibble: "f" -> "ff"
        Ok(if width == 1 { (v * 17) as f64 } else { v as f64 })
    };
    let (width, has_alpha) = match hex.len() {
        3 => (1, false),
        4 => (1, true),
        6 => (2, false),
        8 => (2, true),
        _ => return Err(ColorError::Syntax(raw.to_string())),
    };
    let a = if has_alpha {
        digit(3, width)? / 255.0
    } else {
        1.0
    };
    Ok(Rgba::new(digit(0, width)?, digit(1, width)?, digit(2, width)?, a))
}

fn parse_functional(raw: &str, args: &str) -> Result<Rgba, ColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorError::Syntax(raw.to_string()));
    }
    let channel = |p: &str| -> Result<f64, ColorError> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f64>().map(|v| v * 2.55),
            None => p.parse::<f64>(),
        }
        .map_err(|_| ColorError::Channel(raw.to_string()))?;
        Ok(v.clamp(0.0, 255.0))
    };
    let a = match parts.get(3) {
        Some(p) => p
            .parse::<f64>()
            .map_err(|_| ColorError::Channel(raw.to_string()))?
            .clamp(0.0, 1.0),
        None => 1.0,
    };
    Ok(Rgba::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}
