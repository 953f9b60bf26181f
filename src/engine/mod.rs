pub mod animate;
pub mod autopilot;
pub mod color;
pub mod config;
pub mod constants;
pub mod ease;
pub mod effect;
pub mod grid;
pub mod input;
pub mod ripple;
pub mod style;
pub mod tilt;
pub mod tween;

pub use animate::*;
pub use autopilot::AutoPilot;
pub use color::{ColorError, Rgba};
pub use config::*;
pub use constants::*;
pub use ease::{Curve, Ease, EaseError, Mode};
pub use effect::*;
pub use grid::*;
pub use input::*;
pub use ripple::*;
pub use tilt::*;
pub use tween::*;
