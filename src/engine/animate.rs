use super::color::Rgba;
use super::ease::Ease;
use super::grid::Cell;

/// Per-cube rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn lerp(self, to: Rotation, t: f64) -> Rotation {
        Rotation {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// Animated property value. Rotation targets the cube itself; face color
/// targets all six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Property {
    Rotation(Rotation),
    FaceColor(Rgba),
}

impl Property {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::Rotation(_) => PropertyKind::Rotation,
            Property::FaceColor(_) => PropertyKind::FaceColor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Rotation,
    FaceColor,
}

/// Timing of one animation request. Seconds throughout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
    /// Kill earlier animations of the same property on the same targets.
    pub overwrite: bool,
}

/// Sink for animation requests. The effect decides what to animate; the
/// animator owns how the values are interpolated over time.
pub trait Animator {
    fn animate(&mut self, targets: &[Cell], property: Property, tween: Tween);
}

impl<A: Animator + ?Sized> Animator for &mut A {
    fn animate(&mut self, targets: &[Cell], property: Property, tween: Tween) {
        (**self).animate(targets, property, tween)
    }
}
