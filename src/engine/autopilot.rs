use super::constants::{SIM_PURSUIT_RATE, SIM_RETARGET_DISTANCE};
use super::grid::FocusPoint;
use glam::DVec2;
use rand::prelude::*;

/// Simulated focus point that wanders the grid while nobody is pointing.
///
/// Each tick moves a fixed fraction of the remaining way toward a random
/// target (x = column, y = row), so it approaches but never lands on it; a
/// new target is drawn once the gap falls under `SIM_RETARGET_DISTANCE`.
pub struct AutoPilot {
    extent: f64,
    pos: DVec2,
    target: DVec2,
    rng: StdRng,
}

impl AutoPilot {
    pub fn new(grid_size: usize, seed: u64) -> Self {
        let extent = grid_size.max(1) as f64;
        let mut rng = StdRng::seed_from_u64(seed);
        let pos = random_point(&mut rng, extent);
        let target = random_point(&mut rng, extent);
        Self {
            extent,
            pos,
            target,
            rng,
        }
    }

    pub fn position(&self) -> FocusPoint {
        FocusPoint::new(self.pos.y, self.pos.x)
    }

    pub fn target(&self) -> FocusPoint {
        FocusPoint::new(self.target.y, self.target.x)
    }

    /// Advance one tick and return the new focus point.
    pub fn step(&mut self) -> FocusPoint {
        self.pos += (self.target - self.pos) * SIM_PURSUIT_RATE;
        let focus = self.position();
        if self.pos.distance(self.target) < SIM_RETARGET_DISTANCE {
            self.target = random_point(&mut self.rng, self.extent);
            log::trace!("[auto] retarget ({:.2},{:.2})", self.target.y, self.target.x);
        }
        focus
    }
}

#[inline]
fn random_point(rng: &mut StdRng, extent: f64) -> DVec2 {
    DVec2::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent))
}
