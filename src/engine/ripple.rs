use super::animate::{Animator, Property, Tween};
use super::color::Rgba;
use super::config::{ConfigError, CubesConfig};
use super::constants::{RIPPLE_EASE, RIPPLE_FADE_SEC, RIPPLE_HOLD_SEC, RIPPLE_RING_DELAY_SEC};
use super::ease::Ease;
use super::grid::{Cell, FocusPoint, Grid};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Cells sharing one rounded distance from the impact cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub index: u32,
    pub cells: SmallVec<[Cell; 8]>,
}

/// Group cells by `round(distance)` from `impact`, rings ascending and
/// cells in row-major order within a ring.
pub fn ring_partition(grid: &Grid, impact: Cell) -> Vec<Ring> {
    let origin = FocusPoint::from(impact);
    let mut rings: FnvHashMap<u32, SmallVec<[Cell; 8]>> = FnvHashMap::default();
    for cell in grid.cells() {
        let ring = origin.distance_to(cell).round() as u32;
        rings.entry(ring).or_default().push(cell);
    }
    let mut out: Vec<Ring> = rings
        .into_iter()
        .map(|(index, cells)| Ring { index, cells })
        .collect();
    out.sort_by_key(|r| r.index);
    out
}

/// Ripple pacing for a given speed multiplier. Speed divides every delay
/// and duration uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleTiming {
    pub ring_delay: f64,
    pub fade: f64,
    pub hold: f64,
}

impl RippleTiming {
    pub fn for_speed(speed: f64) -> Self {
        Self {
            ring_delay: RIPPLE_RING_DELAY_SEC / speed,
            fade: RIPPLE_FADE_SEC / speed,
            hold: RIPPLE_HOLD_SEC / speed,
        }
    }

    #[inline]
    pub fn forward_delay(&self, ring: u32) -> f64 {
        ring as f64 * self.ring_delay
    }

    #[inline]
    pub fn return_delay(&self, ring: u32) -> f64 {
        self.forward_delay(ring) + self.fade + self.hold
    }
}

/// Scheduled color pulse for one ring: out to the ripple color, then back.
#[derive(Clone, Debug, PartialEq)]
pub struct RingPulse {
    pub ring: Ring,
    pub forward: Tween,
    pub back: Tween,
}

pub struct RippleEngine {
    grid: Grid,
    enabled: bool,
    color: Rgba,
    base: Rgba,
    ease: Ease,
    timing: RippleTiming,
}

impl RippleEngine {
    pub fn new(config: &CubesConfig, grid: Grid) -> Result<Self, ConfigError> {
        Ok(Self {
            grid,
            enabled: config.ripple_on_click,
            color: config.ripple_rgba()?,
            base: config.face_rgba()?,
            ease: RIPPLE_EASE.parse()?,
            timing: RippleTiming::for_speed(config.ripple_speed),
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn timing(&self) -> RippleTiming {
        self.timing
    }

    /// Full schedule for an impact at `impact`, without dispatching it.
    pub fn plan(&self, impact: Cell) -> Vec<RingPulse> {
        ring_partition(&self.grid, impact)
            .into_iter()
            .map(|ring| {
                let forward = Tween {
                    duration: self.timing.fade,
                    ease: self.ease,
                    delay: self.timing.forward_delay(ring.index),
                    overwrite: false,
                };
                let back = Tween {
                    delay: self.timing.return_delay(ring.index),
                    ..forward
                };
                RingPulse {
                    ring,
                    forward,
                    back,
                }
            })
            .collect()
    }

    /// Schedule a ripple from `impact`. Returns the number of rings
    /// scheduled, zero when ripples are disabled.
    ///
    /// Ripples are independent: a second click while one is in flight adds
    /// its own overlapping schedule.
    pub fn trigger<A: Animator>(&self, animator: &mut A, impact: Cell) -> usize {
        if !self.enabled {
            return 0;
        }
        let plan = self.plan(impact);
        for pulse in &plan {
            animator.animate(&pulse.ring.cells, Property::FaceColor(self.color), pulse.forward);
            animator.animate(&pulse.ring.cells, Property::FaceColor(self.base), pulse.back);
        }
        log::debug!(
            "[ripple] impact=({},{}) rings={}",
            impact.row,
            impact.col,
            plan.len()
        );
        plan.len()
    }
}
