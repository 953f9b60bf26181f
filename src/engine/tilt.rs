use super::animate::{Animator, Property, Rotation, Tween};
use super::config::{ConfigError, CubesConfig};
use super::constants::LEAVE_EASE;
use super::ease::Ease;
use super::grid::{Cell, FocusPoint, Grid};

/// Which animation a cell receives for a given focus point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TiltPhase {
    /// Inside the influence radius; animated with the configured easing.
    Enter,
    /// Outside the radius; relaxes to rest with the fixed leave easing.
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTarget {
    pub rotation: Rotation,
    pub phase: TiltPhase,
}

/// Distance-falloff tilt. Sole writer of per-cell rotation.
///
/// Strength falls linearly from 1 at the focus point to 0 at `radius`;
/// the two axes are counter-rotated, `(-strength * max, strength * max)`.
pub struct TiltEngine {
    grid: Grid,
    max_angle: f64,
    radius: f64,
    enter: Tween,
    leave: Tween,
    targets: Vec<Rotation>,
}

impl TiltEngine {
    pub fn new(config: &CubesConfig, grid: Grid) -> Result<Self, ConfigError> {
        let leave_ease: Ease = LEAVE_EASE.parse()?;
        Ok(Self {
            grid,
            max_angle: config.max_angle,
            radius: config.radius,
            enter: Tween {
                duration: config.duration.enter,
                ease: config.enter_ease()?,
                delay: 0.0,
                overwrite: true,
            },
            leave: Tween {
                duration: config.duration.leave,
                ease: leave_ease,
                delay: 0.0,
                overwrite: true,
            },
            targets: vec![Rotation::ZERO; grid.len()],
        })
    }

    pub fn target_for(&self, cell: Cell, focus: FocusPoint) -> TiltTarget {
        let dist = focus.distance_to(cell);
        if dist <= self.radius {
            let strength = 1.0 - dist / self.radius;
            let angle = strength * self.max_angle;
            TiltTarget {
                rotation: Rotation::new(-angle, angle),
                phase: TiltPhase::Enter,
            }
        } else {
            TiltTarget {
                rotation: Rotation::ZERO,
                phase: TiltPhase::Leave,
            }
        }
    }

    /// Retarget every cell for `focus`. Each request overwrites whatever
    /// rotation animation the cell already had in flight.
    pub fn apply_tilt<A: Animator>(&mut self, animator: &mut A, focus: FocusPoint) {
        let mut resting = Vec::new();
        for (i, cell) in self.grid.cells().enumerate() {
            let target = self.target_for(cell, focus);
            self.targets[i] = target.rotation;
            match target.phase {
                TiltPhase::Enter => {
                    animator.animate(&[cell], Property::Rotation(target.rotation), self.enter)
                }
                TiltPhase::Leave => resting.push(cell),
            }
        }
        if !resting.is_empty() {
            animator.animate(&resting, Property::Rotation(Rotation::ZERO), self.leave);
        }
    }

    /// Send every cell back to rest over the leave duration.
    pub fn reset_all<A: Animator>(&mut self, animator: &mut A) {
        self.targets.fill(Rotation::ZERO);
        let cells: Vec<Cell> = self.grid.cells().collect();
        animator.animate(&cells, Property::Rotation(Rotation::ZERO), self.leave);
    }

    /// Last rotation target assigned to `cell`.
    pub fn rotation(&self, cell: Cell) -> Option<Rotation> {
        self.grid.index_of(cell).map(|i| self.targets[i])
    }

    pub fn enter_tween(&self) -> Tween {
        self.enter
    }

    pub fn leave_tween(&self) -> Tween {
        self.leave
    }
}
