// Shared fakes for host-side engine tests.
#![allow(dead_code)]

use crate::engine::{
    Animator, Cell, CubesConfig, CubesEffect, Property, PropertyKind, Rotation, Tween,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub targets: Vec<Cell>,
    pub property: Property,
    pub tween: Tween,
}

/// Animator that records every request instead of animating.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Animator for Recorder {
    fn animate(&mut self, targets: &[Cell], property: Property, tween: Tween) {
        self.calls.push(Call {
            targets: targets.to_vec(),
            property,
            tween,
        });
    }
}

impl Recorder {
    pub fn of_kind(&self, kind: PropertyKind) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| c.property.kind() == kind)
            .collect()
    }

    /// Most recent rotation requested for `cell`.
    pub fn last_rotation(&self, cell: Cell) -> Option<Rotation> {
        self.calls.iter().rev().find_map(|c| match c.property {
            Property::Rotation(r) if c.targets.contains(&cell) => Some(r),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn effect(config: CubesConfig) -> CubesEffect<Recorder> {
    let mut fx = CubesEffect::new(config, Recorder::default(), 7).expect("valid config");
    fx.initialize();
    fx
}

pub fn grid8() -> CubesConfig {
    CubesConfig {
        grid_size: 8,
        ..CubesConfig::default()
    }
}
