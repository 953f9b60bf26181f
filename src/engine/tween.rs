use super::animate::{Animator, Property, PropertyKind, Rotation, Tween};
use super::color::Rgba;
use super::ease::Ease;
use super::grid::{Cell, Grid};
use fnv::FnvHashSet;
use smallvec::SmallVec;

pub type TweenId = u64;

/// Current visual state of one cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVisual {
    pub rotation: Rotation,
    pub face: Rgba,
}

#[derive(Clone, Copy, Debug)]
enum Value {
    Rotation(Rotation),
    Color(Rgba),
}

impl Value {
    fn read(kind: PropertyKind, cell: &CellVisual) -> Value {
        match kind {
            PropertyKind::Rotation => Value::Rotation(cell.rotation),
            PropertyKind::FaceColor => Value::Color(cell.face),
        }
    }

    fn write(self, cell: &mut CellVisual) {
        match self {
            Value::Rotation(r) => cell.rotation = r,
            Value::Color(c) => cell.face = c,
        }
    }

    fn lerp(self, to: Property, t: f64) -> Value {
        match (self, to) {
            (Value::Rotation(a), Property::Rotation(b)) => Value::Rotation(a.lerp(b, t)),
            (Value::Color(a), Property::FaceColor(b)) => Value::Color(a.lerp(b, t)),
            // kinds always match: origins are read with the target's kind
            (_, Property::Rotation(b)) => Value::Rotation(b),
            (_, Property::FaceColor(b)) => Value::Color(b),
        }
    }
}

struct Active {
    id: TweenId,
    targets: Vec<usize>,
    to: Property,
    start: f64,
    duration: f64,
    ease: Ease,
    /// Captured per target when the tween first renders.
    from: Option<Vec<Value>>,
}

/// What changed during one `advance`.
#[derive(Debug, Default)]
pub struct Advance {
    pub rotated: Vec<usize>,
    pub recolored: Vec<usize>,
    pub completed: Vec<TweenId>,
}

impl Advance {
    pub fn is_empty(&self) -> bool {
        self.rotated.is_empty() && self.recolored.is_empty() && self.completed.is_empty()
    }
}

/// Time-based interpolation of per-cube rotation and face color.
///
/// Tweens wait out their delay, capture the current value when they start,
/// and are applied each frame in scheduling order, so when two overlap on a
/// target the later one wins. `overwrite` removes earlier tweens of the same
/// property on the same targets, including ones still waiting on a delay.
pub struct TweenRuntime {
    cells: Vec<CellVisual>,
    active: Vec<Active>,
    next_id: TweenId,
}

impl TweenRuntime {
    pub fn new(cell_count: usize, face: Rgba) -> Self {
        Self {
            cells: vec![
                CellVisual {
                    rotation: Rotation::ZERO,
                    face,
                };
                cell_count
            ],
            active: Vec::new(),
            next_id: 1,
        }
    }

    pub fn schedule(&mut self, targets: &[usize], property: Property, tween: Tween, now_sec: f64) -> TweenId {
        let targets: Vec<usize> = targets.iter().copied().filter(|&i| i < self.cells.len()).collect();
        if tween.overwrite {
            let kind = property.kind();
            for a in self.active.iter_mut().filter(|a| a.to.kind() == kind) {
                if let Some(from) = a.from.as_mut() {
                    let mut kept = Vec::with_capacity(a.targets.len());
                    let mut kept_from = Vec::with_capacity(from.len());
                    for (t, f) in a.targets.iter().zip(from.iter()) {
                        if !targets.contains(t) {
                            kept.push(*t);
                            kept_from.push(*f);
                        }
                    }
                    a.targets = kept;
                    *from = kept_from;
                } else {
                    a.targets.retain(|t| !targets.contains(t));
                }
            }
            self.active.retain(|a| !a.targets.is_empty());
        }
        let id = self.next_id;
        self.next_id += 1;
        if !targets.is_empty() {
            self.active.push(Active {
                id,
                targets,
                to: property,
                start: now_sec + tween.delay.max(0.0),
                duration: tween.duration.max(0.0),
                ease: tween.ease,
                from: None,
            });
        }
        id
    }

    /// Render every started tween at `now_sec` and retire finished ones.
    pub fn advance(&mut self, now_sec: f64) -> Advance {
        let mut rotated = FnvHashSet::default();
        let mut recolored = FnvHashSet::default();
        let mut completed = Vec::new();
        let cells = &mut self.cells;
        for a in self.active.iter_mut() {
            if now_sec < a.start {
                continue;
            }
            let kind = a.to.kind();
            let from = a.from.get_or_insert_with(|| {
                a.targets
                    .iter()
                    .map(|&i| Value::read(kind, &cells[i]))
                    .collect()
            });
            let progress = if a.duration <= 0.0 {
                1.0
            } else {
                ((now_sec - a.start) / a.duration).min(1.0)
            };
            let eased = a.ease.apply(progress);
            for (&i, origin) in a.targets.iter().zip(from.iter()) {
                origin.lerp(a.to, eased).write(&mut cells[i]);
                match kind {
                    PropertyKind::Rotation => rotated.insert(i),
                    PropertyKind::FaceColor => recolored.insert(i),
                };
            }
            if progress >= 1.0 {
                completed.push(a.id);
            }
        }
        if !completed.is_empty() {
            self.active.retain(|a| !completed.contains(&a.id));
        }
        let mut rotated: Vec<usize> = rotated.into_iter().collect();
        let mut recolored: Vec<usize> = recolored.into_iter().collect();
        rotated.sort_unstable();
        recolored.sort_unstable();
        Advance {
            rotated,
            recolored,
            completed,
        }
    }

    pub fn cell(&self, index: usize) -> Option<&CellVisual> {
        self.cells.get(index)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

/// `Animator` over a `TweenRuntime`, stamping every request with the time
/// of the last frame it was advanced to.
///
/// The host must `advance` once at the top of each frame, before anything
/// that may schedule. A tween scheduled in frame `n` then first renders in
/// frame `n + 1`, one frame into its duration, so a tilt reissued every
/// frame still makes progress before it is overwritten.
pub struct TweenAnimator {
    grid: Grid,
    runtime: TweenRuntime,
    clock: f64,
}

impl TweenAnimator {
    pub fn new(grid: Grid, face: Rgba) -> Self {
        Self {
            grid,
            runtime: TweenRuntime::new(grid.len(), face),
            clock: 0.0,
        }
    }

    /// Seconds; the start time given to newly scheduled tweens.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn set_clock(&mut self, now_sec: f64) {
        self.clock = now_sec;
    }

    /// Render every tween up to `now_sec` and move the clock there.
    pub fn advance(&mut self, now_sec: f64) -> Advance {
        self.clock = now_sec;
        self.runtime.advance(now_sec)
    }

    pub fn visual(&self, cell: Cell) -> Option<&CellVisual> {
        self.runtime.cell(self.grid.index_of(cell)?)
    }

    pub fn visual_at(&self, index: usize) -> Option<&CellVisual> {
        self.runtime.cell(index)
    }

    pub fn runtime(&self) -> &TweenRuntime {
        &self.runtime
    }

    pub fn clear(&mut self) {
        self.runtime.clear();
    }
}

impl Animator for TweenAnimator {
    fn animate(&mut self, targets: &[Cell], property: Property, tween: Tween) {
        let indices: SmallVec<[usize; 16]> = targets
            .iter()
            .filter_map(|&cell| self.grid.index_of(cell))
            .collect();
        self.runtime.schedule(&indices, property, tween, self.clock);
    }
}
