use super::animate::{Animator, Rotation};
use super::autopilot::AutoPilot;
use super::config::{ConfigError, CubesConfig};
use super::grid::{Cell, FocusPoint, Grid};
use super::input::{InputCoordinator, PointerSample, Rect};
use super::ripple::RippleEngine;
use super::tilt::TiltEngine;
use super::tween::{Advance, TweenAnimator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Destroyed,
}

/// What one `frame` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// The idle timer fired this frame and control returned to the driver.
    pub went_idle: bool,
    /// Focus point applied from user input.
    pub input_tilt: Option<FocusPoint>,
    /// Focus point applied by the autonomous driver.
    pub auto_tilt: Option<FocusPoint>,
}

/// The tilt-grid effect: grid, options, both focus producers and the
/// animator they drive.
///
/// Nothing happens until `initialize`. The host calls `frame` once per
/// animation frame with a millisecond timestamp and forwards pointer
/// events to the entry points below; `destroy` makes every entry point
/// inert and can be called any number of times.
pub struct CubesEffect<A: Animator> {
    config: CubesConfig,
    grid: Grid,
    tilt: TiltEngine,
    ripple: RippleEngine,
    input: InputCoordinator,
    autopilot: Option<AutoPilot>,
    animator: A,
    lifecycle: Lifecycle,
}

impl<A: Animator> CubesEffect<A> {
    pub fn new(config: CubesConfig, animator: A, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_size);
        Ok(Self {
            tilt: TiltEngine::new(&config, grid)?,
            ripple: RippleEngine::new(&config, grid)?,
            input: InputCoordinator::new(grid.size()),
            autopilot: config
                .auto_animate
                .then(|| AutoPilot::new(grid.size(), seed)),
            grid,
            config,
            animator,
            lifecycle: Lifecycle::Created,
        })
    }

    pub fn initialize(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        log::debug!(
            "[cubes] initialized grid={} auto={} ripple={}",
            self.grid.size(),
            self.autopilot.is_some(),
            self.ripple.enabled()
        );
    }

    /// Cancel the pending tilt, the idle timer and the autonomous loop.
    /// Returns false if the effect was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            return false;
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.input.cancel();
        self.autopilot = None;
        true
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn config(&self) -> &CubesConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn is_user_active(&self) -> bool {
        self.input.is_user_active()
    }

    pub fn is_auto_armed(&self) -> bool {
        self.is_running() && self.autopilot.is_some()
    }

    pub fn idle_deadline(&self) -> Option<f64> {
        self.input.idle_deadline()
    }

    pub fn pending_tilt(&self) -> Option<FocusPoint> {
        self.input.pending()
    }

    pub fn autopilot(&self) -> Option<&AutoPilot> {
        self.autopilot.as_ref()
    }

    pub fn rotation(&self, cell: Cell) -> Option<Rotation> {
        self.tilt.rotation(cell)
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn pointer_move(&mut self, sample: PointerSample, rect: Rect, now_ms: f64) {
        if !self.is_running() {
            return;
        }
        if self.input.pointer_move(sample, rect, now_ms).is_none() {
            log::trace!("[input] degenerate scene rect, move ignored");
        }
    }

    pub fn touch_start(&mut self, now_ms: f64) {
        if self.is_running() {
            self.input.touch_start(now_ms);
        }
    }

    /// Pointer left the scene or the touch ended: relax every cube.
    pub fn pointer_leave(&mut self) {
        if self.is_running() {
            self.input.pointer_leave();
            self.reset_all();
        }
    }

    /// Click or tap: ripple from the cell under the pointer.
    pub fn click(&mut self, sample: PointerSample, rect: Rect) -> Option<Cell> {
        if !self.is_running() || !self.ripple.enabled() {
            return None;
        }
        let cell = self.input.click_cell(sample, rect)?;
        self.ripple.trigger(&mut self.animator, cell);
        Some(cell)
    }

    pub fn trigger_ripple(&mut self, impact: Cell) -> usize {
        if !self.is_running() {
            return 0;
        }
        self.ripple.trigger(&mut self.animator, impact)
    }

    pub fn apply_tilt(&mut self, focus: FocusPoint) {
        if self.is_running() {
            self.tilt.apply_tilt(&mut self.animator, focus);
        }
    }

    pub fn reset_all(&mut self) {
        if self.is_running() {
            self.tilt.reset_all(&mut self.animator);
        }
    }

    /// Per-frame tick: fire the idle timer, apply the newest input focus,
    /// then let the driver step if nobody is pointing.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.is_running() {
            return report;
        }
        report.went_idle = self.input.poll_idle(now_ms);
        if report.went_idle {
            log::debug!("[input] idle, autonomous driver resumes");
        }
        if let Some(focus) = self.input.take_pending() {
            self.tilt.apply_tilt(&mut self.animator, focus);
            report.input_tilt = Some(focus);
        }
        if !self.input.is_user_active() {
            if let Some(pilot) = self.autopilot.as_mut() {
                let focus = pilot.step();
                self.tilt.apply_tilt(&mut self.animator, focus);
                report.auto_tilt = Some(focus);
            }
        }
        report
    }
}

impl CubesEffect<TweenAnimator> {
    /// One animation frame: render in-flight tweens up to `now_ms`, then
    /// run `frame`. Tweens scheduled here start at `now_ms` and first
    /// render on the next tick.
    pub fn tick(&mut self, now_ms: f64) -> (Advance, FrameReport) {
        let advance = self.animator.advance(now_ms / 1000.0);
        let report = self.frame(now_ms);
        (advance, report)
    }
}
