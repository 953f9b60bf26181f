use super::constants::IDLE_TIMEOUT_MS;
use super::grid::{Cell, FocusPoint};

/// One pointer or touch position in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Event time in milliseconds on the same clock as frame timestamps.
    pub timestamp: Option<f64>,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            timestamp: None,
        }
    }

    pub const fn at(x: f64, y: f64, timestamp: f64) -> Self {
        Self {
            x,
            y,
            timestamp: Some(timestamp),
        }
    }
}

/// On-screen bounds of the scene element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Zero-size or hidden elements cannot be mapped to grid space.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Map a client position to a real-valued grid position. `None` for a
/// degenerate rect; positions outside the rect are passed through.
#[inline]
pub fn focus_from_sample(sample: PointerSample, rect: Rect, grid_size: usize) -> Option<FocusPoint> {
    if rect.is_degenerate() || !(sample.x.is_finite() && sample.y.is_finite()) {
        return None;
    }
    let cell_w = rect.width / grid_size as f64;
    let cell_h = rect.height / grid_size as f64;
    Some(FocusPoint::new(
        (sample.y - rect.top) / cell_h,
        (sample.x - rect.left) / cell_w,
    ))
}

/// Cell under a client position, clamped into the grid.
#[inline]
pub fn cell_from_sample(sample: PointerSample, rect: Rect, grid_size: usize) -> Option<Cell> {
    let focus = focus_from_sample(sample, rect, grid_size)?;
    let max = grid_size.saturating_sub(1) as f64;
    let snap = |v: f64| v.floor().clamp(0.0, max) as usize;
    Some(Cell::new(snap(focus.row), snap(focus.col)))
}

/// One-shot deadline timer polled from the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleTimer {
    timeout_ms: f64,
    deadline: Option<f64>,
}

impl IdleTimer {
    pub fn new(timeout_ms: f64) -> Self {
        Self {
            timeout_ms,
            deadline: None,
        }
    }

    /// Replace any pending deadline with `now + timeout`.
    pub fn arm(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.timeout_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(d) if now_ms >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Turns raw pointer/touch activity into a single pending focus point and
/// owns the `user_active` flag that gates the autonomous driver.
#[derive(Clone, Debug)]
pub struct InputCoordinator {
    grid_size: usize,
    user_active: bool,
    idle: IdleTimer,
    pending: Option<FocusPoint>,
}

impl InputCoordinator {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            user_active: false,
            idle: IdleTimer::new(IDLE_TIMEOUT_MS),
            pending: None,
        }
    }

    pub fn is_user_active(&self) -> bool {
        self.user_active
    }

    pub fn idle_deadline(&self) -> Option<f64> {
        self.idle.deadline()
    }

    fn mark_active(&mut self, now_ms: f64) {
        self.user_active = true;
        self.idle.arm(now_ms);
    }

    /// Pointer-move or touch-move. Marks the user active, restarts the idle
    /// timer and replaces any unapplied focus point with this one. Returns
    /// the focus point, or `None` when the rect cannot be mapped.
    pub fn pointer_move(&mut self, sample: PointerSample, rect: Rect, now_ms: f64) -> Option<FocusPoint> {
        self.mark_active(sample.timestamp.unwrap_or(now_ms));
        let focus = focus_from_sample(sample, rect, self.grid_size)?;
        self.pending = Some(focus);
        Some(focus)
    }

    pub fn touch_start(&mut self, now_ms: f64) {
        self.mark_active(now_ms);
    }

    /// Pointer left the scene or the touch ended: drop the unapplied focus
    /// point. `user_active` stays governed by the idle timer.
    pub fn pointer_leave(&mut self) {
        self.pending = None;
    }

    pub fn click_cell(&self, sample: PointerSample, rect: Rect) -> Option<Cell> {
        cell_from_sample(sample, rect, self.grid_size)
    }

    pub fn pending(&self) -> Option<FocusPoint> {
        self.pending
    }

    pub fn take_pending(&mut self) -> Option<FocusPoint> {
        self.pending.take()
    }

    /// Fire the idle timer if due. Returns true on the active -> idle
    /// transition.
    pub fn poll_idle(&mut self, now_ms: f64) -> bool {
        if self.idle.poll(now_ms) && self.user_active {
            self.user_active = false;
            return true;
        }
        false
    }

    /// Drop the pending focus point and the idle timer.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.idle.cancel();
    }
}
