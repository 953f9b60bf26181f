/// Interaction and animation tuning constants.
///
/// These express intended behavior (timeouts, pursuit rates, ripple pacing)
/// and keep magic numbers out of the engine code.

// Input
pub const IDLE_TIMEOUT_MS: f64 = 3000.0; // quiet time before the autonomous driver takes over

// Autonomous driver
pub const SIM_PURSUIT_RATE: f64 = 0.02; // fraction of remaining distance covered per tick
pub const SIM_RETARGET_DISTANCE: f64 = 0.1; // pick a new target once this close

// Ripple pacing at rippleSpeed = 1 (seconds)
pub const RIPPLE_RING_DELAY_SEC: f64 = 0.15;
pub const RIPPLE_FADE_SEC: f64 = 0.3;
pub const RIPPLE_HOLD_SEC: f64 = 0.6;

// Fixed easings
pub const LEAVE_EASE: &str = "power3.out";
pub const RIPPLE_EASE: &str = "power3.out";

// Scene styling
pub const DEFAULT_SHADOW: &str = "0 0 6px rgba(0,0,0,.5)";
pub const FALLBACK_GAP: &str = "5%";
pub const FACE_NAMES: [&str; 6] = ["top", "bottom", "left", "right", "front", "back"];
