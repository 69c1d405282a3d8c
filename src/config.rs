//! Application configuration constants.
//!
//! Everything the wheel needs to know up front lives here as `const`: the viewport of
//! the simulator, the slice expansion rule, the spin physics and host timing. Values
//! that a host may want to change at runtime (the physics) are also exposed through
//! [`SpinTuning`](crate::physics::SpinTuning), whose `Default` reads these constants.
//!
//! Angles are radians, speeds are radians per second, durations are seconds unless the
//! type says otherwise.

use core::f32::consts::PI;
use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Simulator viewport width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Simulator viewport height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window scale factor used by the simulator (each display pixel becomes 2x2).
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Wheel Configuration
// =============================================================================

/// Minimum number of slices on the disk. Short entry lists are repeated whole until
/// the disk has at least this many slices, so every slice stays narrow enough to read
/// as a wheel.
pub const MIN_SLICES: usize = 32;

/// Text shown instead of an empty label (padding slices).
pub const NO_RESULT_LABEL: &str = "(no result)";

/// Number of alternating segments on the decorative accelerator ring.
pub const ACCELERATOR_SEGMENTS: usize = 32;

// =============================================================================
// Spin Physics
// =============================================================================

/// Angular speed the wheel approaches while powered (rad/s). Half a turn per second.
pub const POWERED_ROTATE_SPEED: f32 = PI;

/// Speed the wheel snaps up to the moment power is applied (rad/s).
pub const POWERED_MINIMUM_SPEED: f32 = POWERED_ROTATE_SPEED * 0.5;

/// Time constant of the first-order approach to `POWERED_ROTATE_SPEED` (s).
pub const ACCEL_DURATION: f32 = 1.0;

/// Time to coast from `POWERED_ROTATE_SPEED` down to rest under friction (s).
pub const WHEELING_DURATION: f32 = 4.0;

// =============================================================================
// Gradient Images
// =============================================================================

/// Most color stops one gradient holds.
pub const MAX_COLOR_STOPS: usize = 16;

/// Gradient direction for a new gradient, in degrees clockwise from +x (top to bottom).
pub const DEFAULT_GRADIENT_ANGLE: f32 = 90.0;

/// Longest side of a gradient preview in pixels. The image is scaled down to fit.
pub const PREVIEW_MAX_SIZE: u32 = 200;

/// Angle added per key press in the simulator's gradient view (degrees).
pub const GRADIENT_ANGLE_STEP: f32 = 15.0;

// =============================================================================
// Host Timing
// =============================================================================

/// Target frame time (~50 FPS). The simulator sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Longest time step fed to the physics in one frame. A stalled window (dragging,
/// breakpoints) must not turn into one giant leap of the wheel.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Duration that the settled-selection popup remains visible.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

// =============================================================================
// Tests
// =============================================================================
