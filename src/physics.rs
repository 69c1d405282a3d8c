//! Spin physics: rotation under power and friction, and the selection it lands on.
//!
//! The engine owns one continuous state (angle, speed, decorative accelerator angle)
//! and advances it once per frame from two inputs: the elapsed time and whether the
//! host's control is held ("powered").
//!
//! # Motion Model
//!
//! ```text
//!   speed
//!    PI ┤        ______________
//!       │      /               \
//!  PI/2 ┤     |                 \        linear friction:
//!       │     |  eased approach  \       PI / WHEELING_DURATION rad/s²
//!     0 ┼─────┘                   \_________
//!        press                 release      settle -> report once
//! ```
//!
//! - **Powered**: speed snaps up to `powered_minimum_speed` (an immediate kick), then
//!   eases toward `powered_rotate_speed` with `speed += (target - speed) / accel_duration * dt`.
//!   That is an explicit Euler step of a first-order exponential approach.
//! - **Coasting**: speed drops linearly by `deceleration * dt` and clamps at exactly 0.
//! - The angle integrates the speed from the *previous* tick before the speed changes.
//!
//! # Selection
//!
//! The indicated slice is `floor(angle / 2PI * n) mod n`. A change from the previous
//! tick is reported as `selection_changed`. When the wheel comes to rest after having
//! been powered, the indicated slice is reported once as [`Settled`]; an owed-report
//! flag set while powered and cleared on settling guarantees one report per
//! press-release cycle no matter how many frames the coast takes.

use core::f32::consts::TAU;
use core::f64::consts::TAU as TAU_F64;

use log::{debug, info, warn};

use crate::config::{ACCEL_DURATION, POWERED_MINIMUM_SPEED, POWERED_ROTATE_SPEED, WHEELING_DURATION};
use crate::error::WheelError;
use crate::selection::{Entry, WheelConfiguration};

// =============================================================================
// Tuning
// =============================================================================

/// Physics parameters. `Default` uses the constants in [`crate::config`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinTuning {
    /// Target angular speed while powered (rad/s).
    pub powered_rotate_speed: f32,
    /// Floor speed applied the instant power is on (rad/s).
    pub powered_minimum_speed: f32,
    /// Time constant of the approach to the target speed (s).
    pub accel_duration: f32,
    /// Time to coast from the target speed to rest (s).
    pub wheeling_duration: f32,
}

impl SpinTuning {
    /// Tuning from the compile-time constants.
    pub const fn new() -> Self {
        Self {
            powered_rotate_speed: POWERED_ROTATE_SPEED,
            powered_minimum_speed: POWERED_MINIMUM_SPEED,
            accel_duration: ACCEL_DURATION,
            wheeling_duration: WHEELING_DURATION,
        }
    }

    /// Friction (rad/s²) that stops the wheel from full speed in `wheeling_duration`.
    #[inline]
    pub fn deceleration(&self) -> f32 {
        self.powered_rotate_speed / self.wheeling_duration
    }

    /// Check every value is usable.
    ///
    /// # Errors
    /// [`WheelError::InvalidTuning`] naming the first offending field.
    pub fn validate(&self) -> Result<(), WheelError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.powered_rotate_speed) {
            return Err(WheelError::InvalidTuning("powered_rotate_speed must be finite and > 0"));
        }
        if !positive(self.powered_minimum_speed) {
            return Err(WheelError::InvalidTuning("powered_minimum_speed must be finite and > 0"));
        }
        if self.powered_minimum_speed > self.powered_rotate_speed {
            return Err(WheelError::InvalidTuning(
                "powered_minimum_speed must not exceed powered_rotate_speed",
            ));
        }
        if !positive(self.accel_duration) {
            return Err(WheelError::InvalidTuning("accel_duration must be finite and > 0"));
        }
        if !positive(self.wheeling_duration) {
            return Err(WheelError::InvalidTuning("wheeling_duration must be finite and > 0"));
        }
        Ok(())
    }
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// State
// =============================================================================

/// Continuous motion state. Never persisted.
///
/// The two rotations are running totals kept in `f64`: an `f32` total stops resolving
/// a 20 ms step somewhere past 1e6 rad, which a wheel left spinning for a few days
/// reaches. Drawing and indexing use the per-turn values from [`Self::disk_angle`] and
/// [`Self::ring_angle`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpinState {
    /// Disk rotation (rad). Starts at 0 and only grows.
    pub angle: f64,
    /// Angular speed (rad/s), always >= 0.
    pub speed: f32,
    /// Accelerator ring rotation (rad). Advances at the target speed while powered,
    /// independent of the disk's actual speed.
    pub accel_angle: f64,
}

impl SpinState {
    /// State at rest with zero rotation.
    pub const fn rest() -> Self {
        Self {
            angle: 0.0,
            speed: 0.0,
            accel_angle: 0.0,
        }
    }

    /// Disk rotation within the current turn, in `[0, 2PI]`.
    #[inline]
    pub fn disk_angle(&self) -> f32 {
        self.angle.rem_euclid(TAU_F64) as f32
    }

    /// Accelerator ring rotation within the current turn, in `[0, 2PI]`.
    #[inline]
    pub fn ring_angle(&self) -> f32 {
        self.accel_angle.rem_euclid(TAU_F64) as f32
    }
}

/// Final selection of a spin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settled {
    /// The wheel stopped on a real entry.
    Entry(Entry),
    /// The wheel stopped on a padding slice.
    Blank,
}

impl Settled {
    /// Label of the settled entry, or `None` for a padding slice.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Entry(entry) => Some(entry.label()),
            Self::Blank => None,
        }
    }
}

/// What one call to [`SpinEngine::advance`] produced.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The indicated slice differs from the previous tick.
    pub selection_changed: bool,
    /// Indicated slice after this tick.
    pub index: usize,
    /// Set on the one tick where a powered spin comes to rest.
    pub settled: Option<Settled>,
    /// The wheel is still turning; the host should keep ticking.
    pub still_moving: bool,
}

// =============================================================================
// Engine
// =============================================================================

/// Spin physics and selection tracking for one wheel.
///
/// Multiple wheels need multiple engines; nothing here is shared.
#[derive(Debug)]
pub struct SpinEngine {
    tuning: SpinTuning,
    state: SpinState,
    wheel: Option<WheelConfiguration>,
    current_index: usize,
    stop_report_owed: bool,
    powered: bool,
}

impl SpinEngine {
    /// Create an idle engine (no configuration) with the given tuning.
    ///
    /// # Errors
    /// [`WheelError::InvalidTuning`] if `tuning` fails [`SpinTuning::validate`].
    pub fn new(tuning: SpinTuning) -> Result<Self, WheelError> {
        tuning.validate()?;
        Ok(Self::with_valid_tuning(tuning))
    }

    const fn with_valid_tuning(tuning: SpinTuning) -> Self {
        Self {
            tuning,
            state: SpinState::rest(),
            wheel: None,
            current_index: 0,
            stop_report_owed: false,
            powered: false,
        }
    }

    /// Install a configuration and put the wheel back at rest on slice 0.
    pub fn configure(
        &mut self,
        wheel: WheelConfiguration,
    ) {
        info!(
            "wheel configured: {} entries, {} slices, {:?} palette",
            wheel.source_len(),
            wheel.slice_count(),
            wheel.palette()
        );
        self.wheel = Some(wheel);
        self.state = SpinState::rest();
        self.current_index = 0;
        self.stop_report_owed = false;
        self.powered = false;
    }

    /// Advance the motion by `delta` seconds with the control `pressed` or not.
    ///
    /// Without a configuration this is a no-op reporting a wheel at rest.
    ///
    /// # Errors
    /// [`WheelError::InvalidTimestep`] if `delta` is not finite or not positive. The
    /// state is left untouched.
    pub fn advance(
        &mut self,
        delta: f32,
        pressed: bool,
    ) -> Result<TickOutcome, WheelError> {
        if !delta.is_finite() || delta <= 0.0 {
            warn!("rejected time step {delta}");
            return Err(WheelError::InvalidTimestep(delta));
        }

        let Some(wheel) = self.wheel.as_ref() else {
            return Ok(TickOutcome::default());
        };

        let tuning = self.tuning;
        let state = &mut self.state;

        state.angle += f64::from(state.speed * delta);

        if pressed {
            if !self.powered {
                debug!("power on at {:.2} rad/s", state.speed);
            }
            if state.speed < tuning.powered_minimum_speed {
                state.speed = tuning.powered_minimum_speed;
            }
            state.speed += (tuning.powered_rotate_speed - state.speed) / tuning.accel_duration * delta;
            // Euler overshoots when delta > accel_duration; the target is a ceiling.
            state.speed = state.speed.min(tuning.powered_rotate_speed);
            self.stop_report_owed = true;

            state.accel_angle += f64::from(tuning.powered_rotate_speed * delta);
        } else if state.speed != 0.0 {
            if self.powered {
                debug!("power off at {:.2} rad/s", state.speed);
            }
            state.speed -= tuning.deceleration() * delta;
            if state.speed <= 0.0 {
                state.speed = 0.0;
            }
        }
        self.powered = pressed;

        let slice_count = wheel.slice_count();
        let index = indicated_index(state.disk_angle(), slice_count);
        let selection_changed = index != self.current_index;
        self.current_index = index;

        let mut settled = None;
        if self.stop_report_owed && state.speed == 0.0 {
            self.stop_report_owed = false;
            let entry = wheel.entry(index);
            info!("wheel settled on slice {index}: {}", entry.display_label());
            settled = Some(if entry.is_blank() {
                Settled::Blank
            } else {
                Settled::Entry(entry.clone())
            });
        }

        Ok(TickOutcome {
            selection_changed,
            index,
            settled,
            still_moving: state.speed != 0.0,
        })
    }

    /// Current motion state.
    #[inline]
    pub const fn state(&self) -> &SpinState {
        &self.state
    }

    /// Physics parameters in use.
    #[inline]
    pub const fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    /// Installed configuration, if any.
    #[inline]
    pub const fn wheel(&self) -> Option<&WheelConfiguration> {
        self.wheel.as_ref()
    }

    /// Whether `configure` has been called.
    #[inline]
    pub const fn is_configured(&self) -> bool {
        self.wheel.is_some()
    }

    /// Slice under the pointer as of the last tick.
    #[inline]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Entry under the pointer as of the last tick.
    pub fn indicated_entry(&self) -> Option<&Entry> {
        self.wheel.as_ref().map(|wheel| wheel.entry(self.current_index))
    }

    /// Whether a settle report is pending (the wheel was powered and has not stopped).
    #[inline]
    pub const fn is_stop_report_owed(&self) -> bool {
        self.stop_report_owed
    }

    #[cfg(test)]
    pub(crate) fn force_motion(
        &mut self,
        angle: f64,
        speed: f32,
        report_owed: bool,
    ) {
        self.state.angle = angle;
        self.state.speed = speed;
        self.stop_report_owed = report_owed;
    }
}

impl Default for SpinEngine {
    /// Idle engine with the tuning from [`crate::config`].
    fn default() -> Self {
        Self::with_valid_tuning(SpinTuning::new())
    }
}

/// Slice under the pointer for a disk rotated by `angle`:
/// `floor(angle / 2PI * slice_count) mod slice_count`.
///
/// Works on the angle reduced to one turn first, which is the same value for any
/// angle but keeps the product small when the angle has grown large.
pub fn indicated_index(
    angle: f32,
    slice_count: usize,
) -> usize {
    if slice_count == 0 {
        return 0;
    }
    let turn_fraction = angle.rem_euclid(TAU) / TAU;
    let index = (turn_fraction * slice_count as f32).floor() as usize;
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    index.min(slice_count - 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
