//! Error type for the wheel and the gradient images.
//!
//! Every variant is a host contract violation: the host passed something the crate
//! cannot work with. None of them is transient, so nothing in the crate retries.

use thiserror::Error;

/// Errors returned by the wheel's public operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
    /// The entry list handed to the selection builder was empty.
    #[error("entry list is empty; a wheel needs at least one entry")]
    InvalidInput,
    /// The time step passed to `advance` was not a finite, positive number of seconds.
    #[error("invalid time step: {0} s (must be finite and > 0)")]
    InvalidTimestep(f32),
    /// A physics tuning value was out of range.
    #[error("invalid spin tuning: {0}")]
    InvalidTuning(&'static str),
    /// A gradient color stop was malformed or out of range.
    #[error("invalid color stop: {0}")]
    InvalidColorStop(&'static str),
    /// The gradient already holds `MAX_COLOR_STOPS` stops.
    #[error("gradient is full ({0} color stops)")]
    TooManyStops(usize),
    /// A gradient image needs a non-zero width and height.
    #[error("invalid image size {0}x{1}")]
    InvalidImageSize(u32, u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestep_message_carries_value() {
        let msg = WheelError::InvalidTimestep(f32::NAN).to_string();
        assert!(msg.contains("NaN"), "Message should include the rejected value: {msg}");
    }

    #[test]
    fn test_errors_compare_by_variant() {
        assert_eq!(WheelError::InvalidInput, WheelError::InvalidInput);
        assert_ne!(WheelError::InvalidInput, WheelError::InvalidTimestep(0.0));
    }
}
