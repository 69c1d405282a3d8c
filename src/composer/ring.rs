//! Decorative accelerator ring inside the disk's hole.
//!
//! Spins with the accumulated powered angle, not the disk, so it keeps turning at full
//! speed while the wheel is held and freezes the moment power is released.

use core::f32::consts::TAU;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::RING_COLORS;
use crate::config::ACCELERATOR_SEGMENTS;

/// Segment geometry of the ring. Radii come from the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceleratorRing {
    unit_angle: f32,
}

impl AcceleratorRing {
    pub fn new() -> Self {
        Self {
            unit_angle: TAU / ACCELERATOR_SEGMENTS as f32,
        }
    }

    /// Number of segments around the ring.
    #[inline]
    pub const fn segment_count(&self) -> usize {
        ACCELERATOR_SEGMENTS
    }

    /// Angular width of one segment.
    #[inline]
    pub const fn unit_angle(&self) -> f32 {
        self.unit_angle
    }

    /// Screen angle where segment `index` starts for a ring rotated by `accel_angle`.
    #[inline]
    pub fn segment_start(
        &self,
        index: usize,
        accel_angle: f32,
    ) -> f32 {
        index as f32 * self.unit_angle + accel_angle
    }

    /// Fill of segment `index`: white, silver, graphite, black, repeating.
    #[inline]
    pub const fn segment_color(index: usize) -> Rgb565 {
        RING_COLORS[index % RING_COLORS.len()]
    }
}

impl Default for AcceleratorRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    #[test]
    fn test_segments_cover_full_turn() {
        let ring = AcceleratorRing::new();
        let last_end = ring.segment_start(ring.segment_count() - 1, 0.0) + ring.unit_angle();
        assert!((last_end - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_segment_colors_cycle() {
        assert_eq!(AcceleratorRing::segment_color(0), WHITE);
        assert_eq!(AcceleratorRing::segment_color(3), BLACK);
        assert_eq!(AcceleratorRing::segment_color(4), WHITE);
    }

    #[test]
    fn test_rotation_shifts_every_segment() {
        let ring = AcceleratorRing::new();
        assert!((ring.segment_start(5, 1.0) - ring.segment_start(5, 0.0) - 1.0).abs() < 1e-6);
    }
}
