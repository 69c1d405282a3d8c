//! Wheel geometry derived from the viewport size.
//!
//! Only a band of a very large disk is visible: the disk's center sits far to the right
//! of the viewport so its left rim sweeps past a pointer on the left edge like a
//! vertical reel.
//!
//! ```text
//!  ┌──────────────────────────────┐
//!  │ |\  ╲                 ╲      │
//!  │ | >  ╲    band        ╲ ring│      ● center (off screen)
//!  │ |/   ╱                ╱      │
//!  │     ╱                ╱       │
//!  └──────────────────────────────┘
//!  margin  radius - inner = band
//! ```

use core::f32::consts::PI;

use embedded_graphics::prelude::*;

/// Widest side margin in pixels, reached at a 1000 px viewport.
const MAX_SIDE_MARGIN: f32 = 50.0;

/// Pixel geometry of the wheel for one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelLayout {
    /// Viewport the layout was computed for.
    pub viewport: Size,
    /// Gap left of the disk that holds the pointer.
    pub side_margin: f32,
    /// Horizontal extent of the pointer triangle.
    pub pointer_width: f32,
    /// Half the vertical extent of the pointer triangle.
    pub pointer_half_height: f32,
    /// Radial width of the colored band (outer minus inner radius).
    pub band_width: f32,
    /// Outer radius of the disk.
    pub radius: f32,
    /// Radius of the disk's hole, also the accelerator ring's outer radius.
    pub inner_radius: f32,
    /// Radial width of the accelerator ring.
    pub ring_width: f32,
    /// Disk center x (usually right of the viewport).
    pub center_x: f32,
    /// Disk center y.
    pub center_y: f32,
}

impl WheelLayout {
    /// Compute the layout for a viewport of `viewport` pixels.
    pub fn for_viewport(viewport: Size) -> Self {
        let width = viewport.width as f32;
        let height = viewport.height as f32;

        let side_margin = (width * 0.05).min(MAX_SIDE_MARGIN);
        let pointer_width = side_margin * 0.8;
        let band_width = (width * 0.9 - side_margin * 2.0).max(1.0);
        let radius = band_width * 2.0;

        Self {
            viewport,
            side_margin,
            pointer_width,
            pointer_half_height: pointer_width * 0.5,
            band_width,
            radius,
            inner_radius: radius - band_width,
            ring_width: side_margin * 0.5,
            center_x: width - side_margin * 2.0 + band_width,
            center_y: height / 2.0,
        }
    }

    /// Disk center in pixel coordinates.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x.round() as i32, self.center_y.round() as i32)
    }

    /// X of the disk's left rim, where the pointer tip sits.
    #[inline]
    pub fn rim_x(&self) -> f32 {
        self.center_x - self.radius
    }

    /// Inner radius of the accelerator ring.
    #[inline]
    pub fn ring_inner_radius(&self) -> f32 {
        (self.inner_radius - self.ring_width).max(0.0)
    }

    /// Point at `radius` from the disk center along screen angle `theta` (clockwise from
    /// +x, y down).
    #[inline]
    pub fn polar(
        &self,
        radius: f32,
        theta: f32,
    ) -> Point {
        Point::new(
            radius.mul_add(theta.cos(), self.center_x).round() as i32,
            radius.mul_add(theta.sin(), self.center_y).round() as i32,
        )
    }

    /// Half of the angular range around the pointer direction (PI) in which any part of
    /// the disk can be inside the viewport. PI when the center itself is on screen.
    pub fn visible_half_angle(&self) -> f32 {
        let width = self.viewport.width as f32;
        let distance = self.center_x - width;
        if distance <= 0.0 {
            return PI;
        }
        // The viewport corners nearest the center bound every visible point.
        let height = self.viewport.height as f32;
        let reach = self.center_y.max(height - self.center_y);
        reach.atan2(distance)
    }
}

/// Diameter in whole pixels for a radius.
#[inline]
pub(crate) fn diameter(radius: f32) -> u32 {
    (radius * 2.0).round().max(0.0) as u32
}
