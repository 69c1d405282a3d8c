//! Linear gradient images.
//!
//! A [`Gradient`] is a list of color stops laid along a line through the image center.
//! The line points `angle` degrees clockwise from +x (screen coordinates, y down), and
//! is just long enough that both of its ends touch the image's far corners: position 0
//! is painted at one end, position 1 at the other.
//!
//! ```text
//!   angle = 0:   0 ──────────► 1      angle = 90:  0
//!                                                  │
//!                                                  ▼
//!                                                  1
//! ```
//!
//! Colors between stops are interpolated channel by channel in 8-bit RGB and only
//! reduced to the display's Rgb565 when a pixel is written. Past the first or last stop
//! the end color continues.

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::config::{DEFAULT_GRADIENT_ANGLE, MAX_COLOR_STOPS, PREVIEW_MAX_SIZE};
use crate::error::WheelError;

/// Color of the first stop appended to an empty gradient.
pub const FIRST_STOP_COLOR: Rgb888 = Rgb888::RED;

/// Color of the second stop appended to a gradient.
pub const SECOND_STOP_COLOR: Rgb888 = Rgb888::BLUE;

// =============================================================================
// Color Stops
// =============================================================================

/// One color at a position along the gradient line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    position: f32,
    color: Rgb888,
}

impl ColorStop {
    /// # Errors
    /// [`WheelError::InvalidColorStop`] if `position` is outside `[0, 1]`.
    pub fn new(
        position: f32,
        color: Rgb888,
    ) -> Result<Self, WheelError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(WheelError::InvalidColorStop("position must be within [0, 1]"));
        }
        Ok(Self { position, color })
    }

    /// Parse a web color such as `#ff8000` into a stop.
    ///
    /// # Errors
    /// [`WheelError::InvalidColorStop`] if the position is out of range or the color is
    /// not `#rrggbb`.
    pub fn from_hex(
        position: f32,
        hex: &str,
    ) -> Result<Self, WheelError> {
        Self::new(position, parse_hex_color(hex)?)
    }

    #[inline]
    pub const fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub const fn color(&self) -> Rgb888 {
        self.color
    }
}

/// Parse `#rrggbb` (case-insensitive, leading `#` required).
///
/// # Errors
/// [`WheelError::InvalidColorStop`] for anything else.
pub fn parse_hex_color(hex: &str) -> Result<Rgb888, WheelError> {
    const MALFORMED: WheelError = WheelError::InvalidColorStop("expected a #rrggbb color");

    let digits = hex.strip_prefix('#').ok_or(MALFORMED)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MALFORMED);
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| MALFORMED)?;
    Ok(Rgb888::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

// =============================================================================
// Gradient
// =============================================================================

/// Stops plus direction. Stops are kept ordered by position; stops sharing a position
/// keep the order they were added in, and the later one wins from that position on.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop, MAX_COLOR_STOPS>,
    angle: f32,
}

impl Gradient {
    /// Empty gradient pointing at `angle` degrees.
    pub const fn new(angle: f32) -> Self {
        Self { stops: Vec::new(), angle }
    }

    /// The gradient a new image starts with: red at 0 to blue at 1, top to bottom.
    pub fn with_default_stops() -> Self {
        let mut gradient = Self::new(DEFAULT_GRADIENT_ANGLE);
        gradient.push(ColorStop {
            position: 0.0,
            color: FIRST_STOP_COLOR,
        });
        gradient.push(ColorStop {
            position: 1.0,
            color: SECOND_STOP_COLOR,
        });
        gradient
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Direction in degrees clockwise from +x.
    #[inline]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    pub const fn set_angle(
        &mut self,
        angle: f32,
    ) {
        self.angle = angle;
    }

    /// Add a stop.
    ///
    /// # Errors
    /// [`WheelError::TooManyStops`] when the gradient is full.
    pub fn add_stop(
        &mut self,
        stop: ColorStop,
    ) -> Result<(), WheelError> {
        if self.stops.is_full() {
            return Err(WheelError::TooManyStops(MAX_COLOR_STOPS));
        }
        self.push(stop);
        Ok(())
    }

    /// Add the stop an editor appends by default: red at 0 to an empty gradient, blue
    /// at 1 as the second stop, and after that a copy of the last stop's color at 1.
    ///
    /// # Errors
    /// [`WheelError::TooManyStops`] when the gradient is full.
    pub fn append_default_stop(&mut self) -> Result<(), WheelError> {
        let stop = match self.stops.as_slice() {
            [] => ColorStop {
                position: 0.0,
                color: FIRST_STOP_COLOR,
            },
            [_] => ColorStop {
                position: 1.0,
                color: SECOND_STOP_COLOR,
            },
            [.., last] => ColorStop {
                position: 1.0,
                color: last.color,
            },
        };
        self.add_stop(stop)
    }

    /// Remove and return the stop at `index`.
    pub fn remove_stop(
        &mut self,
        index: usize,
    ) -> Option<ColorStop> {
        (index < self.stops.len()).then(|| self.stops.remove(index))
    }

    fn push(
        &mut self,
        stop: ColorStop,
    ) {
        let at = self.stops.partition_point(|s| s.position <= stop.position);
        // Capacity is checked by the callers
        let _ = self.stops.insert(at, stop);
    }

    /// Color at position `t` along the line, `None` without stops.
    pub fn color_at(
        &self,
        t: f32,
    ) -> Option<Rgb888> {
        let after = self.stops.partition_point(|s| s.position <= t);
        match (after.checked_sub(1).map(|i| &self.stops[i]), self.stops.get(after)) {
            (None, None) => None,
            (Some(stop), None) | (None, Some(stop)) => Some(stop.color),
            (Some(from), Some(to)) => {
                // `from.position <= t < to.position`, so the span is never zero
                let f = (t - from.position) / (to.position - from.position);
                Some(lerp_rgb888(from.color, to.color, f))
            }
        }
    }

    /// The gradient line for a `size` image, in image coordinates.
    pub fn axis(
        &self,
        size: Size,
    ) -> GradientAxis {
        let (sin, cos) = (self.angle * PI / 180.0).sin_cos();
        let cx = size.width as f32 * 0.5;
        let cy = size.height as f32 * 0.5;
        let half_length = (cx * cos - cy * sin).abs().max((cx * cos + cy * sin).abs());
        GradientAxis {
            start: (cx - half_length * cos, cy - half_length * sin),
            end: (cx + half_length * cos, cy + half_length * sin),
        }
    }

    /// Fill `area` of `display` with the gradient. Draws nothing without stops.
    pub fn draw<D>(
        &self,
        display: &mut D,
        area: Rectangle,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.stops.is_empty() || area.is_zero_sized() {
            return;
        }
        let axis = self.axis(area.size);
        let origin = area.top_left;
        let colors = area.points().map(|p| {
            let local = p - origin;
            let t = axis.position_at(local.x as f32 + 0.5, local.y as f32 + 0.5);
            self.color_at(t).map_or(Rgb565::BLACK, Rgb565::from)
        });
        display.fill_contiguous(&area, colors).ok();
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::with_default_stops()
    }
}

/// Line the stops are laid along: position 0 at `start`, 1 at `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientAxis {
    pub start: (f32, f32),
    pub end: (f32, f32),
}

impl GradientAxis {
    /// Position of the point `(x, y)` projected onto the line, 0 at `start`.
    pub fn position_at(
        &self,
        x: f32,
        y: f32,
    ) -> f32 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        let length_sq = dx * dx + dy * dy;
        if length_sq == 0.0 {
            return 0.0;
        }
        ((x - self.start.0) * dx + (y - self.start.1) * dy) / length_sq
    }
}

/// Largest size with the aspect ratio of `image` whose longer side is
/// `PREVIEW_MAX_SIZE`. Small images are scaled up.
///
/// # Errors
/// [`WheelError::InvalidImageSize`] if either side is zero.
pub fn preview_size(image: Size) -> Result<Size, WheelError> {
    if image.width == 0 || image.height == 0 {
        return Err(WheelError::InvalidImageSize(image.width, image.height));
    }
    let max = PREVIEW_MAX_SIZE as f32;
    let ratio = (max / image.width as f32).min(max / image.height as f32);
    Ok(Size::new(
        (image.width as f32 * ratio).round() as u32,
        (image.height as f32 * ratio).round() as u32,
    ))
}

fn lerp_rgb888(
    from: Rgb888,
    to: Rgb888,
    t: f32,
) -> Rgb888 {
    let channel = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Rgb888::new(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    fn two_stop(angle: f32) -> Gradient {
        let mut gradient = Gradient::new(angle);
        gradient.add_stop(ColorStop::new(0.0, Rgb888::BLACK).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(1.0, Rgb888::WHITE).unwrap()).unwrap();
        gradient
    }

    fn render(
        gradient: &Gradient,
        size: Size,
    ) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(size);
        gradient.draw(&mut display, Rectangle::new(Point::zero(), size));
        display
    }

    #[test]
    fn test_default_stops_red_to_blue() {
        let gradient = Gradient::with_default_stops();
        assert_eq!(gradient.angle(), 90.0);
        assert_eq!(gradient.stops().len(), 2);
        assert_eq!(gradient.color_at(0.0), Some(Rgb888::RED));
        assert_eq!(gradient.color_at(1.0), Some(Rgb888::BLUE));
    }

    #[test]
    fn test_append_default_stop_sequence() {
        let mut gradient = Gradient::new(0.0);
        gradient.append_default_stop().unwrap();
        gradient.append_default_stop().unwrap();
        assert_eq!(gradient.stops(), Gradient::with_default_stops().stops());

        // Third and later stops repeat the last color at the end
        gradient.append_default_stop().unwrap();
        let third = gradient.stops()[2];
        assert_eq!(third.position(), 1.0);
        assert_eq!(third.color(), Rgb888::BLUE);
    }

    #[test]
    fn test_stops_capacity() {
        let mut gradient = Gradient::new(0.0);
        for _ in 0..MAX_COLOR_STOPS {
            gradient.append_default_stop().unwrap();
        }
        assert_eq!(
            gradient.append_default_stop(),
            Err(WheelError::TooManyStops(MAX_COLOR_STOPS))
        );
    }

    #[test]
    fn test_interpolates_between_stops() {
        let gradient = two_stop(0.0);
        assert_eq!(gradient.color_at(0.5), Some(Rgb888::new(128, 128, 128)));
        assert_eq!(gradient.color_at(0.25), Some(Rgb888::new(64, 64, 64)));
    }

    #[test]
    fn test_end_colors_extend_past_stops() {
        let mut gradient = Gradient::new(0.0);
        gradient.add_stop(ColorStop::new(0.25, Rgb888::RED).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(0.75, Rgb888::GREEN).unwrap()).unwrap();
        assert_eq!(gradient.color_at(0.0), Some(Rgb888::RED));
        assert_eq!(gradient.color_at(-3.0), Some(Rgb888::RED));
        assert_eq!(gradient.color_at(0.9), Some(Rgb888::GREEN));
        assert_eq!(gradient.color_at(2.0), Some(Rgb888::GREEN));
    }

    #[test]
    fn test_shared_position_makes_hard_edge() {
        let mut gradient = Gradient::new(0.0);
        gradient.add_stop(ColorStop::new(0.0, Rgb888::RED).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(0.5, Rgb888::RED).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(0.5, Rgb888::BLUE).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(1.0, Rgb888::BLUE).unwrap()).unwrap();
        assert_eq!(gradient.color_at(0.49), Some(Rgb888::RED));
        assert_eq!(gradient.color_at(0.5), Some(Rgb888::BLUE), "Later stop wins at the edge");
    }

    #[test]
    fn test_stops_kept_in_position_order() {
        let mut gradient = Gradient::new(0.0);
        gradient.add_stop(ColorStop::new(1.0, Rgb888::BLUE).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(0.0, Rgb888::RED).unwrap()).unwrap();
        gradient.add_stop(ColorStop::new(0.5, Rgb888::GREEN).unwrap()).unwrap();
        let positions: std::vec::Vec<f32> = gradient.stops().iter().map(ColorStop::position).collect();
        assert_eq!(positions, [0.0, 0.5, 1.0]);

        assert_eq!(gradient.remove_stop(1).map(|s| s.color()), Some(Rgb888::GREEN));
        assert_eq!(gradient.remove_stop(5), None);
        assert_eq!(gradient.stops().len(), 2);
    }

    #[test]
    fn test_no_stops_no_color() {
        assert_eq!(Gradient::new(0.0).color_at(0.5), None);
    }

    #[test]
    fn test_stop_position_validated() {
        assert!(ColorStop::new(1.5, Rgb888::RED).is_err());
        assert!(ColorStop::new(-0.1, Rgb888::RED).is_err());
        assert!(ColorStop::new(f32::NAN, Rgb888::RED).is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF8000"), Ok(Rgb888::new(255, 128, 0)));
        assert_eq!(parse_hex_color("#0000ff"), Ok(Rgb888::BLUE));
        assert!(parse_hex_color("FF8000").is_err(), "Leading # required");
        assert!(parse_hex_color("#FF80").is_err());
        assert!(parse_hex_color("#GG8000").is_err());
        assert!(parse_hex_color("#+F8000").is_err());
        assert_eq!(
            ColorStop::from_hex(0.5, "#00ff00").map(|s| s.color()),
            Ok(Rgb888::GREEN)
        );
    }

    #[test]
    fn test_axis_horizontal_at_zero_degrees() {
        let axis = two_stop(0.0).axis(Size::new(100, 50));
        assert!((axis.start.0 - 0.0).abs() < 1e-4 && (axis.start.1 - 25.0).abs() < 1e-4);
        assert!((axis.end.0 - 100.0).abs() < 1e-4 && (axis.end.1 - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_axis_reaches_corners_at_angle() {
        // At 45 degrees the line runs through the center and both far corners
        // project onto its ends
        let size = Size::new(100, 50);
        let axis = two_stop(45.0).axis(size);
        assert!(axis.position_at(0.0, 0.0).abs() < 1e-4);
        assert!((axis.position_at(100.0, 50.0) - 1.0).abs() < 1e-4);
        assert!(axis.position_at(100.0, 0.0) > 0.0 && axis.position_at(100.0, 0.0) < 1.0);
    }

    #[test]
    fn test_zero_degrees_runs_left_to_right() {
        let display = render(&two_stop(0.0), Size::new(64, 16));
        let left = display.get_pixel(Point::new(0, 8));
        let right = display.get_pixel(Point::new(63, 8));
        assert_eq!(left, Rgb565::BLACK);
        assert_eq!(right, Rgb565::WHITE);
        assert_eq!(display.get_pixel(Point::new(0, 0)), left, "Columns are uniform");
        assert_eq!(display.get_pixel(Point::new(0, 15)), left);
    }

    #[test]
    fn test_ninety_degrees_runs_top_to_bottom() {
        let display = render(&Gradient::with_default_stops(), Size::new(16, 64));
        assert_eq!(display.get_pixel(Point::new(8, 0)), Rgb565::RED);
        assert_eq!(display.get_pixel(Point::new(8, 63)), Rgb565::BLUE);
        assert_eq!(display.get_pixel(Point::new(0, 0)), display.get_pixel(Point::new(15, 0)), "Rows are uniform");

        let middle = display.get_pixel(Point::new(8, 32));
        assert!(middle.r() > 0 && middle.b() > 0, "Middle row is a red/blue mix");
    }

    #[test]
    fn test_draw_into_sub_area() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(100, 40));
        let area = Rectangle::new(Point::new(10, 10), Size::new(64, 20));
        two_stop(0.0).draw(&mut display, area);

        assert_eq!(display.get_pixel(Point::new(10, 20)), Rgb565::BLACK, "Axis starts at the area edge");
        assert_eq!(display.get_pixel(Point::new(73, 20)), Rgb565::WHITE);
        assert_eq!(display.get_pixel(Point::new(80, 20)), Rgb565::BLACK, "Outside untouched");
        assert_eq!(display.get_pixel(Point::new(73, 5)), Rgb565::BLACK, "Outside untouched");
    }

    #[test]
    fn test_preview_fits_longer_side() {
        assert_eq!(preview_size(Size::new(1000, 500)), Ok(Size::new(200, 100)));
        assert_eq!(preview_size(Size::new(300, 200)), Ok(Size::new(200, 133)));
        assert_eq!(preview_size(Size::new(320, 240)), Ok(Size::new(200, 150)));
        assert_eq!(preview_size(Size::new(50, 50)), Ok(Size::new(200, 200)));
        assert_eq!(
            preview_size(Size::new(0, 10)),
            Err(WheelError::InvalidImageSize(0, 10))
        );
    }
}
