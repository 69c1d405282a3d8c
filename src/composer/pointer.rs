//! Static pointer triangle left of the disk.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Triangle};

use super::layout::WheelLayout;
use crate::colors::{POINTER, WHITE};

/// The pointer: tip touching the disk's rim at the vertical center, pointing right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    triangle: Triangle,
    style: PrimitiveStyle<Rgb565>,
}

impl Pointer {
    pub fn new(layout: &WheelLayout) -> Self {
        let tip_x = layout.rim_x();
        let base_x = (tip_x - layout.pointer_width).round() as i32;
        let half = layout.pointer_half_height.round() as i32;
        let tip = Point::new(tip_x.round() as i32, layout.center_y.round() as i32);

        Self {
            triangle: Triangle::new(tip, Point::new(base_x, tip.y - half), Point::new(base_x, tip.y + half)),
            style: PrimitiveStyleBuilder::new()
                .fill_color(POINTER)
                .stroke_color(WHITE)
                .stroke_width(1)
                .build(),
        }
    }

    /// Tip of the triangle, on the disk's rim.
    #[inline]
    pub const fn tip(&self) -> Point {
        self.triangle.vertices[0]
    }

    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.triangle.into_styled(self.style).draw(display).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_on_rim() {
        let layout = WheelLayout::for_viewport(Size::new(320, 240));
        let pointer = Pointer::new(&layout);
        assert_eq!(pointer.tip(), Point::new(32, 120));
        assert_eq!(pointer.triangle.vertices[1], Point::new(19, 114));
        assert_eq!(pointer.triangle.vertices[2], Point::new(19, 126));
    }
}
