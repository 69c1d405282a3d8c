//! Result banner along the bottom edge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::PANEL;
use crate::styles::{CENTERED_MIDDLE, TITLE_STYLE_WHITE};

/// Height of the banner strip in pixels.
pub const BANNER_HEIGHT: u32 = 26;

const PANEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL);

/// Draw `label` centered in a dark strip at the bottom of `display`.
///
/// Labels wider than the display are clipped by the target.
pub fn draw_result_banner<D>(
    display: &mut D,
    label: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let area = display.bounding_box();
    let height = BANNER_HEIGHT.min(area.size.height);
    let top = area.top_left.y + (area.size.height - height) as i32;

    Rectangle::new(Point::new(area.top_left.x, top), Size::new(area.size.width, height))
        .into_styled(PANEL_FILL)
        .draw(display)
        .ok();

    let center = Point::new(
        area.top_left.x + (area.size.width / 2) as i32,
        top + (height / 2) as i32,
    );
    Text::with_text_style(label, center, TITLE_STYLE_WHITE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
