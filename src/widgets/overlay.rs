//! Debug overlay: FPS, uptime and the most recent events in the top-left corner.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ 50 FPS          00:01:23 │
//! │ > Spin                   │
//! │ > Settled: Tea           │
//! └──────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::PANEL;
use crate::profiling::{DebugLog, FrameMetrics, LOG_BUFFER_SIZE};
use crate::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};

/// Overlay panel width.
const OVERLAY_WIDTH: u32 = 200;

/// Height of one text line.
const LINE_HEIGHT: i32 = 12;

/// Inner padding.
const PADDING: i32 = 4;

/// Log text color (amber, like a terminal).
const LOG_COLOR: Rgb565 = Rgb565::new(31, 40, 0);

const PANEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL);

/// Draw the overlay into the top-left corner of `display`.
pub fn draw_debug_overlay<D>(
    display: &mut D,
    metrics: &FrameMetrics,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let origin = display.bounding_box().top_left;
    let height = (LINE_HEIGHT * (LOG_BUFFER_SIZE as i32 + 1) + PADDING * 2) as u32;

    Rectangle::new(origin, Size::new(OVERLAY_WIDTH, height))
        .into_styled(PANEL_FILL)
        .draw(display)
        .ok();

    let log_style = MonoTextStyle::new(&FONT_6X10, LOG_COLOR);

    let first_baseline = origin.y + PADDING + LINE_HEIGHT - 3;
    Text::with_text_style(
        &metrics.fps_string(),
        Point::new(origin.x + PADDING, first_baseline),
        LABEL_STYLE_WHITE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        &metrics.uptime_string(),
        Point::new(origin.x + OVERLAY_WIDTH as i32 - PADDING, first_baseline),
        LABEL_STYLE_WHITE,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();

    let mut y = first_baseline;
    for line in log.iter() {
        y += LINE_HEIGHT;
        let mut text: String<52> = String::new();
        let _ = write!(text, "> {line}");
        Text::with_text_style(&text, Point::new(origin.x + PADDING, y), log_style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}
