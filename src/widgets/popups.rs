//! Popup announcing the settled selection.
//!
//! Non-modal: the wheel keeps accepting input while it is up, and a new spin settling
//! replaces it. The popup is a white-bordered red box centered on the display with the
//! label on two lines ("RESULT" and the label).

use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{RED, WHITE};
use crate::config::{NO_RESULT_LABEL, POPUP_DURATION};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};

/// Popup box size (inside the border).
const POPUP_SIZE: Size = Size::new(220, 60);

/// Border width around the box.
const BORDER: u32 = 3;

/// Longest label kept, in bytes. The box fits 21 characters of the title font.
const POPUP_LABEL_CAPACITY: usize = 32;

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// A settled selection and when it was announced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettledPopup {
    label: String<POPUP_LABEL_CAPACITY>,
    shown_at: Instant,
}

impl SettledPopup {
    /// Popup for a settled entry; `None` (padding) shows the placeholder.
    pub fn new(entry: Option<&str>) -> Self {
        Self::shown_at(entry, Instant::now())
    }

    /// Popup that appeared at `shown_at`.
    pub fn shown_at(
        entry: Option<&str>,
        shown_at: Instant,
    ) -> Self {
        let mut label = String::new();
        for c in entry.unwrap_or(NO_RESULT_LABEL).chars() {
            if label.push(c).is_err() {
                break;
            }
        }
        Self { label, shown_at }
    }

    #[inline]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Whether the popup has been up for `POPUP_DURATION` as of `now`.
    #[inline]
    pub fn is_expired_at(
        &self,
        now: Instant,
    ) -> bool {
        now.saturating_duration_since(self.shown_at) >= POPUP_DURATION
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

/// Draw the popup centered on `display`.
pub fn draw_settled_popup<D>(
    display: &mut D,
    popup: &SettledPopup,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = display.bounding_box().center();
    let box_area = Rectangle::with_center(center, POPUP_SIZE);

    box_area
        .offset(BORDER as i32)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    box_area.into_styled(RED_FILL).draw(display).ok();

    Text::with_text_style("RESULT", center + Point::new(0, -12), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(popup.label(), center + Point::new(0, 14), TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
