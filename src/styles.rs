//! Pre-computed text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in embedded-graphics 0.8, so
//! every fixed style is a `const` here and the drawing code only builds a style when the
//! font is chosen at runtime (slice labels, see [`LABEL_FONTS`]).

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{
    PROFONT_7_POINT, PROFONT_9_POINT, PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::colors::{BLACK, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Popups and the result banner.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Debug overlay lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Centered both ways on the anchor. Result banner.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned text. FPS counter.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Left-aligned, vertically centered on the anchor. Slice labels start at the outer rim
/// and run inward along the slice's middle.
pub const SLICE_LABEL: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Candidate fonts for slice labels, smallest first. The disk template picks the largest
/// one that fits the slice height.
pub const LABEL_FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for overlay lines.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text for the result banner and popups.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Returns the label style for a slice font. Labels are always black on the pastel
/// palettes.
#[inline]
pub const fn slice_label_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(font, BLACK)
}
