//! Color constants for the wheel.
//!
//! All colors are `Rgb565` (5 bits red, 6 bits green, 5 bits blue). Web-style hex
//! colors are converted by dropping the low bits of each channel: `#ffdfaf` becomes
//! `(0xff >> 3, 0xdf >> 2, 0xaf >> 3) = (31, 55, 21)`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Slice label text and the darkest ring segment.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Pointer outline, brightest ring segment, overlay text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Outline of the idle (unconfigured) disk and popup background.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Slice Palettes
// =============================================================================

/// Peach `#ffdfaf`.
pub const PEACH: Rgb565 = Rgb565::new(31, 55, 21);

/// Sky blue `#afcfff`.
pub const SKY: Rgb565 = Rgb565::new(21, 51, 31);

/// Pink `#ffcfff`.
pub const ORCHID: Rgb565 = Rgb565::new(31, 51, 31);

/// Palette used when the slice count is a multiple of three.
pub const PALETTE_THREE: [Rgb565; 3] = [PEACH, SKY, ORCHID];

/// Palette used otherwise. The slice count is padded to even so the colors alternate
/// all the way around, including across the seam between the last and first slice.
pub const PALETTE_TWO: [Rgb565; 2] = [PEACH, SKY];

// =============================================================================
// Scene Colors
// =============================================================================

/// Table green `#007f00` behind the wheel.
pub const BACKGROUND: Rgb565 = Rgb565::new(0, 31, 0);

/// Lavender `#cfcfff` filling the disk before any entries are set.
pub const IDLE_DISK: Rgb565 = Rgb565::new(25, 51, 31);

/// Hot pink `#ff007f` pointer fill.
pub const POINTER: Rgb565 = Rgb565::new(31, 0, 15);

/// Light gray `#aaa` ring segment.
pub const SILVER: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray `#555` ring segment.
pub const GRAPHITE: Rgb565 = Rgb565::new(10, 21, 10);

/// Accelerator ring colors, cycled per segment.
pub const RING_COLORS: [Rgb565; 4] = [WHITE, SILVER, GRAPHITE, BLACK];

/// Translucent-looking dark panel behind the result banner and debug overlay.
pub const PANEL: Rgb565 = Rgb565::new(2, 6, 3);
