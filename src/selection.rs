//! Expansion of an entry list into the slices drawn on the wheel.
//!
//! A wheel with three entries would show three huge wedges and barely seem to turn, so
//! the list is repeated whole until the disk has at least [`MIN_SLICES`] slices:
//!
//! ```text
//! ["A", "B", "C"]  ->  repeat ceil(32 / 3) = 11 times  ->  33 slices, 3-color palette
//! ["A" .. "E"]     ->  repeat ceil(32 / 5) = 7 times   ->  35 slices, odd
//!                                                      ->  + 1 blank = 36, 2-color palette
//! ```
//!
//! # Palette Rule
//!
//! Neighbouring slices must never share a color, including the seam between the last
//! and the first slice. A slice count divisible by three cycles three colors cleanly.
//! Anything else uses two colors, which only alternates cleanly around the circle when
//! the count is even, so an odd count gets one blank slice appended. A wheel that
//! settles on the blank reports "no result".

use log::debug;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{PALETTE_THREE, PALETTE_TWO};
use crate::config::{MIN_SLICES, NO_RESULT_LABEL};
use crate::error::WheelError;

// =============================================================================
// Entry
// =============================================================================

/// One labeled option on the wheel. An empty label marks a padding slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Entry {
    label: String,
}

impl Entry {
    /// Create an entry with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    /// Create a padding entry (empty label).
    pub const fn blank() -> Self {
        Self { label: String::new() }
    }

    /// The raw label (empty for padding).
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this is a padding slice.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.label.is_empty()
    }

    /// Label to show to the user: the placeholder for blanks, the label otherwise.
    #[inline]
    pub fn display_label(&self) -> &str {
        if self.is_blank() { NO_RESULT_LABEL } else { &self.label }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Cyclic slice coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Peach / sky / orchid, for slice counts divisible by three.
    Three,
    /// Peach / sky, for everything else (count padded to even).
    Two,
}

impl Palette {
    /// The colors of this palette in cycle order.
    #[inline]
    pub const fn colors(self) -> &'static [Rgb565] {
        match self {
            Self::Three => &PALETTE_THREE,
            Self::Two => &PALETTE_TWO,
        }
    }

    /// Color of the slice at `index`.
    #[inline]
    pub const fn color_for(
        self,
        index: usize,
    ) -> Rgb565 {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}

// =============================================================================
// Wheel Configuration
// =============================================================================

/// The expanded, colored slice sequence for one `set_data` call. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfiguration {
    entries: Vec<Entry>,
    palette: Palette,
    source_len: usize,
    padded: bool,
}

impl WheelConfiguration {
    /// All slices in disk order (repetitions first, padding last).
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of slices on the disk. Always at least 1.
    #[inline]
    pub fn slice_count(&self) -> usize {
        self.entries.len()
    }

    /// Slice at `index`, wrapping around the disk.
    #[inline]
    pub fn entry(
        &self,
        index: usize,
    ) -> &Entry {
        &self.entries[index % self.entries.len()]
    }

    /// Palette chosen for this slice count.
    #[inline]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Number of entries the host supplied before expansion.
    #[inline]
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// Whether a blank slice was appended.
    #[inline]
    pub const fn is_padded(&self) -> bool {
        self.padded
    }
}

/// Expand `labels` into a wheel-ready configuration.
///
/// # Errors
/// [`WheelError::InvalidInput`] if `labels` is empty.
pub fn build<S: AsRef<str>>(labels: &[S]) -> Result<WheelConfiguration, WheelError> {
    if labels.is_empty() {
        return Err(WheelError::InvalidInput);
    }

    let source_len = labels.len();
    let repeat_count = MIN_SLICES.div_ceil(source_len);

    let mut entries = Vec::with_capacity(source_len * repeat_count + 1);
    for _ in 0..repeat_count {
        entries.extend(labels.iter().map(|label| Entry::new(label.as_ref())));
    }

    let mut padded = false;
    let palette = if entries.len() % 3 == 0 {
        Palette::Three
    } else {
        if entries.len() % 2 == 1 {
            entries.push(Entry::blank());
            padded = true;
        }
        Palette::Two
    };

    debug!(
        "built wheel: {source_len} entries x{repeat_count} -> {} slices, {palette:?} palette",
        entries.len()
    );

    Ok(WheelConfiguration {
        entries,
        palette,
        source_len,
        padded,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cfg: &WheelConfiguration) -> Vec<&str> {
        cfg.entries().iter().map(Entry::label).collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(build(&empty), Err(WheelError::InvalidInput));
    }

    #[test]
    fn test_three_entries_repeat_to_33() {
        let cfg = build(&["A", "B", "C"]).unwrap();
        assert_eq!(cfg.slice_count(), 33, "ceil(32/3) = 11 repetitions");
        assert_eq!(cfg.palette(), Palette::Three);
        assert!(!cfg.is_padded());
        assert!(cfg.entries().iter().all(|e| !e.is_blank()), "No padding expected");
        // Order preserved within every repetition
        for chunk in labels(&cfg).chunks(3) {
            assert_eq!(chunk, ["A", "B", "C"]);
        }
    }

    #[test]
    fn test_two_entries_repeat_to_even_count() {
        let cfg = build(&["X", "Y"]).unwrap();
        assert_eq!(cfg.slice_count(), 32, "ceil(32/2) = 16 repetitions, even, no padding");
        assert_eq!(cfg.palette(), Palette::Two);
        assert!(!cfg.is_padded());
    }

    #[test]
    fn test_odd_count_gets_one_blank_at_end() {
        let cfg = build(&["A", "B", "C", "D", "E"]).unwrap();
        // 5 x 7 = 35 slices, not divisible by 3, odd -> one blank appended
        assert_eq!(cfg.slice_count(), 36);
        assert_eq!(cfg.palette(), Palette::Two);
        assert!(cfg.is_padded());
        assert!(cfg.entries()[35].is_blank(), "Padding must be last");
        assert_eq!(cfg.entries().iter().filter(|e| e.is_blank()).count(), 1);
    }

    #[test]
    fn test_single_entry() {
        let cfg = build(&["solo"]).unwrap();
        assert_eq!(cfg.slice_count(), 32);
        assert!(cfg.entries().iter().all(|e| e.label() == "solo"));
    }

    #[test]
    fn test_long_list_not_repeated() {
        let input: Vec<String> = (0..40).map(|i| format!("item{i}")).collect();
        let cfg = build(&input).unwrap();
        // 40 >= MIN_SLICES, so one copy; 40 is even and not divisible by 3
        assert_eq!(cfg.slice_count(), 40);
        assert_eq!(cfg.source_len(), 40);
        assert_eq!(labels(&cfg), input.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_length_is_multiple_or_multiple_plus_one() {
        for n in 1..=70 {
            let input: Vec<String> = (0..n).map(|i| format!("e{i}")).collect();
            let cfg = build(&input).unwrap();
            let len = cfg.slice_count();
            assert!(len >= MIN_SLICES, "n={n}: {len} slices is below the minimum");
            assert!(
                len % n == 0 || (len - 1) % n == 0,
                "n={n}: {len} is neither a multiple of n nor a multiple plus one"
            );
            // Every input element appears, first occurrences in input order
            for (i, label) in input.iter().enumerate() {
                assert_eq!(cfg.entry(i).label(), label, "n={n}: order broken at {i}");
            }
            if cfg.palette() == Palette::Two {
                assert_eq!(len % 2, 0, "n={n}: 2-color wheel must have an even count");
            } else {
                assert_eq!(len % 3, 0, "n={n}: 3-color wheel must be divisible by 3");
            }
        }
    }

    #[test]
    fn test_padding_only_when_needed() {
        // Blank entries in the input are kept as-is and never count as padding
        let cfg = build(&["A", "", "C"]).unwrap();
        assert_eq!(cfg.slice_count(), 33);
        assert!(!cfg.is_padded());
    }

    #[test]
    fn test_entry_display_label() {
        assert_eq!(Entry::new("Tea").display_label(), "Tea");
        assert_eq!(Entry::blank().display_label(), NO_RESULT_LABEL);
        assert!(Entry::blank().is_blank());
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(Palette::Three.color_for(0), Palette::Three.color_for(3));
        assert_ne!(Palette::Three.color_for(0), Palette::Three.color_for(1));
        assert_eq!(Palette::Two.color_for(1), Palette::Two.color_for(5));
        assert_ne!(Palette::Two.color_for(0), Palette::Two.color_for(1));
    }

    #[test]
    fn test_entry_wraps_index() {
        let cfg = build(&["A", "B", "C"]).unwrap();
        assert_eq!(cfg.entry(33).label(), "A");
        assert_eq!(cfg.entry(34).label(), "B");
    }
}
