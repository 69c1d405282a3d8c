//! Per-configuration disk template: slice colors, truncated labels and the label font.
//!
//! Built once when the entries change. Each frame only places the template at the
//! current angle, so nothing here runs per tick.

use core::f32::consts::{PI, TAU};

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;

use super::layout::WheelLayout;
use crate::selection::WheelConfiguration;
use crate::styles::LABEL_FONTS;

/// Color and label of one slice.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceTemplate {
    pub color: Rgb565,
    /// Label clipped to what fits in the band. Empty for padding slices.
    pub label: String,
}

/// Everything about the disk that does not depend on the angle.
#[derive(Clone, Debug)]
pub struct DiskTemplate {
    slices: Vec<SliceTemplate>,
    unit_angle: f32,
    font: &'static MonoFont<'static>,
}

impl DiskTemplate {
    /// Build the template for `wheel` drawn with `layout`.
    pub fn new(
        wheel: &WheelConfiguration,
        layout: &WheelLayout,
    ) -> Self {
        let count = wheel.slice_count();
        let unit_angle = TAU / count as f32;
        let font = label_font(layout.radius, unit_angle);

        let advance = font.character_size.width + font.character_spacing;
        let max_chars = (layout.band_width / advance.max(1) as f32) as usize;

        let palette = wheel.palette();
        let slices = wheel
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| SliceTemplate {
                color: palette.color_for(i),
                label: entry.label().chars().take(max_chars).collect(),
            })
            .collect();

        Self {
            slices,
            unit_angle,
            font,
        }
    }

    /// Slices in disk order.
    #[inline]
    pub fn slices(&self) -> &[SliceTemplate] {
        &self.slices
    }

    /// Angular width of one slice.
    #[inline]
    pub const fn unit_angle(&self) -> f32 {
        self.unit_angle
    }

    /// Font used for every label on this disk.
    #[inline]
    pub const fn font(&self) -> &'static MonoFont<'static> {
        self.font
    }

    /// Screen angle where slice `index` starts when the disk is rotated by `angle`.
    /// The slice then sweeps clockwise by one unit.
    ///
    /// Slice 0 ends at the pointer (PI) at rest, and the disk turns clockwise, so
    /// slice `floor(angle / unit)` is always the one covering PI.
    #[inline]
    pub fn slice_start(
        &self,
        index: usize,
        angle: f32,
    ) -> f32 {
        PI - (index + 1) as f32 * self.unit_angle + angle
    }
}

/// Largest label font whose glyph height fits `ceil(min(radius * sin(unit / 2), radius / 10))`:
/// half the slice's chord at the rim, capped at a tenth of the radius.
pub fn label_font(
    radius: f32,
    unit_angle: f32,
) -> &'static MonoFont<'static> {
    let limit = (radius * (unit_angle * 0.5).sin()).min(radius / 10.0).ceil();
    LABEL_FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height as f32 <= limit)
        .copied()
        .unwrap_or(LABEL_FONTS[0])
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::physics::indicated_index;
    use crate::selection::build;

    fn layout() -> WheelLayout {
        WheelLayout::for_viewport(Size::new(320, 240))
    }

    #[test]
    fn test_template_matches_configuration() {
        let wheel = build(&["A", "B", "C"]).unwrap();
        let disk = DiskTemplate::new(&wheel, &layout());
        assert_eq!(disk.slices().len(), 33);
        assert_eq!(disk.slices()[1].color, wheel.palette().color_for(1));
        assert_eq!(disk.slices()[4].label, "B");
    }

    #[test]
    fn test_padding_slice_has_no_label() {
        let wheel = build(&["A", "B", "C", "D", "E"]).unwrap();
        let disk = DiskTemplate::new(&wheel, &layout());
        assert!(disk.slices()[35].label.is_empty());
    }

    #[test]
    fn test_long_labels_truncated_to_band() {
        let long = "x".repeat(500);
        let wheel = build(&[long.as_str()]).unwrap();
        let layout = layout();
        let disk = DiskTemplate::new(&wheel, &layout);
        let font = disk.font();
        let width = disk.slices()[0].label.len() as u32 * (font.character_size.width + font.character_spacing);
        assert!(width as f32 <= layout.band_width, "label is {width} px wide");
        assert!(!disk.slices()[0].label.is_empty());
    }

    #[test]
    fn test_font_shrinks_with_many_slices() {
        let few = label_font(512.0, TAU / 32.0);
        let many = label_font(512.0, TAU / 400.0);
        assert!(many.character_size.height < few.character_size.height);
        // 512 * sin(PI / 400) is about 4 px: nothing fits, fall back to the smallest
        assert_eq!(many.character_size, LABEL_FONTS[0].character_size);
    }

    #[test]
    fn test_font_capped_by_radius_fraction() {
        // Two slices: half-chord is the full radius, the cap is radius / 10
        let font = label_font(100.0, PI);
        assert!(font.character_size.height <= 10);
    }

    #[test]
    fn test_pointer_slice_matches_indicated_index() {
        let wheel = build(&["A", "B", "C", "D", "E"]).unwrap();
        let disk = DiskTemplate::new(&wheel, &layout());
        let n = disk.slices().len();
        for step in 0..500 {
            let angle = (step as f32 * 0.0731).rem_euclid(TAU);
            let index = indicated_index(angle, n);
            let start = disk.slice_start(index, angle);
            let end = start + disk.unit_angle();
            assert!(
                start <= PI + 1e-4 && PI <= end + 1e-4,
                "angle {angle}: slice {index} spans [{start}, {end}] which misses the pointer"
            );
        }
    }
}
