//! Frame composition: turns the spin state into something drawable.
//!
//! The composer holds everything that only changes with the viewport or the entries
//! (layout, disk template, ring and pointer geometry). [`FrameComposer::compose`] is a
//! pure function of that and the current [`SpinState`]: it places the visible slices and
//! ring segments at the current angles and returns a [`Frame`] that any
//! `DrawTarget<Color = Rgb565>` can paint.
//!
//! # Layers
//!
//! Painted back to front:
//!
//! 1. Background
//! 2. Disk slices (full pie sectors)
//! 3. Disk hole (background-colored circle)
//! 4. Accelerator ring segments
//! 5. Ring hole
//! 6. Slice labels
//! 7. Pointer
//!
//! embedded-graphics has no annular sector, so each ring is drawn as pies with a hole
//! punched over them.

mod disk;
mod layout;
mod pointer;
mod ring;

pub use disk::{DiskTemplate, SliceTemplate, label_font};
pub use layout::WheelLayout;
pub use pointer::Pointer;
pub use ring::AcceleratorRing;

use core::f32::consts::{PI, TAU};

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Sector};
use embedded_graphics::text::Text;

use self::layout::diameter;
use crate::colors::{BACKGROUND, IDLE_DISK, RED};
use crate::physics::SpinState;
use crate::selection::WheelConfiguration;
use crate::styles::{SLICE_LABEL, slice_label_style};

const BACKGROUND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);

// =============================================================================
// Composer
// =============================================================================

/// Holds the angle-independent parts of the picture and composes frames from them.
#[derive(Debug)]
pub struct FrameComposer {
    layout: WheelLayout,
    disk: Option<DiskTemplate>,
    ring: AcceleratorRing,
    pointer: Pointer,
}

impl FrameComposer {
    /// Composer for a viewport of `viewport` pixels, with no entries yet.
    pub fn new(viewport: Size) -> Self {
        let layout = WheelLayout::for_viewport(viewport);
        Self {
            layout,
            disk: None,
            ring: AcceleratorRing::new(),
            pointer: Pointer::new(&layout),
        }
    }

    /// Rebuild the disk template for a new configuration.
    pub fn set_wheel(
        &mut self,
        wheel: &WheelConfiguration,
    ) {
        self.disk = Some(DiskTemplate::new(wheel, &self.layout));
    }

    #[inline]
    pub const fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    #[inline]
    pub const fn disk(&self) -> Option<&DiskTemplate> {
        self.disk.as_ref()
    }

    /// Place everything for `state`.
    pub fn compose(
        &self,
        state: &SpinState,
    ) -> Frame<'_> {
        let Some(disk) = self.disk.as_ref() else {
            return Frame::Idle(IdleFrame { layout: &self.layout });
        };

        let angle = state.disk_angle();
        let unit = disk.unit_angle();
        let reach = self.layout.visible_half_angle() + unit;

        let slices = (0..disk.slices().len())
            .filter_map(|index| {
                let start = disk.slice_start(index, angle);
                let middle = start + unit * 0.5;
                (angular_distance(middle, PI) <= reach).then_some(PlacedSlice { index, start })
            })
            .collect();

        let accel_angle = state.ring_angle();
        let ring = (0..self.ring.segment_count())
            .map(|index| PlacedSegment {
                index,
                start: self.ring.segment_start(index, accel_angle),
            })
            .collect();

        Frame::Wheel(WheelFrame {
            layout: &self.layout,
            disk,
            ring_unit: self.ring.unit_angle(),
            pointer: &self.pointer,
            slices,
            ring,
        })
    }
}

/// Absolute difference between two angles, folded into `[0, PI]`.
fn angular_distance(
    a: f32,
    b: f32,
) -> f32 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

// =============================================================================
// Frames
// =============================================================================

/// One composed picture.
#[derive(Debug)]
pub enum Frame<'a> {
    /// No entries set yet: an empty lavender disk outlined in red.
    Idle(IdleFrame<'a>),
    /// A configured wheel at a given angle.
    Wheel(WheelFrame<'a>),
}

impl Frame<'_> {
    /// Paint the frame. Draw errors are ignored per primitive.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        // The disk is far larger than the viewport; clip before filling.
        let clip = display.bounding_box();
        let mut target = display.clipped(&clip);
        match self {
            Self::Idle(frame) => frame.draw(&mut target),
            Self::Wheel(frame) => frame.draw(&mut target),
        }
    }

    /// Whether this is the placeholder frame.
    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle(_))
    }
}

#[derive(Debug)]
pub struct IdleFrame<'a> {
    layout: &'a WheelLayout,
}

impl IdleFrame<'_> {
    fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BACKGROUND).ok();

        let center = self.layout.center();
        let outlined = |fill: Rgb565| {
            PrimitiveStyleBuilder::new()
                .fill_color(fill)
                .stroke_color(RED)
                .stroke_width(1)
                .build()
        };
        Circle::with_center(center, diameter(self.layout.radius))
            .into_styled(outlined(IDLE_DISK))
            .draw(display)
            .ok();
        Circle::with_center(center, diameter(self.layout.inner_radius))
            .into_styled(outlined(BACKGROUND))
            .draw(display)
            .ok();
    }
}

/// A slice placed at the current angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedSlice {
    pub index: usize,
    /// Screen angle where the slice starts (it sweeps one unit clockwise).
    pub start: f32,
}

/// A ring segment placed at the current accelerator angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedSegment {
    pub index: usize,
    pub start: f32,
}

#[derive(Debug)]
pub struct WheelFrame<'a> {
    layout: &'a WheelLayout,
    disk: &'a DiskTemplate,
    ring_unit: f32,
    pointer: &'a Pointer,
    slices: Vec<PlacedSlice>,
    ring: Vec<PlacedSegment>,
}

impl WheelFrame<'_> {
    /// Slices that can be on screen this frame.
    #[inline]
    pub fn slices(&self) -> &[PlacedSlice] {
        &self.slices
    }

    /// Ring segments (always all of them).
    #[inline]
    pub fn ring(&self) -> &[PlacedSegment] {
        &self.ring
    }

    fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = self.layout;
        let center = layout.center();
        let unit = Angle::from_radians(self.disk.unit_angle());

        display.clear(BACKGROUND).ok();

        let templates = self.disk.slices();
        for slice in &self.slices {
            Sector::with_center(center, diameter(layout.radius), Angle::from_radians(slice.start), unit)
                .into_styled(PrimitiveStyle::with_fill(templates[slice.index].color))
                .draw(display)
                .ok();
        }
        Circle::with_center(center, diameter(layout.inner_radius))
            .into_styled(BACKGROUND_FILL)
            .draw(display)
            .ok();

        let ring_unit = Angle::from_radians(self.ring_unit);
        for segment in &self.ring {
            Sector::with_center(
                center,
                diameter(layout.inner_radius),
                Angle::from_radians(segment.start),
                ring_unit,
            )
            .into_styled(PrimitiveStyle::with_fill(AcceleratorRing::segment_color(segment.index)))
            .draw(display)
            .ok();
        }
        Circle::with_center(center, diameter(layout.ring_inner_radius()))
            .into_styled(BACKGROUND_FILL)
            .draw(display)
            .ok();

        // Labels run horizontally from the rim toward the center along each slice's middle.
        let style = slice_label_style(self.disk.font());
        for slice in &self.slices {
            let label = templates[slice.index].label.as_str();
            if label.is_empty() {
                continue;
            }
            let anchor = layout.polar(layout.radius, slice.start + self.disk.unit_angle() * 0.5);
            Text::with_text_style(label, anchor, style, SLICE_LABEL)
                .draw(display)
                .ok();
        }

        self.pointer.draw(display);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
