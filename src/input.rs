//! Hold-to-spin input.
//!
//! The wheel reads a single level each tick: "is the control held". Hosts usually have
//! more than one way to hold it (a key and a mouse button in the simulator), so
//! [`PressInput`] tracks each source and reports the combined level plus press and
//! release edges for logging.

/// A source of the hold level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressSource {
    Keyboard,
    Pointer,
}

/// Transition of the combined level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressEdge {
    Pressed,
    Released,
}

/// Combined hold state of every source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressInput {
    keyboard: bool,
    pointer: bool,
    was_pressed: bool,
}

impl PressInput {
    /// Create an input with nothing held.
    pub const fn new() -> Self {
        Self {
            keyboard: false,
            pointer: false,
            was_pressed: false,
        }
    }

    /// Record that `source` is now held or not.
    pub const fn set(
        &mut self,
        source: PressSource,
        held: bool,
    ) {
        match source {
            PressSource::Keyboard => self.keyboard = held,
            PressSource::Pointer => self.pointer = held,
        }
    }

    /// The level to pass to the wheel this tick.
    #[inline]
    pub const fn is_pressed(&self) -> bool {
        self.keyboard || self.pointer
    }

    /// Latch the current level and return the edge since the previous latch, if any.
    /// Call once per tick.
    pub const fn latch(&mut self) -> Option<PressEdge> {
        let pressed = self.is_pressed();
        if pressed == self.was_pressed {
            return None;
        }
        self.was_pressed = pressed;
        Some(if pressed { PressEdge::Pressed } else { PressEdge::Released })
    }
}
