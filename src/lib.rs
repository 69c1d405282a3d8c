// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // usize/u32->f32 in angle and layout calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->usize where the value is known to be non-negative
#![allow(clippy::float_cmp)] // speed is clamped to exactly 0.0 and compared as such

//! A hold-to-spin roulette wheel.
//!
//! The host hands the wheel a list of entries, then calls it once per animation frame
//! with the elapsed time and whether the spin control is held. Holding powers the
//! wheel up towards a fixed speed; releasing lets friction bring it to rest, and the
//! entry under the pointer at that moment is the result.
//!
//! # Pipeline
//!
//! ```text
//!  entries ──► randomizer ──► selection::build ──► WheelConfiguration
//!                  (host)                                │
//!                                                        ▼
//!  (delta, pressed) ──► physics::SpinEngine ──► TickOutcome ──► ResultView / fix listener
//!                              │
//!                              ▼ SpinState
//!                      composer::FrameComposer ──► Frame ──► any DrawTarget<Rgb565>
//! ```
//!
//! [`controller::WheelController`] wires these together and is what most hosts use.
//! Everything is single-threaded and frame-driven. Each wheel owns its own state.
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`randomizer`] | Fisher–Yates shuffle for entry lists |
//! | [`selection`] | Repeats entries to fill the disk, picks the palette, pads |
//! | [`physics`] | Powered acceleration, friction, selection tracking, settle reports |
//! | [`composer`] | Layout, disk template, accelerator ring, pointer, frame drawing |
//! | [`controller`] | `set_data` / `advance` / `set_fix_listener` host interface |
//! | [`gradient`] | Linear color-stop gradients drawn at an angle, preview sizing |
//! | [`widgets`] | Result banner, settled popup, debug overlay |
//! | [`input`] | Combines several hold sources into one level |
//! | [`profiling`] | Frame metrics and an event log for the overlay |

pub mod colors;
pub mod composer;
pub mod config;
pub mod controller;
pub mod error;
pub mod gradient;
pub mod input;
pub mod physics;
pub mod profiling;
pub mod randomizer;
pub mod selection;
pub mod styles;
pub mod widgets;

pub use controller::{ResultText, ResultView, WheelController};
pub use error::WheelError;
pub use gradient::{ColorStop, Gradient};
pub use physics::{Settled, SpinEngine, SpinState, SpinTuning, TickOutcome};
pub use selection::{Entry, Palette, WheelConfiguration, build};
