// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Desktop simulator for the roulette wheel.
//!
//! Opens an SDL window showing the wheel and a result banner. Entries come from the
//! command line (one per argument) or a built-in list, shuffled once at start.
//!
//! ```text
//! cargo run --features simulator -- Tea Coffee Water Juice
//! ```
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | `S` / left mouse button (hold) | Power the wheel |
//! | `R` | Reshuffle the entries and reset the wheel |
//! | `D` | Toggle the debug overlay (FPS, uptime, event log) |
//! | `G` | Toggle the gradient preview |
//! | `A` | Turn the gradient by 15 degrees |
//! | `Q` / close window | Quit |
//!
//! Key repeat is ignored for toggles; holding `S` is read as a level, not edges.
//!
//! # Logging
//!
//! Library log records go to stderr through `env_logger`. The filter is taken from
//! `ROULETTE_LOG` (e.g. `debug` or `roulette::physics=trace`), default `info`.

use core::fmt::Write as _;
use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use log::{error, info};
use roulette::colors::WHITE;
use roulette::config::{FRAME_TIME, GRADIENT_ANGLE_STEP, MAX_FRAME_DELTA, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use roulette::gradient::{Gradient, preview_size};
use roulette::input::{PressEdge, PressInput, PressSource};
use roulette::profiling::{DebugLog, FrameMetrics};
use roulette::randomizer::shuffle;
use roulette::widgets::{SettledPopup, draw_debug_overlay, draw_result_banner, draw_settled_popup};
use roulette::{ResultText, WheelController};

/// Entries used when none are given on the command line.
const DEFAULT_ENTRIES: [&str; 6] = ["Ramen", "Curry", "Sushi", "Pizza", "Tacos", "Salad"];

/// Environment variable holding the log level.
const LOG_LEVEL_VAR: &str = "ROULETTE_LOG";

// =============================================================================
// Logging
// =============================================================================

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_LEVEL_VAR, "info")).init();
}

// =============================================================================
// Main Loop
// =============================================================================

fn main() {
    init_logging();

    let mut entries: Vec<std::string::String> = std::env::args().skip(1).collect();
    if entries.is_empty() {
        entries = DEFAULT_ENTRIES.iter().map(|&entry| entry.to_owned()).collect();
    }
    shuffle(&mut entries);

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Roulette", &output_settings);

    let mut wheel = WheelController::new(display.size(), ResultText::new());

    // The listener runs inside `tick`; the loop picks its result up afterwards
    let settled: Rc<RefCell<Option<SettledPopup>>> = Rc::new(RefCell::new(None));
    let settled_sink = Rc::clone(&settled);
    wheel.set_fix_listener(move |entry| {
        *settled_sink.borrow_mut() = Some(SettledPopup::new(entry));
    });

    if let Err(err) = wheel.set_data(&entries) {
        error!("cannot start: {err}");
        return;
    }
    info!("simulator started with {} entries", entries.len());

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut input = PressInput::new();
    let mut active_popup: Option<SettledPopup> = None;
    let mut show_debug = false;

    // Gradient for a screen-sized image, previewed scaled down in the middle
    let mut gradient = Gradient::with_default_stops();
    let mut show_gradient = false;
    let preview_area = match preview_size(display.size()) {
        Ok(size) => Rectangle::with_center(display.bounding_box().center(), size),
        Err(err) => {
            error!("cannot size the gradient preview: {err}");
            return;
        }
    };

    let mut metrics = FrameMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("Simulator started");

    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::S => input.set(PressSource::Keyboard, true),
                    Keycode::Q => return,
                    Keycode::R if !repeat => {
                        shuffle(&mut entries);
                        if let Err(err) = wheel.set_data(&entries) {
                            error!("reshuffle failed: {err}");
                        }
                        active_popup = None;
                        debug_log.push("Reshuffled");
                    }
                    Keycode::D if !repeat => {
                        show_debug = !show_debug;
                        debug_log.push(if show_debug { "Overlay: ON" } else { "Overlay: OFF" });
                    }
                    Keycode::G if !repeat => {
                        show_gradient = !show_gradient;
                        debug_log.push(if show_gradient { "Gradient: ON" } else { "Gradient: OFF" });
                    }
                    Keycode::A if show_gradient => {
                        gradient.set_angle((gradient.angle() + GRADIENT_ANGLE_STEP).rem_euclid(360.0));
                        let mut line: String<48> = String::new();
                        let _ = write!(line, "Gradient angle: {}", gradient.angle());
                        debug_log.push(&line);
                    }
                    _ => {}
                },
                SimulatorEvent::KeyUp {
                    keycode: Keycode::S,
                    ..
                } => input.set(PressSource::Keyboard, false),
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => input.set(PressSource::Pointer, true),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => input.set(PressSource::Pointer, false),
                _ => {}
            }
        }

        match input.latch() {
            Some(PressEdge::Pressed) => debug_log.push("Spin"),
            Some(PressEdge::Released) => debug_log.push("Coast"),
            None => {}
        }

        // ======================================================================
        // Physics and Wheel
        // ======================================================================

        let now = Instant::now();
        let delta = now.duration_since(last_tick).as_secs_f32().min(MAX_FRAME_DELTA);
        last_tick = now;

        if delta > 0.0 {
            if let Err(err) = wheel.tick(delta, input.is_pressed(), &mut display) {
                error!("tick rejected: {err}");
            }
        } else {
            wheel.render(&mut display);
        }

        if let Some(popup) = settled.borrow_mut().take() {
            let mut line: String<48> = String::new();
            let _ = write!(line, "Settled: {}", popup.label());
            debug_log.push(&line);
            active_popup = Some(popup);
        }

        // ======================================================================
        // Overlays
        // ======================================================================

        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        draw_result_banner(&mut display, wheel.view().as_str());
        if show_gradient {
            preview_area
                .offset(2)
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(&mut display)
                .ok();
            gradient.draw(&mut display, preview_area);
        }
        if let Some(ref popup) = active_popup {
            draw_settled_popup(&mut display, popup);
        }
        if show_debug {
            draw_debug_overlay(&mut display, &metrics, &debug_log);
        }

        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
        metrics.record_frame(frame_start.elapsed());
    }
}
