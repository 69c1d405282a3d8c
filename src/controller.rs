//! The wheel as a host sees it.
//!
//! [`WheelController`] owns one spin engine and one frame composer and wires their
//! outputs to the host: the label under the pointer goes to a [`ResultView`] whenever it
//! changes, and a registered listener hears about every settled spin.
//!
//! # Frame Loop
//!
//! ```ignore
//! let mut wheel = WheelController::new(Size::new(320, 240), |label: &str| println!("{label}"));
//! wheel.set_fix_listener(|entry| println!("fixed: {entry:?}"));
//! wheel.set_data(&["Tea", "Coffee", "Water"])?;
//!
//! loop {
//!     let pressed = input.is_pressed();
//!     let moving = wheel.tick(delta, pressed, &mut display)?;
//!     // sleep until the next frame; a host may slow down while !moving && !pressed
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;
use log::warn;

use crate::composer::{Frame, FrameComposer};
use crate::error::WheelError;
use crate::physics::{SpinEngine, SpinState, SpinTuning};
use crate::selection::build;

/// Longest label kept by [`ResultText`], in bytes.
pub const RESULT_TEXT_CAPACITY: usize = 64;

// =============================================================================
// Result View
// =============================================================================

/// Receives the label currently under the pointer.
///
/// Called on every change, and once with the first slice's label when entries are set.
/// Padding slices arrive as the "no result" placeholder, never as an empty string.
pub trait ResultView {
    fn show(
        &mut self,
        text: &str,
    );
}

impl<F> ResultView for F
where
    F: FnMut(&str),
{
    fn show(
        &mut self,
        text: &str,
    ) {
        self(text);
    }
}

/// A fixed-capacity text holder, for hosts that draw the label themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultText {
    text: String<RESULT_TEXT_CAPACITY>,
}

impl ResultText {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl ResultView for ResultText {
    fn show(
        &mut self,
        text: &str,
    ) {
        self.text.clear();
        for c in text.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

type FixListener = Box<dyn FnMut(Option<&str>)>;

/// One wheel: physics, picture, text sink and settle listener.
pub struct WheelController<V: ResultView> {
    engine: SpinEngine,
    composer: FrameComposer,
    view: V,
    fix_listener: Option<FixListener>,
    needs_redraw: bool,
}

impl<V: ResultView> WheelController<V> {
    /// Wheel for a `viewport`-sized display with the default physics.
    pub fn new(
        viewport: Size,
        view: V,
    ) -> Self {
        Self::from_engine(SpinEngine::default(), viewport, view)
    }

    /// Wheel with custom physics.
    ///
    /// # Errors
    /// [`WheelError::InvalidTuning`] if `tuning` is out of range.
    pub fn with_tuning(
        viewport: Size,
        view: V,
        tuning: SpinTuning,
    ) -> Result<Self, WheelError> {
        Ok(Self::from_engine(SpinEngine::new(tuning)?, viewport, view))
    }

    fn from_engine(
        engine: SpinEngine,
        viewport: Size,
        view: V,
    ) -> Self {
        Self {
            engine,
            composer: FrameComposer::new(viewport),
            view,
            fix_listener: None,
            needs_redraw: true,
        }
    }

    /// Replace the entries. The wheel goes back to rest on the first slice, whose label
    /// is pushed to the view.
    ///
    /// # Errors
    /// [`WheelError::InvalidInput`] if `entries` is empty. The current wheel stays as it was.
    pub fn set_data<S: AsRef<str>>(
        &mut self,
        entries: &[S],
    ) -> Result<(), WheelError> {
        let wheel = build(entries).inspect_err(|_| warn!("rejected empty entry list"))?;
        self.composer.set_wheel(&wheel);
        self.engine.configure(wheel);
        if let Some(entry) = self.engine.indicated_entry() {
            self.view.show(entry.display_label());
        }
        self.needs_redraw = true;
        Ok(())
    }

    /// Register the callback invoked when a spin settles: `Some(label)` for an entry,
    /// `None` for a padding slice. Replaces any previous listener.
    pub fn set_fix_listener<F>(
        &mut self,
        listener: F,
    ) where
        F: FnMut(Option<&str>) + 'static,
    {
        self.fix_listener = Some(Box::new(listener));
    }

    /// Advance the physics by `delta` seconds. Returns whether the wheel is still turning.
    ///
    /// The view and the fix listener are called from inside this method.
    ///
    /// # Errors
    /// [`WheelError::InvalidTimestep`] if `delta` is not finite and positive.
    pub fn advance(
        &mut self,
        delta: f32,
        pressed: bool,
    ) -> Result<bool, WheelError> {
        let outcome = self.engine.advance(delta, pressed)?;

        if outcome.selection_changed
            && let Some(entry) = self.engine.indicated_entry()
        {
            self.view.show(entry.display_label());
        }

        if let Some(settled) = &outcome.settled
            && let Some(listener) = self.fix_listener.as_mut()
        {
            listener(settled.label());
        }

        if outcome.still_moving || outcome.settled.is_some() || pressed {
            self.needs_redraw = true;
        }
        Ok(outcome.still_moving)
    }

    /// Compose the current state without drawing it.
    pub fn compose(&self) -> Frame<'_> {
        self.composer.compose(self.engine.state())
    }

    /// Draw the wheel into `display`.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.composer.compose(self.engine.state()).draw(display);
        self.needs_redraw = false;
    }

    /// [`advance`](Self::advance) then [`render`](Self::render).
    ///
    /// # Errors
    /// Same as `advance`; nothing is drawn on error.
    pub fn tick<D>(
        &mut self,
        delta: f32,
        pressed: bool,
        display: &mut D,
    ) -> Result<bool, WheelError>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let moving = self.advance(delta, pressed)?;
        self.render(display);
        Ok(moving)
    }

    /// Whether the picture changed since the last render.
    #[inline]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[inline]
    pub const fn engine(&self) -> &SpinEngine {
        &self.engine
    }

    #[inline]
    pub const fn state(&self) -> &SpinState {
        self.engine.state()
    }

    #[inline]
    pub const fn composer(&self) -> &FrameComposer {
        &self.composer
    }

    #[inline]
    pub const fn view(&self) -> &V {
        &self.view
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{BACKGROUND, IDLE_DISK};
    use crate::config::NO_RESULT_LABEL;

    const VIEWPORT: Size = Size::new(320, 240);
    const DT: f32 = 0.02;

    fn recording() -> (Rc<RefCell<Vec<Option<String<RESULT_TEXT_CAPACITY>>>>>, impl FnMut(Option<&str>) + 'static) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let listener = move |entry: Option<&str>| {
            sink.borrow_mut().push(entry.map(|label| {
                let mut s = String::new();
                s.push_str(label).ok();
                s
            }));
        };
        (events, listener)
    }

    fn spin(
        wheel: &mut WheelController<ResultText>,
        powered_ticks: usize,
    ) {
        for _ in 0..powered_ticks {
            wheel.advance(DT, true).unwrap();
        }
        for _ in 0..1000 {
            if !wheel.advance(DT, false).unwrap() {
                break;
            }
        }
    }

    #[test]
    fn test_set_data_shows_first_label() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        wheel.set_data(&["Tea", "Coffee"]).unwrap();
        assert_eq!(wheel.view().as_str(), "Tea");
        assert!(wheel.needs_redraw());
    }

    #[test]
    fn test_set_data_empty_keeps_previous_wheel() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        wheel.set_data(&["Tea"]).unwrap();
        let empty: [&str; 0] = [];
        assert_eq!(wheel.set_data(&empty), Err(WheelError::InvalidInput));
        assert!(wheel.engine().is_configured());
        assert_eq!(wheel.view().as_str(), "Tea");
    }

    #[test]
    fn test_unconfigured_advance_is_idle() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        assert_eq!(wheel.advance(DT, true), Ok(false));
        assert!(wheel.compose().is_idle());
    }

    #[test]
    fn test_invalid_delta_propagates() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        wheel.set_data(&["A", "B"]).unwrap();
        assert_eq!(wheel.advance(-1.0, true), Err(WheelError::InvalidTimestep(-1.0)));
    }

    #[test]
    fn test_view_follows_selection() {
        let mut seen: Vec<std::string::String> = Vec::new();
        {
            let mut wheel = WheelController::new(VIEWPORT, |label: &str| seen.push(label.to_owned()));
            wheel.set_data(&["A", "B", "C"]).unwrap();
            for _ in 0..100 {
                wheel.advance(DT, true).unwrap();
            }
        }
        assert_eq!(seen[0], "A");
        assert!(seen.len() > 3, "label should change as slices pass: {seen:?}");
        for pair in seen.windows(2) {
            assert_ne!(pair[0], pair[1], "view is only told about changes");
        }
    }

    #[test]
    fn test_fix_listener_fires_once_per_spin() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        let (events, listener) = recording();
        wheel.set_fix_listener(listener);
        wheel.set_data(&["A", "B", "C"]).unwrap();

        spin(&mut wheel, 100);
        for _ in 0..50 {
            wheel.advance(DT, false).unwrap();
        }

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        let label = events[0].as_ref().expect("no padding on a 33-slice wheel");
        assert_eq!(label.as_str(), wheel.view().as_str(), "view shows the settled entry");
    }

    #[test]
    fn test_blank_settle_reports_none_and_placeholder() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        let (events, listener) = recording();
        wheel.set_fix_listener(listener);
        wheel.set_data(&["A", "B", "C", "D", "E"]).unwrap();

        // Slice 35 of 36 is the padding; put it under the pointer, coasting to a stop
        let slice = core::f32::consts::TAU / 36.0;
        wheel.engine.force_motion(f64::from(slice * 35.5), 0.01, true);
        wheel.advance(DT, false).unwrap();

        assert_eq!(*events.borrow(), vec![None]);
        assert_eq!(wheel.view().as_str(), NO_RESULT_LABEL);
    }

    #[test]
    fn test_settle_without_listener_is_fine() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        wheel.set_data(&["A", "B", "C"]).unwrap();
        spin(&mut wheel, 10);
        assert_eq!(wheel.state().speed, 0.0);
    }

    #[test]
    fn test_set_data_resets_spin() {
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());
        wheel.set_data(&["A", "B", "C"]).unwrap();
        for _ in 0..30 {
            wheel.advance(DT, true).unwrap();
        }
        wheel.set_data(&["X", "Y"]).unwrap();
        assert_eq!(*wheel.state(), SpinState::rest());
        assert_eq!(wheel.view().as_str(), "X");
    }

    #[test]
    fn test_with_tuning_validates() {
        let tuning = SpinTuning {
            accel_duration: -1.0,
            ..SpinTuning::default()
        };
        assert!(WheelController::with_tuning(VIEWPORT, ResultText::new(), tuning).is_err());
    }

    #[test]
    fn test_tick_renders() {
        let mut display = SimulatorDisplay::<Rgb565>::new(VIEWPORT);
        let mut wheel = WheelController::new(VIEWPORT, ResultText::new());

        assert_eq!(wheel.tick(DT, false, &mut display), Ok(false));
        assert_eq!(display.get_pixel(Point::new(40, 120)), IDLE_DISK);

        wheel.set_data(&["A", "B", "C"]).unwrap();
        assert_eq!(wheel.tick(DT, true, &mut display), Ok(true));
        assert!(!wheel.needs_redraw());
        assert_ne!(display.get_pixel(Point::new(40, 125)), IDLE_DISK);
        assert_eq!(display.get_pixel(Point::new(5, 5)), BACKGROUND);
    }

    #[test]
    fn test_result_text_truncates() {
        let mut text = ResultText::new();
        text.show(&"y".repeat(200));
        assert_eq!(text.as_str().len(), RESULT_TEXT_CAPACITY);
    }
}
