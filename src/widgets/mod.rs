//! Host-side overlays drawn on top of the wheel.
//!
//! - [`banner`]: the label currently under the pointer
//! - [`popups`]: the settled selection, shown for a few seconds
//! - [`overlay`]: FPS, uptime and recent events for debugging
//!
//! All widgets draw into any `DrawTarget<Color = Rgb565>` and center themselves on the
//! target's bounding box, so they work for any viewport the wheel was laid out for.
//! Draw errors are ignored per primitive, like the wheel itself.

mod banner;
mod overlay;
mod popups;

pub use banner::{BANNER_HEIGHT, draw_result_banner};
pub use overlay::draw_debug_overlay;
pub use popups::{SettledPopup, draw_settled_popup};
