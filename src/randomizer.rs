//! In-place shuffling of entry lists.
//!
//! Hosts shuffle the entries before handing them to
//! [`WheelController::set_data`](crate::controller::WheelController::set_data) so the
//! wheel layout differs between sessions. The physics never calls this.

use rand::Rng;

/// Shuffle `items` in place with the thread-local RNG.
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::thread_rng());
}

/// Shuffle `items` in place with a caller-provided RNG (Fisher–Yates).
///
/// Walks from the last index down to 1 and swaps each position with a uniformly
/// chosen index in `[0, i]`, which yields every permutation with equal probability.
pub fn shuffle_with<T, R>(
    items: &mut [T],
    rng: &mut R,
) where
    R: Rng,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
