//! Frame timing and an on-screen event log for the debug overlay.
//!
//! Neither type is used by the wheel itself. The host feeds them: frame durations into
//! [`FrameMetrics`] once per frame, and short event lines (spin started, settled on X)
//! into [`DebugLog`].
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = FrameMetrics::new();
//! let mut log = DebugLog::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... tick and render ...
//! metrics.record_frame(frame_start.elapsed());
//!
//! log.push("Settled: Tea");
//! ```

use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Frame Metrics
// =============================================================================

/// Frame time statistics.
pub struct FrameMetrics {
    /// Duration of the last frame
    pub frame_time_us: u32,
    /// Shortest frame observed
    pub frame_time_min_us: u32,
    /// Longest frame observed
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,
    /// Frames recorded since startup
    pub total_frames: u64,
    start_time: Instant,
}

impl FrameMetrics {
    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Create empty metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Record the total duration of one frame (tick + render + sleep).
    pub fn record_frame(
        &mut self,
        total_time: Duration,
    ) {
        let total_us = u32::try_from(total_time.as_micros()).unwrap_or(u32::MAX);
        self.frame_time_us = total_us;
        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Smoothed frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Frames per second from the smoothed frame time. 0 before the first frame.
    pub fn fps(&self) -> u32 {
        if self.frame_time_avg_us <= 0.0 {
            return 0;
        }
        (1_000_000.0 / self.frame_time_avg_us).round() as u32
    }

    /// "NN FPS" for the overlay.
    pub fn fps_string(&self) -> String<12> {
        let mut s = String::new();
        push_u32(&mut s, self.fps());
        s.push_str(" FPS").ok();
        s
    }

    #[inline]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> {
        let secs = self.uptime().as_secs();
        let hours = (secs / 3600) as u32;
        let mins = ((secs % 3600) / 60) as u32;
        let secs = (secs % 60) as u32;

        let mut s = String::new();
        for (i, part) in [hours, mins, secs].into_iter().enumerate() {
            if i > 0 {
                s.push(':').ok();
            }
            if part < 10 {
                s.push('0').ok();
            }
            push_u32(&mut s, part);
        }
        s
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of recent event lines.
///
/// Stores the last `LOG_BUFFER_SIZE` messages. Old messages are dropped when the buffer
/// is full and long messages are truncated.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        // Truncate by characters; entry labels are not always ASCII
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
