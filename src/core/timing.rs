//! Frame-rate timebase: tick throttling and ms/frame conversion.

use std::thread;
use std::time::{Duration, Instant};

/// Convert frames to milliseconds at the given frame rate.
pub fn frames_to_ms(frames: u64, fps: u32) -> f64 {
    1000.0 * frames as f64 / fps as f64
}

/// Convert milliseconds to frames at the given frame rate.
pub fn ms_to_frames(ms: u64, fps: u32) -> f64 {
    fps as f64 * ms as f64 / 1000.0
}

/// Fixed-rate tick throttle.
///
/// `tick()` blocks until one frame interval has passed since the previous
/// tick. If the caller is already late, it returns immediately and the next
/// boundary is measured from now, so a slow frame never causes a burst of
/// catch-up ticks.
pub struct FrameClock {
    frame: Duration,
    started: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_nanos(1_000_000_000 / fps.max(1) as u64),
            started: now,
            last_tick: now,
        }
    }

    /// Sleep until the next tick boundary. Returns milliseconds since the
    /// previous tick.
    pub fn tick(&mut self) -> u64 {
        let since_last = self.last_tick.elapsed();
        if since_last < self.frame {
            thread::sleep(self.frame - since_last);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        dt.as_millis() as u64
    }

    /// Milliseconds since the clock was created.
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}
