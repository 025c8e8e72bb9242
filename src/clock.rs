//! Time sources for the game loop.
//!
//! `FrameClock` measures the delta between frames; `SessionClock` is the
//! independent once-a-second counter shown on the scoreboard.

use std::time::{Duration, Instant};

/// Delta-time between consecutive frames, in seconds.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn start(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous call (or since `start`).  Not clamped: a
    /// long stall produces a long delta.
    pub fn delta(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

/// Whole seconds elapsed since the session began.  Once stopped it never
/// advances again.
#[derive(Debug, Clone)]
pub struct SessionClock {
    started: Instant,
    /// Seconds already on the clock at `started`.
    base: u64,
    seconds: u64,
    running: bool,
}

impl SessionClock {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            base: 0,
            seconds: 0,
            running: true,
        }
    }

    /// A clock that already shows `seconds` at `now` and counts on from there.
    pub fn resume(now: Instant, seconds: u64) -> Self {
        Self {
            started: now,
            base: seconds,
            seconds,
            running: true,
        }
    }

    /// Returns the new count when at least one more whole second has passed.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        if !self.running {
            return None;
        }
        let whole = self.base + now.saturating_duration_since(self.started).as_secs();
        if whole > self.seconds {
            self.seconds = whole;
            Some(whole)
        } else {
            None
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}

/// `MM : SS`, as shown on the scoreboard and the end-of-game dialog.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02} : {:02}", seconds / 60, seconds % 60)
}

/// Time left until the next frame should start, given a target frame length.
pub fn frame_remaining(frame: Duration, spent: Duration) -> Option<Duration> {
    frame.checked_sub(spent).filter(|d| !d.is_zero())
}
