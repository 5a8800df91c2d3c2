use std::time::{Duration, Instant};

/// Deterministic clock for debounce tests
///
/// Holds an instant that only moves when a test advances it, so burst
/// timelines are exact instead of sleep-based.
pub struct StepClock {
    now: Instant,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    /// The current instant.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Advance the clock and return the new instant.
    pub fn advance(&mut self, step: Duration) -> Instant {
        self.now += step;
        self.now
    }

    /// Advance the clock by whole milliseconds.
    pub fn advance_ms(&mut self, ms: u64) -> Instant {
        self.advance(Duration::from_millis(ms))
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}
