//! Punch rate over a trailing window

use super::event_log::EventLog;
use crate::config::DEFAULT_RATE_WINDOW_MS;
use crate::physics::Timestamp;

/// Counts events inside a trailing time window (60 s = punches per minute)
#[derive(Clone, Copy, Debug)]
pub struct RateAggregator {
    window_ms: u64,
}

impl RateAggregator {
    pub fn new(window_ms: u64) -> Self {
        Self { window_ms }
    }

    /// Events with `time > now - window`
    pub fn rate(&self, log: &EventLog, now: Timestamp) -> u64 {
        let cutoff = now - self.window_ms as f64;
        log.count_after(cutoff) as u64
    }
}

impl Default for RateAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_WINDOW_MS)
    }
}
