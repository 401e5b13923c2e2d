//! Tracking session - start/pause gating and punch feedback around a detector
//!
//! Pure Rust; the wasm class in `tracker.rs` is a thin wrapper over this.

use crate::config::DetectorConfig;
use crate::physics::{PunchDetector, PunchEvent, Timestamp};
use crate::pose::{select_subject, Pose};

/// How long the page highlights a detected punch
pub const PUNCH_FLASH_MS: f64 = 200.0;

/// A detector plus the page-level tracking toggle and punch flash
#[derive(Clone, Debug)]
pub struct TrackingSession {
    detector: PunchDetector,
    tracking: bool,
    flash_until: Option<Timestamp>,
}

impl TrackingSession {
    /// New sessions start paused
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            detector: PunchDetector::new(config),
            tracking: false,
            flash_until: None,
        }
    }

    /// Resume classification. Wrist positions from before the pause are
    /// discarded so the first frame back is a fresh sighting.
    pub fn start(&mut self) {
        self.detector.lose_track();
        self.tracking = true;
    }

    pub fn pause(&mut self) {
        self.tracking = false;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Feed one frame. Ignored while paused.
    pub fn push_pose(&mut self, pose: &Pose, now: Timestamp) -> Vec<PunchEvent> {
        if !self.tracking {
            return Vec::new();
        }

        let events = self.detector.process_pose(pose, now);
        if !events.is_empty() {
            self.flash_until = Some(now + PUNCH_FLASH_MS);
        }
        events
    }

    /// Feed every subject the pose source reported; only the most confident is classified
    pub fn push_poses(&mut self, poses: Vec<Pose>, now: Timestamp) -> Vec<PunchEvent> {
        match select_subject(poses) {
            Some(pose) => self.push_pose(&pose, now),
            None => Vec::new(),
        }
    }

    /// Whether the "punch detected" highlight should be showing at `now`
    pub fn flash_active(&self, now: Timestamp) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    pub fn total_count(&self) -> u64 {
        self.detector.total_count()
    }

    pub fn rate_per_minute(&self, now: Timestamp) -> u64 {
        self.detector.rate_per_minute(now)
    }

    pub fn detector(&self) -> &PunchDetector {
        &self.detector
    }

    /// Clear counts and feedback. The tracking toggle is left as is.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.flash_until = None;
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
