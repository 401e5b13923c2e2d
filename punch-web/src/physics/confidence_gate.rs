//! Confidence Gate - rejects low-quality wrist detections
//!
//! A wrist below threshold is treated exactly like a missing one: it breaks
//! the gesture in progress rather than feeding a noisy position downstream.

use crate::pose::Keypoint;

/// Accepts a wrist position only when the pose source is sure enough of it
#[derive(Clone, Copy, Debug)]
pub struct ConfidenceGate {
    /// Scores below this count as "wrist not seen"
    threshold: f64,
}

impl ConfidenceGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Return the position if the keypoint is present, finite and confident enough
    pub fn accept(&self, keypoint: Option<&Keypoint>) -> Option<(f64, f64)> {
        let kp = keypoint?;
        // NaN scores fail this comparison
        if !(kp.score >= self.threshold) {
            return None;
        }
        if !kp.x.is_finite() || !kp.y.is_finite() {
            return None;
        }
        Some(kp.position())
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CONFIDENCE_THRESHOLD)
    }
}
