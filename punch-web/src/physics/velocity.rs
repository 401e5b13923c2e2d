//! Wrist motion tracking
//!
//! Velocity is frame-to-frame displacement in pixels, not time-normalized
//! speed, so uneven frame cadence does not distort the gate.

use super::confidence_gate::ConfidenceGate;
use super::state::{LimbState, Side};
use crate::pose::Pose;

/// One frame pair's wrist motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Displacement magnitude (pixels per frame)
    pub velocity: f64,
    /// Unit direction; y > 0 points down the frame
    pub direction: (f64, f64),
}

/// Derives per-frame wrist motion from consecutive confident sightings
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionTracker {
    gate: ConfidenceGate,
}

impl MotionTracker {
    pub fn new(gate: ConfidenceGate) -> Self {
        Self { gate }
    }

    /// Update `limb` with this frame's wrist for `side`
    ///
    /// Returns `None` when the wrist is missing or below confidence (the
    /// gesture in progress is broken) and on the first confident sighting,
    /// where no previous position exists yet.
    pub fn update(&self, side: Side, pose: &Pose, limb: &mut LimbState) -> Option<MotionSample> {
        let Some(pos) = self.gate.accept(pose.keypoint(side.wrist())) else {
            limb.lose_track();
            return None;
        };

        let prev = limb.previous_position.replace(pos)?;

        let dx = pos.0 - prev.0;
        let dy = pos.1 - prev.1;
        let distance = (dx * dx + dy * dy).sqrt();

        limb.velocity_magnitude = distance;
        if distance > 0.0 {
            limb.direction = (dx / distance, dy / distance);
        }

        Some(MotionSample {
            velocity: distance,
            direction: limb.direction,
        })
    }
}
