//! Motion-based punch detection
//!
//! Per side, a frame qualifies when the wrist moves faster than the velocity
//! threshold and its direction points forward (y-component above threshold).
//! A punch fires once the qualifying run reaches the frame gate, then the
//! side's cooldown suppresses further events until its deadline passes.
//! The arm drops back to idle only after it slows below half the firing
//! velocity and the reset cooldown has elapsed since the last transition.

use super::state::{LimbState, PunchPhase, Side, Timestamp};
use super::velocity::{MotionSample, MotionTracker};
use super::confidence_gate::ConfidenceGate;
use crate::config::{ConfigError, DetectorConfig};
use crate::pose::Pose;
use crate::stats::{EventLog, RateAggregator};

/// Punch style tag. Only forward thrusts are detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunchStyle {
    Forward,
}

impl PunchStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchStyle::Forward => "forward",
        }
    }
}

/// A counted punch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PunchEvent {
    pub time: Timestamp,
    pub side: Side,
    pub style: PunchStyle,
}

impl PunchEvent {
    pub fn forward(time: Timestamp, side: Side) -> Self {
        Self {
            time,
            side,
            style: PunchStyle::Forward,
        }
    }
}

/// Punch detector over a stream of poses
///
/// Not synchronized: feed one pose at a time.
#[derive(Clone, Debug)]
pub struct PunchDetector {
    config: DetectorConfig,
    tracker: MotionTracker,
    rate: RateAggregator,
    /// Indexed by `Side::index`
    limbs: [LimbState; 2],
    log: EventLog,
}

impl PunchDetector {
    /// Build from a config assumed valid (see `try_new`)
    pub fn new(config: DetectorConfig) -> Self {
        let tracker = MotionTracker::new(ConfidenceGate::new(config.confidence_threshold));
        let rate = RateAggregator::new(config.rate_window_ms);
        Self {
            config,
            tracker,
            rate,
            limbs: [LimbState::new(), LimbState::new()],
            log: EventLog::new(),
        }
    }

    pub fn try_new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Classify one frame. Returns the events fired by this frame, possibly
    /// one per side.
    pub fn process_pose(&mut self, pose: &Pose, now: Timestamp) -> Vec<PunchEvent> {
        let mut fired = Vec::new();

        for side in Side::ALL {
            let limb = &mut self.limbs[side.index()];
            limb.expire_cooldown(now);

            let Some(sample) = self.tracker.update(side, pose, limb) else {
                continue;
            };

            if let Some(event) = classify(&self.config, limb, side, sample, now) {
                self.log.push(event);
                fired.push(event);
            }
        }

        fired
    }

    pub fn total_count(&self) -> u64 {
        self.log.len() as u64
    }

    /// Events inside the trailing rate window ending at `now`
    pub fn rate_per_minute(&self, now: Timestamp) -> u64 {
        self.rate.rate(&self.log, now)
    }

    /// Punches counted so far on one side
    pub fn side_count(&self, side: Side) -> u64 {
        self.log.count_side(side) as u64
    }

    pub fn events(&self) -> &[PunchEvent] {
        self.log.events()
    }

    pub fn limb(&self, side: Side) -> &LimbState {
        &self.limbs[side.index()]
    }

    pub fn phase(&self, side: Side) -> PunchPhase {
        self.limb(side).phase()
    }

    /// Forget both wrists' last positions, as after a gap in the feed.
    /// Cooldowns, `in_punch` and the history are kept.
    pub fn lose_track(&mut self) {
        for limb in &mut self.limbs {
            limb.lose_track();
        }
    }

    /// Clear the history and both limbs
    pub fn reset(&mut self) {
        self.limbs = [LimbState::new(), LimbState::new()];
        self.log.clear();
    }
}

impl Default for PunchDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

/// Advance one side's debounce state with a motion sample
fn classify(
    config: &DetectorConfig,
    limb: &mut LimbState,
    side: Side,
    sample: MotionSample,
    now: Timestamp,
) -> Option<PunchEvent> {
    let is_forward = sample.direction.1 > config.forward_movement_threshold;
    let is_fast = sample.velocity > config.min_velocity_threshold;

    if is_fast && is_forward {
        limb.consecutive_qualifying_frames = limb.consecutive_qualifying_frames.saturating_add(1);

        if !limb.cooldown_active
            && limb.consecutive_qualifying_frames >= config.min_consecutive_frames
        {
            limb.in_punch = true;
            limb.cooldown_active = true;
            limb.cooldown_deadline = now + config.punch_cooldown_ms as f64;
            limb.last_state_change = now;
            return Some(PunchEvent::forward(now, side));
        }
        return None;
    }

    limb.consecutive_qualifying_frames = 0;

    let settled = sample.velocity < config.min_velocity_threshold / 2.0;
    let held = now - limb.last_state_change > config.reset_cooldown_ms as f64;
    if limb.in_punch && settled && held {
        limb.in_punch = false;
        limb.last_state_change = now;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{JointId, Keypoint};

    fn pose(left: Option<(f64, f64)>, right: Option<(f64, f64)>) -> Pose {
        let mut kps = Vec::new();
        if let Some((x, y)) = left {
            kps.push(Keypoint::new(JointId::LeftWrist, x, y, 0.9));
        }
        if let Some((x, y)) = right {
            kps.push(Keypoint::new(JointId::RightWrist, x, y, 0.9));
        }
        Pose::new(kps)
    }

    fn right(x: f64, y: f64) -> Pose {
        pose(None, Some((x, y)))
    }

    #[test]
    fn test_scenario_single_right_punch() {
        let mut detector = PunchDetector::default();

        assert!(detector.process_pose(&right(100.0, 300.0), 0.0).is_empty());
        // Upward move: fast but not forward
        assert!(detector.process_pose(&right(100.0, 260.0), 33.0).is_empty());

        let events = detector.process_pose(&right(100.0, 320.0), 66.0);
        assert_eq!(events, vec![PunchEvent::forward(66.0, Side::Right)]);
        assert_eq!(events[0].style.as_str(), "forward");

        // Still thrusting inside the cooldown
        assert!(detector.process_pose(&right(100.0, 380.0), 100.0).is_empty());
        assert_eq!(detector.total_count(), 1);
        assert_eq!(detector.phase(Side::Right), PunchPhase::Fired);
    }

    #[test]
    fn test_cold_start_never_fires() {
        let mut detector = PunchDetector::default();
        let events = detector.process_pose(&pose(Some((0.0, 0.0)), Some((0.0, 0.0))), 0.0);
        assert!(events.is_empty());
        assert_eq!(detector.total_count(), 0);
    }

    #[test]
    fn test_fires_again_after_cooldown_expires() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&right(0.0, 0.0), 0.0);
        assert_eq!(detector.process_pose(&right(0.0, 50.0), 10.0).len(), 1);
        assert!(detector.process_pose(&right(0.0, 100.0), 200.0).is_empty());
        // Deadline is 10 + 500
        let events = detector.process_pose(&right(0.0, 150.0), 510.0);
        assert_eq!(events, vec![PunchEvent::forward(510.0, Side::Right)]);
    }

    #[test]
    fn test_slow_or_lateral_motion_is_ignored() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&right(0.0, 0.0), 0.0);
        // Forward but slow (3 px)
        assert!(detector.process_pose(&right(0.0, 3.0), 10.0).is_empty());
        // Fast but sideways
        assert!(detector.process_pose(&right(60.0, 3.0), 20.0).is_empty());
        // Exactly at the velocity threshold is not fast
        assert!(detector.process_pose(&right(60.0, 6.5), 30.0).is_empty());
        assert_eq!(detector.limb(Side::Right).consecutive_qualifying_frames, 0);
    }

    #[test]
    fn test_both_sides_fire_in_same_frame() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&pose(Some((0.0, 0.0)), Some((200.0, 0.0))), 0.0);
        let events = detector.process_pose(&pose(Some((0.0, 40.0)), Some((200.0, 40.0))), 10.0);
        assert_eq!(
            events,
            vec![
                PunchEvent::forward(10.0, Side::Left),
                PunchEvent::forward(10.0, Side::Right),
            ]
        );
    }

    #[test]
    fn test_cooldown_is_per_side() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&pose(Some((0.0, 0.0)), Some((200.0, 0.0))), 0.0);
        assert_eq!(detector.process_pose(&pose(Some((0.0, 40.0)), Some((200.0, 0.0))), 10.0).len(), 1);

        let events = detector.process_pose(&pose(Some((0.0, 80.0)), Some((200.0, 40.0))), 20.0);
        assert_eq!(events, vec![PunchEvent::forward(20.0, Side::Right)]);
    }

    #[test]
    fn test_frame_gate_above_one_needs_a_run() {
        let config = DetectorConfig {
            min_consecutive_frames: 3,
            ..Default::default()
        };
        let mut detector = PunchDetector::new(config);
        detector.process_pose(&right(0.0, 0.0), 0.0);
        assert!(detector.process_pose(&right(0.0, 20.0), 10.0).is_empty());
        assert_eq!(detector.phase(Side::Right), PunchPhase::Armed);
        assert!(detector.process_pose(&right(0.0, 40.0), 20.0).is_empty());

        // A failing frame breaks the run
        assert!(detector.process_pose(&right(0.0, 41.0), 30.0).is_empty());
        assert_eq!(detector.phase(Side::Right), PunchPhase::Idle);

        assert!(detector.process_pose(&right(0.0, 60.0), 40.0).is_empty());
        assert!(detector.process_pose(&right(0.0, 80.0), 50.0).is_empty());
        let events = detector.process_pose(&right(0.0, 100.0), 60.0);
        assert_eq!(events, vec![PunchEvent::forward(60.0, Side::Right)]);
    }

    #[test]
    fn test_frame_gate_one_fires_on_first_qualifying_frame() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&right(0.0, 0.0), 0.0);
        assert_eq!(detector.process_pose(&right(0.0, 20.0), 10.0).len(), 1);
    }

    #[test]
    fn test_low_confidence_frame_breaks_run() {
        let config = DetectorConfig {
            min_consecutive_frames: 2,
            ..Default::default()
        };
        let mut detector = PunchDetector::new(config);
        detector.process_pose(&right(0.0, 0.0), 0.0);
        detector.process_pose(&right(0.0, 20.0), 10.0);

        let noisy = Pose::new(vec![Keypoint::new(JointId::RightWrist, 0.0, 40.0, 0.1)]);
        assert!(detector.process_pose(&noisy, 20.0).is_empty());
        assert_eq!(detector.limb(Side::Right).previous_position, None);

        // Re-acquired: first sighting, then one qualifying frame is not enough
        assert!(detector.process_pose(&right(0.0, 60.0), 30.0).is_empty());
        assert!(detector.process_pose(&right(0.0, 80.0), 40.0).is_empty());
        assert_eq!(detector.process_pose(&right(0.0, 100.0), 50.0).len(), 1);
    }

    #[test]
    fn test_return_to_idle_needs_slow_wrist_and_reset_cooldown() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&right(0.0, 0.0), 0.0);
        detector.process_pose(&right(0.0, 50.0), 10.0);
        assert!(detector.limb(Side::Right).in_punch);

        // Slow, but only 590 ms since the punch
        detector.process_pose(&right(0.0, 51.0), 600.0);
        assert!(detector.limb(Side::Right).in_punch);
        assert_eq!(detector.phase(Side::Right), PunchPhase::Resetting);

        // Between half and full threshold: not slow enough
        detector.process_pose(&right(0.0, 49.0), 1100.0);
        assert!(detector.limb(Side::Right).in_punch);

        detector.process_pose(&right(0.0, 49.5), 1200.0);
        let limb = detector.limb(Side::Right);
        assert!(!limb.in_punch);
        assert_eq!(limb.last_state_change, 1200.0);
        assert_eq!(detector.phase(Side::Right), PunchPhase::Idle);
    }

    #[test]
    fn test_rate_and_reset() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&right(0.0, 0.0), 0.0);
        detector.process_pose(&right(0.0, 50.0), 10.0);
        assert_eq!(detector.rate_per_minute(10.0), 1);
        assert_eq!(detector.rate_per_minute(60_011.0), 0);

        detector.reset();
        assert_eq!(detector.total_count(), 0);
        assert!(detector.events().is_empty());
        assert_eq!(detector.limb(Side::Right), &LimbState::new());
        // After reset the next frame is a cold start again
        assert!(detector.process_pose(&right(0.0, 100.0), 20.0).is_empty());
    }

    #[test]
    fn test_lose_track_forgets_positions_but_keeps_cooldown() {
        let mut detector = PunchDetector::default();
        detector.process_pose(&pose(Some((0.0, 0.0)), Some((200.0, 0.0))), 0.0);
        assert_eq!(detector.process_pose(&right(200.0, 50.0), 10.0).len(), 1);

        detector.lose_track();
        for side in Side::ALL {
            assert_eq!(detector.limb(side).previous_position, None);
        }
        assert!(detector.limb(Side::Right).cooldown_active);
        assert!(detector.limb(Side::Right).in_punch);
        assert_eq!(detector.total_count(), 1);
        assert_eq!(detector.side_count(Side::Right), 1);
        assert_eq!(detector.side_count(Side::Left), 0);

        // Next sighting is a cold start even after a big jump
        assert!(detector.process_pose(&right(200.0, 400.0), 1_000.0).is_empty());
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let config = DetectorConfig {
            confidence_threshold: -0.1,
            ..Default::default()
        };
        assert!(PunchDetector::try_new(config).is_err());
        assert!(PunchDetector::try_new(DetectorConfig::default()).is_ok());
    }
}
