//! Keypoint and pose containers
//!
//! A `Pose` is one subject's keypoints for one video frame, in pixel space
//! (origin top-left, y grows downward).

use super::joints::{JointId, JOINT_COUNT};

/// A single named joint estimate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub joint: JointId,
    pub x: f64,
    pub y: f64,
    /// Detection confidence (0-1)
    pub score: f64,
}

impl Keypoint {
    pub fn new(joint: JointId, x: f64, y: f64, score: f64) -> Self {
        Self { joint, x, y, score }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// One frame's keypoints for a single detected subject
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    keypoints: Vec<Keypoint>,
    /// Overall subject confidence, when the pose source reports one
    pub score: Option<f64>,
}

impl Pose {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self {
            keypoints,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Build from `(name, x, y, score)` tuples, dropping unknown joint names
    pub fn from_named<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64, f64, f64)>,
    {
        let keypoints = entries
            .into_iter()
            .filter_map(|(name, x, y, score)| {
                JointId::from_name(name).map(|joint| Keypoint::new(joint, x, y, score))
            })
            .collect();
        Self::new(keypoints)
    }

    /// Build from a dense `17 × (x, y, score)` buffer in joint index order
    pub fn from_flat(data: &[f64]) -> Option<Self> {
        if data.len() != JOINT_COUNT * 3 {
            return None;
        }

        let keypoints = JointId::ALL
            .iter()
            .zip(data.chunks_exact(3))
            .map(|(joint, v)| Keypoint::new(*joint, v[0], v[1], v[2]))
            .collect();
        Some(Self::new(keypoints))
    }

    /// Look up a joint. First match wins if the source repeats a name.
    pub fn keypoint(&self, joint: JointId) -> Option<&Keypoint> {
        self.keypoints.iter().find(|k| k.joint == joint)
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }
}

/// Pick the highest-confidence subject. Unscored poses rank as 0, ties keep the first.
pub fn select_subject(poses: Vec<Pose>) -> Option<Pose> {
    let mut best: Option<Pose> = None;
    for pose in poses {
        let better = match &best {
            None => true,
            Some(b) => pose.score.unwrap_or(0.0) > b.score.unwrap_or(0.0),
        };
        if better {
            best = Some(pose);
        }
    }
    best
}
