//! JS data shapes accepted from the pose source and returned to the page

use serde::{Deserialize, Serialize};

use crate::physics::PunchEvent;
use crate::pose::{Keypoint, JointId, Pose};

/// Keypoint as reported by the pose source: `{ name, x, y, score }`
#[derive(Clone, Debug, Deserialize)]
pub struct KeypointDto {
    #[serde(default)]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Either a bare keypoint array or a `{ keypoints, score }` pose object
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PoseDto {
    Keypoints(Vec<KeypointDto>),
    Pose {
        keypoints: Vec<KeypointDto>,
        #[serde(default)]
        score: Option<f64>,
    },
}

impl From<PoseDto> for Pose {
    fn from(dto: PoseDto) -> Self {
        let (raw, score) = match dto {
            PoseDto::Keypoints(kps) => (kps, None),
            PoseDto::Pose { keypoints, score } => (keypoints, score),
        };

        // Unnamed or unknown joints are dropped; a missing score counts as 0
        let keypoints = raw
            .into_iter()
            .filter_map(|kp| {
                let joint = JointId::from_name(kp.name.as_deref()?)?;
                Some(Keypoint::new(joint, kp.x, kp.y, kp.score.unwrap_or(0.0)))
            })
            .collect();

        let pose = Pose::new(keypoints);
        match score {
            Some(s) => pose.with_score(s),
            None => pose,
        }
    }
}

/// Punch event as handed to the page: `{ time, side, style }`
#[derive(Clone, Debug, Serialize)]
pub struct EventDto {
    pub time: f64,
    pub side: &'static str,
    pub style: &'static str,
}

impl From<&PunchEvent> for EventDto {
    fn from(event: &PunchEvent) -> Self {
        Self {
            time: event.time,
            side: event.side.as_str(),
            style: event.style.as_str(),
        }
    }
}
