//! Pose module - joint identifiers and per-frame keypoint sets
//!
//! Re-exports only. All logic in submodules.

mod joints;
mod keypoint;

pub use joints::{JointId, JOINT_COUNT};
pub use keypoint::{select_subject, Keypoint, Pose};
