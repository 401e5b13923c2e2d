//! Physics module - wrist kinematics and punch classification
//!
//! Re-exports only. All logic in submodules.

mod state;
mod confidence_gate;
mod velocity;
mod detection;

pub use state::{LimbState, PunchPhase, Side, Timestamp};
pub use confidence_gate::ConfidenceGate;
pub use velocity::{MotionSample, MotionTracker};
pub use detection::{PunchDetector, PunchEvent, PunchStyle};
