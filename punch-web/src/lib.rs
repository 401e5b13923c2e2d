//! Punch Web - punch counting from per-frame pose keypoints
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations and re-exports
//! - Console logging and the wasm_bindgen start hook

pub mod bridge;
pub mod config;
pub mod physics;
pub mod pose;
pub mod stats;

use wasm_bindgen::prelude::*;

pub use bridge::{now, PunchTracker, TrackingSession};
pub use config::{ConfigError, DetectorConfig};
pub use physics::{LimbState, PunchDetector, PunchEvent, PunchPhase, PunchStyle, Side, Timestamp};
pub use pose::{JointId, Keypoint, Pose};
pub use stats::{EventLog, RateAggregator};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}
pub(crate) use console_log;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
