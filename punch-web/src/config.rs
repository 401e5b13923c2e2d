//! Detector tuning parameters
//!
//! Defaults are tuned for a 640×480 webcam feed at 30-60 Hz with pixel-space
//! keypoints. Deserializes from a JS object with camelCase or snake_case keys;
//! missing keys take their default.

use serde::Deserialize;
use std::fmt;
use wasm_bindgen::JsValue;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.25;
pub const DEFAULT_MIN_VELOCITY_THRESHOLD: f64 = 3.5;
pub const DEFAULT_FORWARD_MOVEMENT_THRESHOLD: f64 = 0.4;
pub const DEFAULT_PUNCH_COOLDOWN_MS: u64 = 500;
pub const DEFAULT_RESET_COOLDOWN_MS: u64 = 1000;
pub const DEFAULT_MIN_CONSECUTIVE_FRAMES: u32 = 1;
pub const DEFAULT_RATE_WINDOW_MS: u64 = 60_000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Wrist keypoints scoring below this are treated as undetected
    #[serde(alias = "confidence_threshold")]
    pub confidence_threshold: f64,
    /// Minimum wrist displacement per frame (pixels) to count as fast
    #[serde(alias = "min_velocity_threshold")]
    pub min_velocity_threshold: f64,
    /// Minimum y-component of the unit direction to count as forward
    #[serde(alias = "forward_movement_threshold")]
    pub forward_movement_threshold: f64,
    #[serde(alias = "punch_cooldown_ms")]
    pub punch_cooldown_ms: u64,
    #[serde(alias = "reset_cooldown_ms")]
    pub reset_cooldown_ms: u64,
    /// Qualifying frames in a row required before a punch fires
    #[serde(alias = "min_consecutive_frames")]
    pub min_consecutive_frames: u32,
    #[serde(alias = "rate_window_ms")]
    pub rate_window_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            min_velocity_threshold: DEFAULT_MIN_VELOCITY_THRESHOLD,
            forward_movement_threshold: DEFAULT_FORWARD_MOVEMENT_THRESHOLD,
            punch_cooldown_ms: DEFAULT_PUNCH_COOLDOWN_MS,
            reset_cooldown_ms: DEFAULT_RESET_COOLDOWN_MS,
            min_consecutive_frames: DEFAULT_MIN_CONSECUTIVE_FRAMES,
            rate_window_ms: DEFAULT_RATE_WINDOW_MS,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::ConfidenceThreshold(self.confidence_threshold));
        }
        if !self.min_velocity_threshold.is_finite() || self.min_velocity_threshold < 0.0 {
            return Err(ConfigError::VelocityThreshold(self.min_velocity_threshold));
        }
        if !(-1.0..=1.0).contains(&self.forward_movement_threshold) {
            return Err(ConfigError::ForwardThreshold(self.forward_movement_threshold));
        }
        if self.min_consecutive_frames == 0 {
            return Err(ConfigError::ZeroFrameGate);
        }
        if self.rate_window_ms == 0 {
            return Err(ConfigError::ZeroRateWindow);
        }
        Ok(())
    }
}

/// Rejected configuration values
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ConfidenceThreshold(f64),
    VelocityThreshold(f64),
    ForwardThreshold(f64),
    ZeroFrameGate,
    ZeroRateWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfidenceThreshold(v) => {
                write!(f, "confidence threshold {} outside [0, 1]", v)
            }
            ConfigError::VelocityThreshold(v) => {
                write!(f, "velocity threshold {} must be finite and non-negative", v)
            }
            ConfigError::ForwardThreshold(v) => {
                write!(f, "forward movement threshold {} outside [-1, 1]", v)
            }
            ConfigError::ZeroFrameGate => write!(f, "min consecutive frames must be at least 1"),
            ConfigError::ZeroRateWindow => write!(f, "rate window must be longer than 0 ms"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
