//! `PunchTracker` - the wasm-facing punch counter
//!
//! Called from the page's animation loop once per estimated pose.

use wasm_bindgen::prelude::*;

use super::dto::{EventDto, PoseDto};
use super::session::TrackingSession;
use crate::config::DetectorConfig;
use crate::physics::{PunchEvent, Side};
use crate::pose::Pose;

#[wasm_bindgen]
pub struct PunchTracker {
    session: TrackingSession,
}

#[wasm_bindgen]
impl PunchTracker {
    /// `config` is an optional object of detector options; omitted keys keep defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PunchTracker, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            DetectorConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<DetectorConfig>(config)?
        };

        if let Err(err) = config.validate() {
            web_sys::console::warn_1(&format!("Rejected detector config: {}", err).into());
            return Err(err.into());
        }

        crate::console_log!(
            "🥊 Punch tracker ready (velocity > {}, forward > {}, cooldown {} ms)",
            config.min_velocity_threshold,
            config.forward_movement_threshold,
            config.punch_cooldown_ms
        );

        Ok(Self {
            session: TrackingSession::new(config),
        })
    }

    pub fn start(&mut self) {
        self.session.start();
        crate::console_log!("▶️ Tracking started");
    }

    pub fn pause(&mut self) {
        self.session.pause();
        crate::console_log!("⏸️ Tracking paused");
    }

    #[wasm_bindgen(js_name = "isTracking")]
    pub fn is_tracking(&self) -> bool {
        self.session.is_tracking()
    }

    /// Classify one pose (`{ keypoints, score }` or a keypoint array).
    /// Returns the punches fired by this frame as `[{ time, side, style }]`.
    #[wasm_bindgen(js_name = "processPose")]
    pub fn process_pose(&mut self, pose: JsValue, now: f64) -> Result<JsValue, JsValue> {
        let dto: PoseDto = serde_wasm_bindgen::from_value(pose)?;
        let events = self.session.push_pose(&Pose::from(dto), now);
        self.report(&events)
    }

    /// Classify the output of a multi-pose estimator; the most confident subject wins
    #[wasm_bindgen(js_name = "processPoses")]
    pub fn process_poses(&mut self, poses: JsValue, now: f64) -> Result<JsValue, JsValue> {
        let dtos: Vec<PoseDto> = serde_wasm_bindgen::from_value(poses)?;
        let poses = dtos.into_iter().map(Pose::from).collect();
        let events = self.session.push_poses(poses, now);
        self.report(&events)
    }

    /// Classify a dense Float64Array of 17 × (x, y, score)
    #[wasm_bindgen(js_name = "processFlat")]
    pub fn process_flat(&mut self, data: &[f64], now: f64) -> Result<JsValue, JsValue> {
        let Some(pose) = Pose::from_flat(data) else {
            web_sys::console::warn_1(
                &format!("Invalid keypoint data length: {} (expected 51)", data.len()).into(),
            );
            // A malformed frame is a frame with no wrists
            let events = self.session.push_pose(&Pose::default(), now);
            return self.report(&events);
        };
        let events = self.session.push_pose(&pose, now);
        self.report(&events)
    }

    #[wasm_bindgen(js_name = "totalCount")]
    pub fn total_count(&self) -> u32 {
        u32::try_from(self.session.total_count()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(js_name = "ratePerMinute")]
    pub fn rate_per_minute(&self, now: f64) -> u32 {
        u32::try_from(self.session.rate_per_minute(now)).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(js_name = "flashActive")]
    pub fn flash_active(&self, now: f64) -> bool {
        self.session.flash_active(now)
    }

    /// Phase name ("IDLE", "ARMED", "FIRED", "RESETTING") for `"left"` or `"right"`
    pub fn phase(&self, side: &str) -> Option<String> {
        let side = Side::from_name(side)?;
        Some(self.session.detector().phase(side).name().to_string())
    }

    pub fn reset(&mut self) {
        self.session.reset();
        crate::console_log!("🔄 Punch counter reset");
    }
}

impl PunchTracker {
    fn report(&self, events: &[PunchEvent]) -> Result<JsValue, JsValue> {
        for event in events {
            crate::console_log!(
                "👊 {} punch at {:.0} ms ({} on this side, total {})",
                event.side.as_str(),
                event.time,
                self.session.detector().side_count(event.side),
                self.session.total_count()
            );
        }
        let dtos: Vec<EventDto> = events.iter().map(EventDto::from).collect();
        Ok(serde_wasm_bindgen::to_value(&dtos)?)
    }
}

/// Wall-clock milliseconds, for callers without their own frame clock
#[wasm_bindgen]
pub fn now() -> f64 {
    js_sys::Date::now()
}
