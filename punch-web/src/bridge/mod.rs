//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod dto;
mod session;
mod tracker;

pub use dto::{EventDto, KeypointDto, PoseDto};
pub use session::{TrackingSession, PUNCH_FLASH_MS};
pub use tracker::{now, PunchTracker};
