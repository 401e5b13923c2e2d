//! Stats module - punch history and rate queries
//!
//! Re-exports only. All logic in submodules.

mod event_log;
mod rate;

pub use event_log::EventLog;
pub use rate::RateAggregator;
