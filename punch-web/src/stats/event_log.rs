//! Append-only punch history

use crate::physics::{PunchEvent, Side, Timestamp};

/// Punch events in arrival order. Entries are never modified once appended.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<PunchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PunchEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[PunchEvent] {
        &self.events
    }

    /// Events strictly after `cutoff`
    pub fn count_after(&self, cutoff: Timestamp) -> usize {
        self.events.iter().filter(|e| e.time > cutoff).count()
    }

    pub fn count_side(&self, side: Side) -> usize {
        self.events.iter().filter(|e| e.side == side).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
