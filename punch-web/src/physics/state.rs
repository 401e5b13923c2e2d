//! Limb state - per-side kinematic and debounce state

use crate::pose::JointId;

/// Milliseconds from a monotonic per-frame clock (`performance.now()` or `Date.now()`)
pub type Timestamp = f64;

/// Which arm a state or event belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }

    pub fn wrist(&self) -> JointId {
        match self {
            Side::Left => JointId::LeftWrist,
            Side::Right => JointId::RightWrist,
        }
    }
}

/// Classification phase, derived from the stored flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunchPhase {
    /// No motion accumulating, arm considered retracted
    Idle,
    /// Qualifying frames accumulating below the frame gate
    Armed,
    /// Event emitted, cooldown running
    Fired,
    /// Cooldown over but arm still considered extended
    Resetting,
}

impl PunchPhase {
    pub fn name(&self) -> &'static str {
        match self {
            PunchPhase::Idle => "IDLE",
            PunchPhase::Armed => "ARMED",
            PunchPhase::Fired => "FIRED",
            PunchPhase::Resetting => "RESETTING",
        }
    }
}

/// Kinematic and debounce state of one arm
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LimbState {
    /// Last confident wrist position
    pub previous_position: Option<(f64, f64)>,

    /// Wrist displacement over the last frame pair (pixels per frame)
    pub velocity_magnitude: f64,

    /// Unit direction of the last non-zero displacement
    pub direction: (f64, f64),

    /// Frames in a row passing the velocity + direction gate
    pub consecutive_qualifying_frames: u32,

    /// Arm considered extended
    pub in_punch: bool,

    pub cooldown_active: bool,
    pub cooldown_deadline: Timestamp,

    /// Time `in_punch` last flipped
    pub last_state_change: Timestamp,
}

impl LimbState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PunchPhase {
        if self.cooldown_active {
            PunchPhase::Fired
        } else if self.in_punch {
            PunchPhase::Resetting
        } else if self.consecutive_qualifying_frames > 0 {
            PunchPhase::Armed
        } else {
            PunchPhase::Idle
        }
    }

    /// Clear the cooldown once its deadline has passed. Never clears early.
    pub fn expire_cooldown(&mut self, now: Timestamp) {
        if self.cooldown_active && now >= self.cooldown_deadline {
            self.cooldown_active = false;
        }
    }

    /// Forget the tracked wrist (undetected or low-confidence frame)
    pub fn lose_track(&mut self) {
        self.previous_position = None;
        self.consecutive_qualifying_frames = 0;
    }
}
