//! Joint identifiers (MoveNet / COCO 17-keypoint layout)

/// Number of joints a pose source reports per subject
pub const JOINT_COUNT: usize = 17;

/// A named body joint. Discriminants match the pose source's output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JointId {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl JointId {
    /// All joints in output order
    pub const ALL: [JointId; JOINT_COUNT] = [
        JointId::Nose,
        JointId::LeftEye,
        JointId::RightEye,
        JointId::LeftEar,
        JointId::RightEar,
        JointId::LeftShoulder,
        JointId::RightShoulder,
        JointId::LeftElbow,
        JointId::RightElbow,
        JointId::LeftWrist,
        JointId::RightWrist,
        JointId::LeftHip,
        JointId::RightHip,
        JointId::LeftKnee,
        JointId::RightKnee,
        JointId::LeftAnkle,
        JointId::RightAnkle,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Name as emitted by the pose source (`"left_wrist"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            JointId::Nose => "nose",
            JointId::LeftEye => "left_eye",
            JointId::RightEye => "right_eye",
            JointId::LeftEar => "left_ear",
            JointId::RightEar => "right_ear",
            JointId::LeftShoulder => "left_shoulder",
            JointId::RightShoulder => "right_shoulder",
            JointId::LeftElbow => "left_elbow",
            JointId::RightElbow => "right_elbow",
            JointId::LeftWrist => "left_wrist",
            JointId::RightWrist => "right_wrist",
            JointId::LeftHip => "left_hip",
            JointId::RightHip => "right_hip",
            JointId::LeftKnee => "left_knee",
            JointId::RightKnee => "right_knee",
            JointId::LeftAnkle => "left_ankle",
            JointId::RightAnkle => "right_ankle",
        }
    }

    /// Parse a pose-source joint name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|j| j.as_str() == name)
    }
}
