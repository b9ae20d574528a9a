use crate::foundation::core::{Point, Rect};

/// The 17 COCO body parts produced by the pose model, in model output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypointKind {
    /// Tip of the nose.
    Nose,
    /// Left eye.
    LeftEye,
    /// Right eye.
    RightEye,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left elbow.
    LeftElbow,
    /// Right elbow.
    RightElbow,
    /// Left wrist.
    LeftWrist,
    /// Right wrist.
    RightWrist,
    /// Left hip.
    LeftHip,
    /// Right hip.
    RightHip,
    /// Left knee.
    LeftKnee,
    /// Right knee.
    RightKnee,
    /// Left ankle.
    LeftAnkle,
    /// Right ankle.
    RightAnkle,
}

impl KeypointKind {
    /// All kinds in model output order.
    pub const ALL: [KeypointKind; 17] = [
        KeypointKind::Nose,
        KeypointKind::LeftEye,
        KeypointKind::RightEye,
        KeypointKind::LeftEar,
        KeypointKind::RightEar,
        KeypointKind::LeftShoulder,
        KeypointKind::RightShoulder,
        KeypointKind::LeftElbow,
        KeypointKind::RightElbow,
        KeypointKind::LeftWrist,
        KeypointKind::RightWrist,
        KeypointKind::LeftHip,
        KeypointKind::RightHip,
        KeypointKind::LeftKnee,
        KeypointKind::RightKnee,
        KeypointKind::LeftAnkle,
        KeypointKind::RightAnkle,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

/// Keypoint pairs connected when drawing the skeleton overlay.
pub const SKELETON_EDGES: [(KeypointKind, KeypointKind); 12] = [
    (KeypointKind::LeftShoulder, KeypointKind::RightShoulder),
    (KeypointKind::LeftShoulder, KeypointKind::LeftElbow),
    (KeypointKind::LeftElbow, KeypointKind::LeftWrist),
    (KeypointKind::RightShoulder, KeypointKind::RightElbow),
    (KeypointKind::RightElbow, KeypointKind::RightWrist),
    (KeypointKind::LeftShoulder, KeypointKind::LeftHip),
    (KeypointKind::RightShoulder, KeypointKind::RightHip),
    (KeypointKind::LeftHip, KeypointKind::RightHip),
    (KeypointKind::LeftHip, KeypointKind::LeftKnee),
    (KeypointKind::LeftKnee, KeypointKind::LeftAnkle),
    (KeypointKind::RightHip, KeypointKind::RightKnee),
    (KeypointKind::RightKnee, KeypointKind::RightAnkle),
];

/// One named anatomical landmark with a confidence score.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keypoint {
    /// Which body part this landmark is.
    pub kind: KeypointKind,
    /// Position in surface (canvas) coordinates.
    pub position: Point,
    /// Confidence in [0, 1].
    pub score: f64,
}

impl Keypoint {
    /// Whether this keypoint clears a part-confidence threshold.
    pub fn is_visible(&self, min_part_confidence: f64) -> bool {
        self.score >= min_part_confidence
    }
}

/// A full set of keypoints for one detected person.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Detected keypoints, in [`KeypointKind::ALL`] order.
    pub keypoints: Vec<Keypoint>,
    /// Overall confidence for the detection, in [0, 1].
    pub score: f64,
}

impl Pose {
    /// Keypoint for a specific body part, if the model produced one.
    pub fn keypoint(&self, kind: KeypointKind) -> Option<&Keypoint> {
        self.keypoints.iter().find(|k| k.kind == kind)
    }

    /// Keypoints at or above a part-confidence threshold.
    pub fn visible_keypoints(&self, min_part_confidence: f64) -> impl Iterator<Item = &Keypoint> {
        self.keypoints
            .iter()
            .filter(move |k| k.is_visible(min_part_confidence))
    }

    /// Axis-aligned bounding box over all keypoints, or `None` for an
    /// empty pose.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.keypoints.first()?.position;
        let mut r = Rect::new(first.x, first.y, first.x, first.y);
        for k in &self.keypoints[1..] {
            r.x0 = r.x0.min(k.position.x);
            r.y0 = r.y0.min(k.position.y);
            r.x1 = r.x1.max(k.position.x);
            r.y1 = r.y1.max(k.position.y);
        }
        Some(r)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pose/model.rs"]
mod tests;
