use std::sync::mpsc;

use crate::foundation::error::{KinotypeError, KinotypeResult};
use crate::pose::estimator::{EstimateOptions, ModelVariant, MultiPoseOptions, OutputStride};

/// Detection mode: one person or many.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Faster and simpler; accurate only with one person in frame.
    SinglePose,
    /// Detects up to `max_detections` people.
    MultiPose,
}

/// Model input parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputConfig {
    /// Model quality/speed tier.
    pub variant: ModelVariant,
    /// Output stride of the network.
    pub output_stride: OutputStride,
    /// Frame scale factor before inference, in [0.2, 1.0].
    pub image_scale_factor: f64,
    /// Mirror frames horizontally (webcam input).
    pub flip_horizontal: bool,
}

/// Thresholds for single-pose mode.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SinglePoseConfig {
    /// Minimum overall pose confidence, in [0, 1].
    pub min_pose_confidence: f64,
    /// Minimum per-keypoint confidence for overlays, in [0, 1].
    pub min_part_confidence: f64,
}

/// Thresholds and decoder parameters for multi-pose mode.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MultiPoseConfig {
    /// Maximum detections returned, in [1, 20].
    pub max_detections: u32,
    /// Minimum overall pose confidence, in [0, 1].
    pub min_pose_confidence: f64,
    /// Minimum per-keypoint confidence, in [0, 1].
    pub min_part_confidence: f64,
    /// Non-maximum-suppression radius in pixels, in [0, 40].
    pub nms_radius: f64,
}

/// Which overlays the surface draws each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputConfig {
    /// Paint the camera frame behind the overlays.
    pub show_video: bool,
    /// Draw skeleton edges.
    pub show_skeleton: bool,
    /// Draw keypoint dots.
    pub show_points: bool,
    /// Draw the pose bounding box.
    pub show_bounding_box: bool,
    /// Draw a marker at each letter center.
    pub show_letter_markers: bool,
}

/// Parameters of the letter-weight effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectConfig {
    /// Maximum distance at which a body part influences a letter.
    pub threshold_radius: f64,
    /// Weight applied at distance zero.
    pub max_weight: f64,
}

/// Immutable per-frame configuration of the demo loop.
///
/// The loop never mutates this in place; changes arrive as
/// [`ConfigUpdate`] values on a channel and are folded in at one point
/// per frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemoConfig {
    /// Detection mode.
    pub algorithm: Algorithm,
    /// Model input parameters.
    pub input: InputConfig,
    /// Single-pose thresholds.
    pub single: SinglePoseConfig,
    /// Multi-pose thresholds.
    pub multi: MultiPoseConfig,
    /// Overlay toggles.
    pub output: OutputConfig,
    /// Letter-weight effect parameters.
    pub effect: EffectConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::SinglePose,
            input: InputConfig {
                variant: ModelVariant::MobileNet075,
                output_stride: OutputStride::S16,
                image_scale_factor: 0.5,
                flip_horizontal: true,
            },
            single: SinglePoseConfig {
                min_pose_confidence: 0.1,
                min_part_confidence: 0.5,
            },
            multi: MultiPoseConfig {
                max_detections: 5,
                min_pose_confidence: 0.15,
                min_part_confidence: 0.1,
                nms_radius: 30.0,
            },
            output: OutputConfig {
                show_video: true,
                show_skeleton: true,
                show_points: true,
                show_bounding_box: false,
                show_letter_markers: true,
            },
            effect: EffectConfig {
                threshold_radius: 20.0,
                max_weight: 150.0,
            },
        }
    }
}

impl DemoConfig {
    /// Reject parameter values outside their documented ranges.
    pub fn validate(&self) -> KinotypeResult<()> {
        if !(0.2..=1.0).contains(&self.input.image_scale_factor) {
            return Err(KinotypeError::validation(
                "image_scale_factor must be in [0.2, 1.0]",
            ));
        }
        for (name, v) in [
            ("single.min_pose_confidence", self.single.min_pose_confidence),
            ("single.min_part_confidence", self.single.min_part_confidence),
            ("multi.min_pose_confidence", self.multi.min_pose_confidence),
            ("multi.min_part_confidence", self.multi.min_part_confidence),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(KinotypeError::validation(format!(
                    "{name} must be in [0.0, 1.0]"
                )));
            }
        }
        if !(1..=20).contains(&self.multi.max_detections) {
            return Err(KinotypeError::validation(
                "multi.max_detections must be in [1, 20]",
            ));
        }
        if !(0.0..=40.0).contains(&self.multi.nms_radius) {
            return Err(KinotypeError::validation(
                "multi.nms_radius must be in [0.0, 40.0]",
            ));
        }
        if !self.effect.threshold_radius.is_finite() || self.effect.threshold_radius <= 0.0 {
            return Err(KinotypeError::validation(
                "effect.threshold_radius must be finite and > 0",
            ));
        }
        if !self.effect.max_weight.is_finite() || self.effect.max_weight < 0.0 {
            return Err(KinotypeError::validation(
                "effect.max_weight must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// The estimate options implied by the input config.
    pub fn estimate_options(&self) -> EstimateOptions {
        EstimateOptions {
            image_scale_factor: self.input.image_scale_factor,
            flip_horizontal: self.input.flip_horizontal,
            output_stride: self.input.output_stride,
        }
    }

    /// The multi-pose decoder options implied by the config.
    pub fn multi_pose_options(&self) -> MultiPoseOptions {
        MultiPoseOptions {
            max_detections: self.multi.max_detections,
            min_part_confidence: self.multi.min_part_confidence,
            nms_radius: self.multi.nms_radius,
        }
    }

    /// Pose-confidence floor for the active algorithm.
    pub fn min_pose_confidence(&self) -> f64 {
        match self.algorithm {
            Algorithm::SinglePose => self.single.min_pose_confidence,
            Algorithm::MultiPose => self.multi.min_pose_confidence,
        }
    }

    /// Part-confidence floor for the active algorithm.
    pub fn min_part_confidence(&self) -> f64 {
        match self.algorithm {
            Algorithm::SinglePose => self.single.min_part_confidence,
            Algorithm::MultiPose => self.multi.min_part_confidence,
        }
    }
}

/// One asynchronous parameter change, consumed by the loop at the top
/// of a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigUpdate {
    /// Replace the whole configuration. A variant change triggers a
    /// model hot-swap.
    Replace(DemoConfig),
    /// Change only the model variant (hot-swap: dispose, load, resume).
    Variant(ModelVariant),
    /// The surface or board geometry changed; recompute the letter
    /// layout before the next frame.
    InvalidateLayout,
}

/// Sends [`ConfigUpdate`]s into a running loop. Clonable; cheap.
#[derive(Clone)]
pub struct ConfigHandle {
    tx: mpsc::Sender<ConfigUpdate>,
}

impl ConfigHandle {
    /// Create a handle/receiver pair; the receiver goes to the loop.
    pub fn channel() -> (Self, mpsc::Receiver<ConfigUpdate>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Queue an update. Returns whether the loop end of the channel is
    /// still alive.
    pub fn send(&self, update: ConfigUpdate) -> bool {
        self.tx.send(update).is_ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/config.rs"]
mod tests;
