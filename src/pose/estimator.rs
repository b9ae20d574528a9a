use crate::capture::VideoFrame;
use crate::foundation::error::KinotypeResult;
use crate::pose::model::Pose;

/// Quality/speed tier of the pose model, named after the MobileNet
/// width multiplier the tier loads. Larger multipliers are more
/// accurate and slower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ModelVariant {
    /// 0.50 multiplier: fastest, least accurate.
    MobileNet050,
    /// 0.75 multiplier: the default tradeoff.
    MobileNet075,
    /// 1.00 multiplier.
    MobileNet100,
    /// 1.01 multiplier: largest and slowest.
    MobileNet101,
}

impl ModelVariant {
    /// The MobileNet width multiplier this tier corresponds to.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::MobileNet050 => 0.50,
            Self::MobileNet075 => 0.75,
            Self::MobileNet100 => 1.00,
            Self::MobileNet101 => 1.01,
        }
    }
}

/// Output stride of the model's final layers. Lower strides trade
/// speed for accuracy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputStride {
    /// Stride 8: most accurate, slowest.
    S8,
    /// Stride 16.
    S16,
    /// Stride 32: fastest.
    S32,
}

impl OutputStride {
    /// Stride as the integer the model consumes.
    pub fn as_u32(self) -> u32 {
        match self {
            Self::S8 => 8,
            Self::S16 => 16,
            Self::S32 => 32,
        }
    }
}

/// Per-inference input parameters shared by both detection modes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EstimateOptions {
    /// Factor to scale the frame by before inference, in [0.2, 1.0].
    pub image_scale_factor: f64,
    /// Mirror the frame horizontally (webcam input is mirrored).
    pub flip_horizontal: bool,
    /// Output stride of the network.
    pub output_stride: OutputStride,
}

/// Extra parameters for multi-pose detection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MultiPoseOptions {
    /// Maximum number of poses returned, in [1, 20].
    pub max_detections: u32,
    /// Part-confidence floor applied inside the decoder.
    pub min_part_confidence: f64,
    /// Non-maximum-suppression radius in pixels, in [0, 40].
    pub nms_radius: f64,
}

/// A loaded pose-estimation model.
///
/// Implementations release model resources on drop; the frame loop
/// relies on that to serialize dispose → load during a hot-swap.
pub trait PoseEstimator {
    /// The variant this estimator was loaded as.
    fn variant(&self) -> ModelVariant;

    /// Estimate the single most confident pose in a frame.
    fn estimate_single(
        &mut self,
        frame: &VideoFrame,
        opts: &EstimateOptions,
    ) -> KinotypeResult<Pose>;

    /// Estimate every pose in a frame.
    fn estimate_multiple(
        &mut self,
        frame: &VideoFrame,
        opts: &EstimateOptions,
        multi: &MultiPoseOptions,
    ) -> KinotypeResult<Vec<Pose>>;
}

/// Source of pose models, one per requested variant.
pub trait ModelLoader {
    /// Load the model weights for a variant. Failure is fatal to the
    /// session.
    fn load(&mut self, variant: ModelVariant) -> KinotypeResult<Box<dyn PoseEstimator>>;
}

#[cfg(test)]
#[path = "../../tests/unit/pose/estimator.rs"]
mod tests;
