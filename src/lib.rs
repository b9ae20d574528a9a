//! kinotype is a pose-driven variable-font text animation engine.
//!
//! It turns camera frames into body keypoints through a pluggable
//! pose-estimation model and maps the proximity of each body part to
//! on-screen letters into per-letter font-weight values, driving a
//! visual surface every frame.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: a [`FrameSource`] produces one [`VideoFrame`] per frame
//! 2. **Estimate**: a [`PoseEstimator`] turns the frame into [`Pose`]s
//! 3. **Match**: [`find_nearest`] assigns each keypoint its closest letter
//! 4. **Map**: [`map_weight`] converts the distance into a font weight
//! 5. **Apply**: the [`Surface`] draws overlays and receives the weights
//!
//! [`PoseLoop`] drives the cycle sequentially until its [`CancelToken`]
//! fires; there is no concurrent mutation anywhere in the engine.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic geometry**: letter layout and matching are pure and
//!   stable for a given board; ties break to the lowest letter index.
//! - **Immutable per-frame config**: parameter changes arrive as
//!   [`ConfigUpdate`] values on a channel and are folded in at exactly
//!   one point per frame, which also serializes model hot-swaps.
//! - **Isolated frames**: a failed capture or inference skips one frame,
//!   never the session.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod board;
mod capture;
mod foundation;
mod pose;
mod render;
mod runtime;

pub use board::glyphs::{FixedGridMetrics, GlyphBrush, GlyphMetrics, ParleyGlyphMetrics};
pub use board::layout::{LayoutCache, LetterLayout, compute_layout};
pub use board::matcher::{Assignment, find_nearest};
pub use board::model::LetterBoard;
pub use board::weight::{map_range, map_weight};
pub use capture::{CaptureRequest, FrameSource, VideoFrame};
pub use foundation::core::{Canvas, Fps, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{KinotypeError, KinotypeResult};
pub use pose::estimator::{
    EstimateOptions, ModelLoader, ModelVariant, MultiPoseOptions, OutputStride, PoseEstimator,
};
pub use pose::model::{Keypoint, KeypointKind, Pose, SKELETON_EDGES};
pub use render::surface::{RasterSurface, Surface};
pub use runtime::config::{
    Algorithm, ConfigHandle, ConfigUpdate, DemoConfig, EffectConfig, InputConfig, MultiPoseConfig,
    OutputConfig, SinglePoseConfig,
};
pub use runtime::pipeline::{CancelToken, FramePacer, LoopState, LoopStats, PoseLoop};
