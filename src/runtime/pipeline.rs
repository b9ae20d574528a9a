use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::board::glyphs::GlyphMetrics;
use crate::board::layout::LayoutCache;
use crate::board::matcher::find_nearest;
use crate::board::model::LetterBoard;
use crate::board::weight::map_weight;
use crate::capture::FrameSource;
use crate::foundation::core::{Fps, Point};
use crate::foundation::error::{KinotypeError, KinotypeResult};
use crate::pose::estimator::{ModelLoader, ModelVariant, PoseEstimator};
use crate::pose::model::Pose;
use crate::render::surface::Surface;
use crate::runtime::config::{Algorithm, ConfigUpdate, DemoConfig};

/// Cooperative stop flag checked at the top of every frame iteration.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the loop stop before its next frame.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Holds the loop at a target frame rate by sleeping off the remainder
/// of each frame budget.
#[derive(Debug)]
pub struct FramePacer {
    target: Fps,
    frame_start: Option<Instant>,
}

impl FramePacer {
    /// Pace to `target` frames per second.
    pub fn new(target: Fps) -> Self {
        Self {
            target,
            frame_start: None,
        }
    }

    /// Mark the start of a frame.
    pub fn begin(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Sleep until the current frame's budget is used up.
    pub fn pace(&mut self) {
        let Some(start) = self.frame_start.take() else {
            return;
        };
        let budget = Duration::from_secs_f64(self.target.frame_duration_secs());
        let elapsed = start.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
    }
}

/// Counters accumulated over a loop run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoopStats {
    /// Frames attempted, including failed ones.
    pub frames_total: u64,
    /// Frames skipped after a recoverable capture/inference error.
    pub frames_failed: u64,
    /// Poses that cleared the pose-confidence floor, summed over frames.
    pub poses_detected: u64,
    /// Model hot-swaps performed (dispose then load).
    pub model_swaps: u64,
    /// Rolling average duration of successfully processed frames, in
    /// milliseconds. Failed frames are not samples.
    pub avg_frame_ms: f64,
}

impl LoopStats {
    fn record_frame_ms(&mut self, ms: f64) {
        let n = (self.frames_total - self.frames_failed) as f64;
        self.avg_frame_ms = (self.avg_frame_ms * (n - 1.0) + ms) / n;
    }
}

/// Loop lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// No model loaded; not processing frames.
    Idle,
    /// Frame loop active.
    Running,
}

/// The render/control loop: drives capture → estimation → matching →
/// weight mapping → surface updates, one frame at a time.
///
/// All state is owned by the loop and touched only from [`PoseLoop::run`];
/// there is no concurrent mutation. Parameter changes arrive on the
/// update channel and are folded in at exactly one point per frame,
/// which also serializes model hot-swaps (dispose → load → resume)
/// against frame processing.
pub struct PoseLoop {
    config: DemoConfig,
    board: LetterBoard,
    board_origin: Point,
    metrics: Box<dyn GlyphMetrics>,
    source: Box<dyn FrameSource>,
    loader: Box<dyn ModelLoader>,
    estimator: Option<Box<dyn PoseEstimator>>,
    updates: mpsc::Receiver<ConfigUpdate>,
    layout_cache: LayoutCache,
    pacer: Option<FramePacer>,
    state: LoopState,
    stats: LoopStats,
}

impl PoseLoop {
    /// Assemble an idle loop. Fails fast on invalid config or board.
    pub fn new(
        config: DemoConfig,
        board: LetterBoard,
        board_origin: Point,
        metrics: Box<dyn GlyphMetrics>,
        source: Box<dyn FrameSource>,
        loader: Box<dyn ModelLoader>,
        updates: mpsc::Receiver<ConfigUpdate>,
    ) -> KinotypeResult<Self> {
        config.validate()?;
        board.validate()?;
        Ok(Self {
            config,
            board,
            board_origin,
            metrics,
            source,
            loader,
            estimator: None,
            updates,
            layout_cache: LayoutCache::new(),
            pacer: None,
            state: LoopState::Idle,
            stats: LoopStats::default(),
        })
    }

    /// Pace frames to a target rate instead of free-running.
    pub fn with_pacing(mut self, fps: Fps) -> Self {
        self.pacer = Some(FramePacer::new(fps));
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Counters for the run so far.
    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Load the model and process frames until `cancel` fires.
    ///
    /// Model-load failures (initial or during a hot-swap) are fatal and
    /// returned; per-frame capture/inference errors are logged, counted
    /// in [`LoopStats::frames_failed`] and skipped.
    #[tracing::instrument(skip_all)]
    pub fn run(
        &mut self,
        surface: &mut dyn Surface,
        cancel: &CancelToken,
    ) -> KinotypeResult<LoopStats> {
        let variant = self.config.input.variant;
        self.estimator = Some(self.loader.load(variant)?);
        self.state = LoopState::Running;
        tracing::info!(?variant, "pose loop running");

        let result = self.frame_loop(surface, cancel);

        self.estimator = None;
        self.state = LoopState::Idle;
        result.map(|_| self.stats)
    }

    fn frame_loop(
        &mut self,
        surface: &mut dyn Surface,
        cancel: &CancelToken,
    ) -> KinotypeResult<()> {
        while !cancel.is_cancelled() {
            if let Some(p) = self.pacer.as_mut() {
                p.begin();
            }
            let frame_start = Instant::now();

            self.apply_pending_updates()?;

            match self.process_frame(surface) {
                Ok(()) => {
                    self.stats.frames_total += 1;
                    self.stats
                        .record_frame_ms(frame_start.elapsed().as_secs_f64() * 1000.0);
                }
                Err(e) if e.is_frame_recoverable() => {
                    self.stats.frames_total += 1;
                    self.stats.frames_failed += 1;
                    tracing::warn!(error = %e, "frame skipped");
                }
                Err(e) => return Err(e),
            }

            if let Some(p) = self.pacer.as_mut() {
                p.pace();
            }
        }
        tracing::info!("pose loop cancelled");
        Ok(())
    }

    /// Fold queued parameter changes into the immutable config. This is
    /// the only point where the model may be swapped, so a swap can
    /// never overlap frame processing.
    fn apply_pending_updates(&mut self) -> KinotypeResult<()> {
        let pending: Vec<ConfigUpdate> = self.updates.try_iter().collect();
        for update in pending {
            match update {
                ConfigUpdate::Replace(cfg) => {
                    cfg.validate()?;
                    let new_variant = cfg.input.variant;
                    let old_variant = self.config.input.variant;
                    self.config = cfg;
                    if new_variant != old_variant {
                        self.swap_model(new_variant)?;
                    }
                }
                ConfigUpdate::Variant(variant) => {
                    if variant != self.config.input.variant {
                        self.config.input.variant = variant;
                        self.swap_model(variant)?;
                    }
                }
                ConfigUpdate::InvalidateLayout => {
                    self.layout_cache.invalidate();
                }
            }
        }
        Ok(())
    }

    fn swap_model(&mut self, variant: ModelVariant) -> KinotypeResult<()> {
        // Dispose strictly before load so model resources never coexist.
        self.estimator = None;
        self.estimator = Some(self.loader.load(variant)?);
        self.stats.model_swaps += 1;
        tracing::info!(?variant, "model hot-swapped");
        Ok(())
    }

    fn process_frame(&mut self, surface: &mut dyn Surface) -> KinotypeResult<()> {
        let frame = self.source.next_frame()?;

        let estimator = self
            .estimator
            .as_mut()
            .ok_or_else(|| KinotypeError::model("no model loaded"))?;
        let opts = self.config.estimate_options();
        let poses: Vec<Pose> = match self.config.algorithm {
            Algorithm::SinglePose => vec![estimator.estimate_single(&frame, &opts)?],
            Algorithm::MultiPose => {
                estimator.estimate_multiple(&frame, &opts, &self.config.multi_pose_options())?
            }
        };

        surface.begin_frame(frame.canvas);
        if self.config.output.show_video {
            surface.draw_video(&frame);
        }

        let layout = self.layout_cache.get_or_compute(
            self.board_origin,
            &self.board,
            self.metrics.as_mut(),
        )?;

        if self.config.output.show_letter_markers {
            for (_, center) in layout.iter() {
                surface.draw_letter_marker(center);
            }
        }

        let min_pose_confidence = self.config.min_pose_confidence();
        let min_part_confidence = self.config.min_part_confidence();
        for pose in poses.iter().filter(|p| p.score >= min_pose_confidence) {
            self.stats.poses_detected += 1;

            if self.config.output.show_points {
                surface.draw_keypoints(pose, min_part_confidence);
            }
            if self.config.output.show_skeleton {
                surface.draw_skeleton(pose, min_part_confidence);
            }
            if self.config.output.show_bounding_box {
                surface.draw_bounding_box(pose);
            }

            // The effect uses every keypoint of a qualifying pose;
            // part confidence only gates the overlays above.
            for keypoint in &pose.keypoints {
                let Some(assignment) = find_nearest(keypoint.position, layout) else {
                    continue;
                };
                if let Some(weight) = map_weight(
                    assignment.distance,
                    self.config.effect.threshold_radius,
                    self.config.effect.max_weight,
                ) {
                    surface.set_letter_weight(assignment.index, weight);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/pipeline.rs"]
mod tests;
