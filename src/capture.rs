use crate::foundation::core::Canvas;
use crate::foundation::error::{KinotypeError, KinotypeResult};

/// One camera frame: straight-alpha RGBA8 pixel data plus dimensions.
#[derive(Clone, Debug)]
pub struct VideoFrame {
    /// Frame size in pixels.
    pub canvas: Canvas,
    /// RGBA8 bytes, row-major, `canvas.width * canvas.height * 4` long.
    pub data: Vec<u8>,
}

impl VideoFrame {
    /// Construct a frame, checking the buffer length against the
    /// dimensions.
    pub fn new(canvas: Canvas, data: Vec<u8>) -> KinotypeResult<Self> {
        let expected = canvas.width as usize * canvas.height as usize * 4;
        if data.len() != expected {
            return Err(KinotypeError::capture(format!(
                "frame buffer is {} bytes, expected {expected} for {}x{}",
                data.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self { canvas, data })
    }

    /// An all-black frame of the given size.
    pub fn black(canvas: Canvas) -> Self {
        let mut data = vec![0u8; canvas.width as usize * canvas.height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self { canvas, data }
    }
}

/// What the loop asks of a camera when it opens the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaptureRequest {
    /// Preferred frame size.
    pub preferred: Canvas,
    /// Accept the device default size when the preferred size cannot
    /// be satisfied (constrained/mobile devices).
    pub allow_fallback: bool,
}

impl CaptureRequest {
    /// Request a specific size, falling back to the device default if
    /// the device cannot provide it.
    pub fn preferred(width: u32, height: u32) -> Self {
        Self {
            preferred: Canvas { width, height },
            allow_fallback: true,
        }
    }

    /// Request a specific size and fail if the device cannot provide it.
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            preferred: Canvas { width, height },
            allow_fallback: false,
        }
    }
}

/// A source of video frames (a camera, or a recording in tests).
///
/// Opening the source is the embedder's responsibility; a source handed
/// to the loop is already streaming. An unavailable camera must surface
/// as [`KinotypeError::Capture`] from the constructor so startup can
/// abort with a user-visible message.
pub trait FrameSource {
    /// Actual size of the frames this source produces.
    fn canvas(&self) -> Canvas;

    /// Block until the next frame is available and return it.
    fn next_frame(&mut self) -> KinotypeResult<VideoFrame>;
}

#[cfg(test)]
#[path = "../tests/unit/capture.rs"]
mod tests;
