use crate::capture::VideoFrame;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8Premul};
use crate::pose::model::{Pose, SKELETON_EDGES};

/// Radius of keypoint and letter-marker dots, in pixels.
const DOT_RADIUS: f64 = 3.0;
/// Radius of letter-center markers, in pixels.
const MARKER_RADIUS: f64 = 5.0;

const KEYPOINT_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 255,
    b: 255,
    a: 255,
};
const SKELETON_COLOR: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
const BBOX_COLOR: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
const MARKER_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0x1b,
    g: 0x20,
    b: 0x4b,
    a: 255,
};

/// Per-frame visual output of the loop.
///
/// The loop clears the surface, optionally paints the video frame and
/// pose overlays, and pushes letter weights. How weights become visible
/// (a variable-font axis, a glow, anything) is the implementation's
/// business; the engine only guarantees weights in `[0, max_weight]`.
pub trait Surface {
    /// Clear and resize the surface for a new frame.
    fn begin_frame(&mut self, canvas: Canvas);

    /// Paint the camera frame as the background.
    fn draw_video(&mut self, frame: &VideoFrame);

    /// Draw a dot for each keypoint above the part-confidence floor.
    fn draw_keypoints(&mut self, pose: &Pose, min_part_confidence: f64);

    /// Draw the skeleton edges whose endpoints are both above the
    /// part-confidence floor.
    fn draw_skeleton(&mut self, pose: &Pose, min_part_confidence: f64);

    /// Draw the pose's axis-aligned bounding box.
    fn draw_bounding_box(&mut self, pose: &Pose);

    /// Draw a marker at a letter center.
    fn draw_letter_marker(&mut self, center: Point);

    /// Apply a font-weight value to a letter. Letters keep their last
    /// weight until overwritten.
    fn set_letter_weight(&mut self, index: usize, weight: f64);
}

/// Software surface: draws overlays into a premultiplied RGBA8 buffer
/// and tracks per-letter weights.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    canvas: Canvas,
    pixels: Vec<Rgba8Premul>,
    weights: Vec<f64>,
}

impl RasterSurface {
    /// A surface of the given size tracking `letter_count` weights.
    pub fn new(canvas: Canvas, letter_count: usize) -> Self {
        Self {
            canvas,
            pixels: vec![Rgba8Premul::transparent(); pixel_len(canvas)],
            weights: vec![0.0; letter_count],
        }
    }

    /// Current surface size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The pixel buffer, row-major premultiplied RGBA.
    pub fn pixels(&self) -> &[Rgba8Premul] {
        &self.pixels
    }

    /// Pixel at (x, y), if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        Some(self.pixels[y as usize * self.canvas.width as usize + x as usize])
    }

    /// Last applied weight per letter index.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba8Premul) {
        if x < 0 || y < 0 || x >= i64::from(self.canvas.width) || y >= i64::from(self.canvas.height)
        {
            return;
        }
        self.pixels[(y * i64::from(self.canvas.width) + x) as usize] = color;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8Premul) {
        let r = radius.ceil() as i64;
        let cx = center.x.round() as i64;
        let cy = center.y.round() as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                let fx = dx as f64;
                let fy = dy as f64;
                if fx * fx + fy * fy <= radius * radius {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_segment(&mut self, a: Point, b: Point, color: Rgba8Premul) {
        let steps = a.distance(b).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = a.x + (b.x - a.x) * t;
            let y = a.y + (b.y - a.y) * t;
            self.put(x.round() as i64, y.round() as i64, color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba8Premul) {
        let tl = Point::new(rect.x0, rect.y0);
        let tr = Point::new(rect.x1, rect.y0);
        let br = Point::new(rect.x1, rect.y1);
        let bl = Point::new(rect.x0, rect.y1);
        self.draw_segment(tl, tr, color);
        self.draw_segment(tr, br, color);
        self.draw_segment(br, bl, color);
        self.draw_segment(bl, tl, color);
    }
}

impl Surface for RasterSurface {
    fn begin_frame(&mut self, canvas: Canvas) {
        if canvas != self.canvas {
            self.canvas = canvas;
            self.pixels = vec![Rgba8Premul::transparent(); pixel_len(canvas)];
        } else {
            self.pixels.fill(Rgba8Premul::transparent());
        }
    }

    fn draw_video(&mut self, frame: &VideoFrame) {
        let w = frame.canvas.width.min(self.canvas.width);
        let h = frame.canvas.height.min(self.canvas.height);
        for y in 0..h as usize {
            for x in 0..w as usize {
                let src = (y * frame.canvas.width as usize + x) * 4;
                let px = Rgba8Premul::from_straight_rgba(
                    frame.data[src],
                    frame.data[src + 1],
                    frame.data[src + 2],
                    frame.data[src + 3],
                );
                self.pixels[y * self.canvas.width as usize + x] = px;
            }
        }
    }

    fn draw_keypoints(&mut self, pose: &Pose, min_part_confidence: f64) {
        for k in pose.visible_keypoints(min_part_confidence) {
            self.fill_circle(k.position, DOT_RADIUS, KEYPOINT_COLOR);
        }
    }

    fn draw_skeleton(&mut self, pose: &Pose, min_part_confidence: f64) {
        for (a, b) in SKELETON_EDGES {
            let (Some(ka), Some(kb)) = (pose.keypoint(a), pose.keypoint(b)) else {
                continue;
            };
            if ka.is_visible(min_part_confidence) && kb.is_visible(min_part_confidence) {
                let (pa, pb) = (ka.position, kb.position);
                self.draw_segment(pa, pb, SKELETON_COLOR);
            }
        }
    }

    fn draw_bounding_box(&mut self, pose: &Pose) {
        if let Some(rect) = pose.bounding_box() {
            self.stroke_rect(rect, BBOX_COLOR);
        }
    }

    fn draw_letter_marker(&mut self, center: Point) {
        self.fill_circle(center, MARKER_RADIUS, MARKER_COLOR);
    }

    fn set_letter_weight(&mut self, index: usize, weight: f64) {
        if let Some(slot) = self.weights.get_mut(index) {
            *slot = weight;
        }
    }
}

fn pixel_len(canvas: Canvas) -> usize {
    canvas.width as usize * canvas.height as usize
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
