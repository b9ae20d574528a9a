use crate::board::layout::LetterLayout;
use crate::foundation::core::Point;

/// The nearest letter to a body part: letter index plus the Euclidean
/// distance to its center. Ephemeral, recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assignment {
    /// Index of the nearest letter.
    pub index: usize,
    /// Distance from the body part to the letter center, in pixels.
    pub distance: f64,
}

/// Find the letter whose center is closest to `point`.
///
/// Linear scan in ascending index order; exact ties keep the lowest
/// index (the comparison is strict). An empty layout yields `None`.
pub fn find_nearest(point: Point, layout: &LetterLayout) -> Option<Assignment> {
    let mut best: Option<Assignment> = None;
    for (index, center) in layout.iter() {
        let distance = point.distance(center);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Assignment { index, distance });
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/board/matcher.rs"]
mod tests;
