use std::collections::BTreeMap;

use crate::board::glyphs::GlyphMetrics;
use crate::board::model::LetterBoard;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::KinotypeResult;

/// Mapping from letter index to its on-screen center point, in surface
/// coordinates.
///
/// Keys are exactly the non-separator indices whose glyph resolved to a
/// box. Deterministic for a fixed board and metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LetterLayout {
    centers: BTreeMap<usize, Point>,
}

impl LetterLayout {
    /// Center of a letter, if it is part of the layout.
    pub fn center(&self, index: usize) -> Option<Point> {
        self.centers.get(&index).copied()
    }

    /// Number of letters in the layout.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Whether the layout has no letters.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Letter centers in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.centers.iter().map(|(i, p)| (*i, *p))
    }
}

/// Resolve the center of every glyph letter on a board.
///
/// `origin` is the surface position of the board's top-left corner;
/// glyph boxes from `metrics` are board-local and are translated by it.
/// A letter whose glyph did not resolve is skipped with a warning and
/// omitted from the result.
#[tracing::instrument(skip(board, metrics))]
pub fn compute_layout(
    origin: Point,
    board: &LetterBoard,
    metrics: &mut dyn GlyphMetrics,
) -> KinotypeResult<LetterLayout> {
    board.validate()?;
    let boxes = metrics.measure(board)?;

    let mut centers = BTreeMap::new();
    for (index, glyph_box) in boxes.iter().enumerate() {
        if !board.is_glyph(index) {
            continue;
        }
        match glyph_box {
            Some(b) => {
                let center = b.center();
                centers.insert(index, origin + Vec2::new(center.x, center.y));
            }
            None => {
                tracing::warn!(index, "letter glyph did not resolve, skipping");
            }
        }
    }

    Ok(LetterLayout { centers })
}

/// Cached letter layout, recomputed only after [`LayoutCache::invalidate`].
///
/// Board geometry is static between resizes, so the per-frame path is a
/// cheap clone-free borrow of the cached value.
#[derive(Default)]
pub struct LayoutCache {
    cached: Option<LetterLayout>,
}

impl LayoutCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached layout, computing it on first use.
    pub fn get_or_compute(
        &mut self,
        origin: Point,
        board: &LetterBoard,
        metrics: &mut dyn GlyphMetrics,
    ) -> KinotypeResult<&LetterLayout> {
        if self.cached.is_none() {
            self.cached = Some(compute_layout(origin, board, metrics)?);
        }
        Ok(self.cached.as_ref().expect("cache populated above"))
    }

    /// Drop the cached layout so the next frame recomputes it (call on
    /// resize or board change).
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/layout.rs"]
mod tests;
