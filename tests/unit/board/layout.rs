use super::*;
use crate::board::glyphs::FixedGridMetrics;
use crate::foundation::error::{KinotypeError, KinotypeResult};

fn grid() -> FixedGridMetrics {
    FixedGridMetrics {
        advance: 10.0,
        height: 20.0,
    }
}

#[test]
fn layout_keys_are_exactly_the_glyph_indices() {
    let board = LetterBoard::new("ab cd e", 20.0);
    let layout = compute_layout(Point::ZERO, &board, &mut grid()).unwrap();

    let excluded = board.excluded_indices();
    assert_eq!(layout.len(), board.letter_count() - excluded.len());
    for i in 0..board.letter_count() {
        assert_eq!(layout.center(i).is_some(), !excluded.contains(&i));
    }
}

#[test]
fn centers_are_origin_plus_half_cell() {
    let board = LetterBoard::new("ab", 20.0);
    let origin = Point::new(100.0, 50.0);
    let layout = compute_layout(origin, &board, &mut grid()).unwrap();
    assert_eq!(layout.center(0), Some(Point::new(105.0, 60.0)));
    assert_eq!(layout.center(1), Some(Point::new(115.0, 60.0)));
}

#[test]
fn iteration_is_ascending_by_index() {
    let board = LetterBoard::new("abc", 20.0);
    let layout = compute_layout(Point::ZERO, &board, &mut grid()).unwrap();
    let indices: Vec<usize> = layout.iter().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

/// Metrics stub whose glyphs all fail to resolve.
struct NoGlyphs;

impl GlyphMetrics for NoGlyphs {
    fn measure(&mut self, board: &LetterBoard) -> KinotypeResult<Vec<Option<kurbo::Rect>>> {
        Ok(vec![None; board.letter_count()])
    }
}

#[test]
fn missing_glyphs_are_skipped_not_fatal() {
    let board = LetterBoard::new("abc", 20.0);
    let layout = compute_layout(Point::ZERO, &board, &mut NoGlyphs).unwrap();
    assert!(layout.is_empty());
    assert_eq!(layout.center(0), None);
}

/// Metrics stub that counts how often it is asked to measure.
struct CountingGrid {
    inner: FixedGridMetrics,
    calls: usize,
}

impl GlyphMetrics for CountingGrid {
    fn measure(&mut self, board: &LetterBoard) -> KinotypeResult<Vec<Option<kurbo::Rect>>> {
        self.calls += 1;
        self.inner.measure(board)
    }
}

#[test]
fn cache_computes_once_until_invalidated() {
    let board = LetterBoard::new("abc", 20.0);
    let mut metrics = CountingGrid {
        inner: grid(),
        calls: 0,
    };
    let mut cache = LayoutCache::new();

    for _ in 0..3 {
        cache
            .get_or_compute(Point::ZERO, &board, &mut metrics)
            .unwrap();
    }
    assert_eq!(metrics.calls, 1);

    cache.invalidate();
    cache
        .get_or_compute(Point::ZERO, &board, &mut metrics)
        .unwrap();
    assert_eq!(metrics.calls, 2);
}

#[test]
fn layout_rejects_invalid_board() {
    let board = LetterBoard::new("", 20.0);
    let err = compute_layout(Point::ZERO, &board, &mut grid()).unwrap_err();
    assert!(matches!(err, KinotypeError::Validation(_)));
}
