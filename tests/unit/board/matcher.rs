use super::*;
use crate::board::glyphs::FixedGridMetrics;
use crate::board::layout::compute_layout;
use crate::board::model::LetterBoard;

#[test]
fn picks_the_minimum_distance_letter() {
    let board = LetterBoard::new("abc", 20.0);
    let mut grid = FixedGridMetrics {
        advance: 10.0,
        height: 20.0,
    };
    // Centers: (5,10), (15,10), (25,10).
    let layout = compute_layout(Point::ZERO, &board, &mut grid).unwrap();

    let m = find_nearest(Point::new(17.0, 10.0), &layout).unwrap();
    assert_eq!(m.index, 1);
    assert_eq!(m.distance, 2.0);
}

#[test]
fn ties_resolve_to_the_lowest_index() {
    let board = LetterBoard::new("ab", 20.0);
    let mut grid = FixedGridMetrics {
        advance: 10.0,
        height: 20.0,
    };
    // Centers: (5,10) and (15,10); (10,10) is equidistant.
    let layout = compute_layout(Point::ZERO, &board, &mut grid).unwrap();

    let m = find_nearest(Point::new(10.0, 10.0), &layout).unwrap();
    assert_eq!(m.index, 0);
}

#[test]
fn empty_layout_is_no_match() {
    let layout = LetterLayout::default();
    assert!(find_nearest(Point::new(1.0, 2.0), &layout).is_none());
}

#[test]
fn separator_indices_never_match() {
    let board = LetterBoard::new("a b", 20.0);
    let mut grid = FixedGridMetrics {
        advance: 10.0,
        height: 20.0,
    };
    let layout = compute_layout(Point::ZERO, &board, &mut grid).unwrap();

    // Directly on the separator cell's center; nearest glyphs are at
    // indices 0 and 2, equidistant, so the tie goes to 0.
    let m = find_nearest(Point::new(15.0, 10.0), &layout).unwrap();
    assert_eq!(m.index, 0);
}

#[test]
fn keypoint_matches_nearest_of_scattered_letters() {
    // One keypoint at (100,100) against letters centered at (90,100),
    // (200,200) and (105,102): the third letter wins at distance
    // sqrt(29) ~= 5.385.
    let board = LetterBoard::new("abc", 20.0);
    struct Fixed(Vec<Option<kurbo::Rect>>);
    impl crate::board::glyphs::GlyphMetrics for Fixed {
        fn measure(
            &mut self,
            _board: &LetterBoard,
        ) -> crate::foundation::error::KinotypeResult<Vec<Option<kurbo::Rect>>> {
            Ok(self.0.clone())
        }
    }
    let centered = |x: f64, y: f64| kurbo::Rect::new(x - 1.0, y - 1.0, x + 1.0, y + 1.0);
    let mut metrics = Fixed(vec![
        Some(centered(90.0, 100.0)),
        Some(centered(200.0, 200.0)),
        Some(centered(105.0, 102.0)),
    ]);
    let layout = compute_layout(Point::ZERO, &board, &mut metrics).unwrap();

    let m = find_nearest(Point::new(100.0, 100.0), &layout).unwrap();
    assert_eq!(m.index, 2);
    assert!((m.distance - 29.0_f64.sqrt()).abs() < 1e-9);
}
