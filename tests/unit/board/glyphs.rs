use super::*;
use crate::foundation::core::Point;

#[test]
fn grid_metrics_skip_separators() {
    let board = LetterBoard::new("ab cd", 20.0);
    let mut metrics = FixedGridMetrics {
        advance: 10.0,
        height: 20.0,
    };
    let boxes = metrics.measure(&board).unwrap();
    assert_eq!(boxes.len(), 5);
    assert!(boxes[0].is_some());
    assert!(boxes[1].is_some());
    assert!(boxes[2].is_none());
    assert!(boxes[3].is_some());
    assert!(boxes[4].is_some());
}

#[test]
fn grid_metrics_cells_advance_by_index() {
    let board = LetterBoard::new("abc", 20.0);
    let mut metrics = FixedGridMetrics {
        advance: 10.0,
        height: 20.0,
    };
    let boxes = metrics.measure(&board).unwrap();
    let b1 = boxes[1].unwrap();
    assert_eq!((b1.x0, b1.y0, b1.x1, b1.y1), (10.0, 0.0, 20.0, 20.0));
    assert_eq!(b1.center(), Point::new(15.0, 10.0));
}

#[test]
fn grid_metrics_reject_degenerate_cells() {
    let board = LetterBoard::new("abc", 20.0);
    let mut zero = FixedGridMetrics {
        advance: 0.0,
        height: 20.0,
    };
    assert!(zero.measure(&board).is_err());
    let nan = &mut FixedGridMetrics {
        advance: 10.0,
        height: f64::NAN,
    };
    assert!(nan.measure(&board).is_err());
}

#[test]
fn parley_metrics_reject_unusable_font_bytes() {
    // Bytes that register no font family fail at construction, not on
    // every measure call.
    let err = ParleyGlyphMetrics::new(vec![0u8; 8]).map(|_| ()).unwrap_err();
    assert!(err.to_string().contains("no font families"));
}

#[test]
fn byte_to_char_map_handles_multibyte_text() {
    let map = byte_to_char_index("aé b");
    // 'é' occupies bytes 1..3, so the space starts at byte 3, char 2.
    assert_eq!(char_index_at(&map, 0), 0);
    assert_eq!(char_index_at(&map, 1), 1);
    assert_eq!(char_index_at(&map, 3), 2);
    assert_eq!(char_index_at(&map, 4), 3);
}
