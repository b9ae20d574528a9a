use super::*;

#[test]
fn endpoints_match_the_demo_mapping() {
    assert_eq!(map_weight(0.0, 20.0, 150.0), Some(150.0));
    assert_eq!(map_weight(20.0, 20.0, 150.0), None);
    assert_eq!(map_weight(25.0, 20.0, 150.0), None);
}

#[test]
fn just_inside_the_threshold_is_near_zero() {
    let w = map_weight(19.999, 20.0, 150.0).unwrap();
    assert!(w > 0.0);
    assert!(w < 0.01);
}

#[test]
fn monotonically_non_increasing_over_the_radius() {
    let mut prev = f64::INFINITY;
    for i in 0..=200 {
        let d = i as f64 * 0.1; // 0.0 ..= 20.0
        let w = map_weight(d, 20.0, 150.0).unwrap_or(0.0);
        assert!(w <= prev, "weight increased at distance {d}");
        assert!((0.0..=150.0).contains(&w));
        prev = w;
    }
}

#[test]
fn negative_distances_clamp_to_max_weight() {
    assert_eq!(map_weight(-3.0, 20.0, 150.0), Some(150.0));
}

#[test]
fn weight_at_distance_five_point_four() {
    let d = 29.0_f64.sqrt(); // ~5.385
    let w = map_weight(d, 20.0, 150.0).unwrap();
    assert!((w - 109.6).abs() < 0.2, "weight was {w}");
}

#[test]
fn map_range_forward_and_reversed() {
    assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_eq!(map_range(5.0, 20.0, 0.0, 0.0, 150.0), 112.5);
    assert_eq!(map_range(20.0, 20.0, 0.0, 0.0, 150.0), 0.0);
}
