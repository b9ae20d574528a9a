use super::*;

#[test]
fn fps_rejects_zero_terms() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(30, 1).is_ok());
}

#[test]
fn fps_frame_duration() {
    let fps = Fps::new(25, 1).unwrap();
    assert_eq!(fps.as_f64(), 25.0);
    assert_eq!(fps.frame_duration_secs(), 0.04);
}

#[test]
fn canvas_contains_boundaries() {
    let c = Canvas {
        width: 600,
        height: 500,
    };
    assert!(c.contains(Point::new(0.0, 0.0)));
    assert!(c.contains(Point::new(599.9, 499.9)));
    assert!(!c.contains(Point::new(600.0, 10.0)));
    assert!(!c.contains(Point::new(-0.1, 10.0)));
}

#[test]
fn premultiply_straight_rgba() {
    let px = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(px.a, 128);
    assert_eq!(px.r, 128);
    assert_eq!(px.g, 64);
    assert_eq!(px.b, 0);

    let opaque = Rgba8Premul::from_straight_rgba(10, 20, 30, 255);
    assert_eq!(
        opaque,
        Rgba8Premul {
            r: 10,
            g: 20,
            b: 30,
            a: 255
        }
    );
}
