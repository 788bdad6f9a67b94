use super::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn zero_angle_is_a_translation() {
    let f = AxisFrame::new(Point::new(10.0, 20.0), 0.0);
    assert_eq!(f.to_axis(Point::new(13.0, 16.0)), Vec2::new(3.0, -4.0));
    assert_eq!(f.shift_direction(), Vec2::new(1.0, 0.0));
}

#[test]
fn quarter_turn_swaps_axes() {
    let f = AxisFrame::new(Point::ZERO, std::f64::consts::FRAC_PI_2);
    // A point straight "down" in image space lies along the bands after a quarter turn.
    assert!(close(f.to_axis(Point::new(0.0, 5.0)), Vec2::new(5.0, 0.0)));
    assert!(close(f.to_axis(Point::new(5.0, 0.0)), Vec2::new(0.0, -5.0)));
    assert!(close(f.shift_direction(), Vec2::new(0.0, 1.0)));
}

#[test]
fn rotate_inverts_to_axis() {
    for angle in [-2.0f64, -0.3, 0.0, 0.7, 3.0, 10.0] {
        let f = AxisFrame::new(Point::new(31.5, -7.25), angle);
        for p in [Point::ZERO, Point::new(100.0, 3.0), Point::new(-12.5, 44.0)] {
            let back = f.anchor + f.rotate(f.to_axis(p));
            assert!((back - p).hypot() < 1e-9, "angle={angle} p={p:?} back={back:?}");
        }
    }
}

#[test]
fn shift_direction_is_unit_length() {
    for angle in [0.1f64, 1.0, 2.5, -4.0] {
        let d = AxisFrame::new(Point::ZERO, angle).shift_direction();
        assert!((d.hypot() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn non_finite_angle_is_identity() {
    let f = AxisFrame::new(Point::new(1.0, 1.0), f64::NAN);
    assert_eq!(f.to_axis(Point::new(3.0, 4.0)), Vec2::new(2.0, 3.0));
    let f = AxisFrame::new(Point::ZERO, f64::INFINITY);
    assert_eq!(f.shift_direction(), Vec2::new(1.0, 0.0));
}
