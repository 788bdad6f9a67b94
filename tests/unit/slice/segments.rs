use super::*;
use crate::slice::divisions::{axis_length, division_points};

fn table(n: usize, width_fraction: f64, seed: i32, sign: f64) -> SegmentTable {
    let points = division_points(n, axis_length(100, 100), seed).unwrap();
    SegmentTable::build(&points, width_fraction, seed, sign).unwrap()
}

#[test]
fn rejects_too_few_points() {
    assert!(SegmentTable::build(&[1.0], 1.0, 0, 1.0).is_err());
    assert!(SegmentTable::build(&[], 1.0, 0, 1.0).is_err());
}

#[test]
fn segments_are_sorted_and_well_formed() {
    for wf in [0.0, 0.1, 0.5, 1.0] {
        let t = table(25, wf, 99, 1.0);
        assert_eq!(t.len(), 25);
        assert!(!t.is_empty());
        for s in t.as_slice() {
            assert!(s.slice_start < s.slice_end);
            assert!(s.slice_start <= s.visible_start);
            assert!(s.visible_start <= s.visible_end);
            assert!(s.visible_end <= s.slice_end);
        }
        for w in t.as_slice().windows(2) {
            assert!(w[0].slice_start <= w[1].slice_start);
        }
    }
}

#[test]
fn full_width_visible_ranges_tile_the_axis() {
    let t = table(4, 1.0, 42, 1.0);
    let half = axis_length(100, 100) / 2.0;
    let segs = t.as_slice();
    assert_eq!(segs[0].visible_start, -half);
    assert_eq!(segs[3].visible_end, half);
    for w in segs.windows(2) {
        assert_eq!(w[0].visible_end, w[1].visible_start);
    }
}

#[test]
fn visible_range_is_centred_and_scaled() {
    let points = [0.0, 10.0, 30.0];
    let t = SegmentTable::build(&points, 0.5, 1, 1.0).unwrap();
    let a = t.get(0).unwrap();
    assert_eq!((a.visible_start, a.visible_end), (2.5, 7.5));
    let b = t.get(1).unwrap();
    assert_eq!((b.visible_start, b.visible_end), (15.0, 25.0));
    assert_eq!(b.visible_width(), 10.0);
    assert!(t.get(2).is_none());
}

#[test]
fn negative_fraction_collapses_visible_range() {
    let t = SegmentTable::build(&[0.0, 10.0], -1.0, 1, 1.0).unwrap();
    let s = t.get(0).unwrap();
    assert_eq!(s.visible_start, 5.0);
    assert_eq!(s.visible_end, 5.0);
}

#[test]
fn shift_properties_are_in_range_and_follow_global_sign() {
    let pos = table(64, 1.0, 7, 1.0);
    let neg = table(64, 1.0, 7, -1.0);
    let mut seen_up = false;
    let mut seen_down = false;
    for (p, n) in pos.as_slice().iter().zip(neg.as_slice()) {
        assert!(p.shift_direction == 1.0 || p.shift_direction == -1.0);
        assert_eq!(p.shift_direction, -n.shift_direction);
        assert!((0.5..2.0).contains(&p.shift_random_factor));
        assert_eq!(p.shift_random_factor, n.shift_random_factor);
        seen_up |= p.shift_direction > 0.0;
        seen_down |= p.shift_direction < 0.0;
    }
    assert!(seen_up && seen_down);
}

#[test]
fn shift_amount_combines_factor_and_direction() {
    let s = SliceSegment {
        slice_start: 0.0,
        slice_end: 1.0,
        visible_start: 0.0,
        visible_end: 1.0,
        shift_direction: -1.0,
        shift_random_factor: 1.5,
    };
    assert_eq!(s.shift_amount(10.0), -15.0);
}

#[test]
fn table_serializes_as_array() {
    let t = SegmentTable::build(&[0.0, 1.0, 2.0], 1.0, 3, 1.0).unwrap();
    let v = serde_json::to_value(&t).unwrap();
    assert_eq!(v.as_array().map(Vec::len), Some(2));
    assert!(v[0].get("visible_start").is_some());
}
