use super::*;

fn uniform(n: usize) -> Vec<SliceSegment> {
    (0..n)
        .map(|i| {
            let start = i as f64 * 10.0;
            SliceSegment {
                slice_start: start,
                slice_end: start + 10.0,
                visible_start: start,
                visible_end: start + 10.0,
                shift_direction: 1.0,
                shift_random_factor: 1.0,
            }
        })
        .collect()
}

#[test]
fn finds_containing_segment_linear_and_binary() {
    for n in [1usize, 3, 8, 9, 50] {
        let segs = uniform(n);
        for i in 0..n {
            let mid = i as f64 * 10.0 + 5.0;
            assert_eq!(find_segment(&segs, mid), i, "n={n}");
        }
    }
}

#[test]
fn boundaries_belong_to_the_following_segment() {
    for n in [4usize, 20] {
        let segs = uniform(n);
        assert_eq!(find_segment(&segs, 0.0), 0);
        assert_eq!(find_segment(&segs, 10.0), 1);
        assert_eq!(find_segment(&segs, 30.0), 3);
    }
}

#[test]
fn out_of_range_coordinates_clamp_to_edges() {
    for n in [1usize, 5, 40] {
        let segs = uniform(n);
        assert_eq!(find_segment(&segs, -1e9), 0);
        assert_eq!(find_segment(&segs, -0.001), 0);
        assert_eq!(find_segment(&segs, n as f64 * 10.0), n - 1);
        assert_eq!(find_segment(&segs, 1e12), n - 1);
        assert_eq!(find_segment(&segs, f64::INFINITY), n - 1);
        assert_eq!(find_segment(&segs, f64::NEG_INFINITY), 0);
        assert_eq!(find_segment(&segs, f64::NAN), 0);
    }
}

#[test]
fn every_coordinate_maps_to_a_valid_index() {
    let segs = uniform(33);
    let mut x = -50.0;
    while x < 400.0 {
        assert!(find_segment(&segs, x) < segs.len());
        x += 0.37;
    }
}

#[test]
fn empty_table_returns_zero() {
    assert_eq!(find_segment(&[], 1.0), 0);
}
