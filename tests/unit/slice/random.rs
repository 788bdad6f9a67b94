use super::*;

#[test]
fn same_inputs_give_same_value() {
    for (seed, index) in [(0, 0), (42, 7), (-5, 12345), (i32::MAX, i32::MIN)] {
        assert_eq!(
            rand01(seed, index).to_bits(),
            rand01(seed, index).to_bits()
        );
    }
}

#[test]
fn values_stay_in_unit_interval() {
    for seed in [-1000, -1, 0, 1, 1234, 10_000, i32::MAX, i32::MIN] {
        for index in 0..500 {
            let v = rand01(seed, index * 3779 + 2971);
            assert!(v.is_finite());
            assert!((0.0..1.0).contains(&v), "seed={seed} index={index} v={v}");
        }
    }
}

#[test]
fn different_seeds_diverge() {
    let a: Vec<u64> = (0..32).map(|i| rand01(1, i).to_bits()).collect();
    let b: Vec<u64> = (0..32).map(|i| rand01(2, i).to_bits()).collect();
    assert_ne!(a, b);
}

#[test]
fn zero_hash_maps_to_zero() {
    // hash == 0 -> r == 0 -> sin(0) == 0.
    assert_eq!(rand01(0, 0), 0.0);
}

#[test]
fn values_are_reasonably_spread() {
    let n = 2000;
    let mean = (0..n).map(|i| rand01(99, i)).sum::<f64>() / f64::from(n);
    assert!((0.35..0.65).contains(&mean), "mean={mean}");
}
