/// Return `v` when finite, otherwise `fallback`.
#[inline]
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Fractional part of a non-negative value, in `[0, 1)`.
#[inline]
pub(crate) fn frac(v: f64) -> f64 {
    let f = v - v.floor();
    // `v - floor(v)` can round up to exactly 1.0 for tiny negative inputs.
    if f >= 1.0 { 0.0 } else { f }
}

#[inline]
pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Length of the intersection of `[a0, a1]` and `[b0, b1]`, or 0 when disjoint.
#[inline]
pub(crate) fn overlap_len(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Rescale a channel value from `0..=from_max` to `0..=to_max`, rounding to nearest.
pub(crate) fn rescale_channel(v: u32, from_max: u32, to_max: u32) -> u32 {
    if from_max == 0 {
        return 0;
    }
    let v = v.min(from_max);
    ((u64::from(v) * u64::from(to_max) + u64::from(from_max / 2)) / u64::from(from_max)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
