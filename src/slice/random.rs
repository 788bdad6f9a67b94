use crate::foundation::math::{finite_or, frac};

const SEED_MUL: u32 = 1_099_087;
const INDEX_MUL: u32 = 2_654_435_761;
const HASH_MASK: u32 = 0x7FFF_FFFF;

/// Deterministic pseudo-random value in `[0, 1)` for `(seed, index)`.
///
/// Stateless: the same pair yields the same value on every thread and every run. Non-finite
/// intermediates collapse to `0.5`.
#[inline]
pub fn rand01(seed: i32, index: i32) -> f64 {
    let hash = (seed as u32)
        .wrapping_mul(SEED_MUL)
        .wrapping_add((index as u32).wrapping_mul(INDEX_MUL))
        & HASH_MASK;
    let r = f64::from(hash) / f64::from(HASH_MASK);
    let v = frac(((r * 12.9898).sin() * 43758.5453).abs());
    let v = finite_or(v, 0.5);
    if (0.0..1.0).contains(&v) { v } else { 0.5 }
}

#[cfg(test)]
#[path = "../../tests/unit/slice/random.rs"]
mod tests;
