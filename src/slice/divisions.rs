use crate::foundation::core::Point;
use crate::foundation::error::{SlicerResult, try_vec_with_capacity};
use crate::slice::random::rand01;

/// Slice counts above this are clamped by parameter resolution.
pub const MAX_SLICES: usize = 1000;

const BASELINE_INDEX: i32 = 12_345;
const MIN_SPACING_RATIO: f64 = 0.05;
const DEGENERATE_RANGE: f64 = 0.001;

/// Length of the slicing axis for a `width x height` image.
///
/// Twice the diagonal, so the axis covers the image at any rotation and any anchor inside it.
pub fn axis_length(width: u32, height: u32) -> f64 {
    let (w, h) = (f64::from(width), f64::from(height));
    2.0 * (w * w + h * h).sqrt()
}

/// Length of the slicing axis when it pivots on `anchor`.
///
/// The axis is centred on the anchor, so it must reach the farthest image corner from there.
/// Never shorter than [`axis_length`]; an anchor far outside the image grows it.
pub fn anchored_axis_length(width: u32, height: u32, anchor: Point) -> f64 {
    let (w, h) = (f64::from(width), f64::from(height));
    let reach = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)]
        .into_iter()
        .map(|(x, y)| (Point::new(x, y) - anchor).hypot())
        .fold(0.0, f64::max);
    let reach = if reach.is_finite() { 2.0 * reach } else { 0.0 };
    axis_length(width, height).max(reach)
}

/// Build the `slice_count + 1` ordered boundaries of the slices along an axis of length
/// `axis_len`, centred on zero.
///
/// Interior points start uniform, are jittered per point (shrink to 0.2-0.9x or grow to
/// 1.0-1.8x of the average spacing) plus a seed-wide baseline drift, then sorted, separated by
/// at least 5% of the average spacing, and pulled back inside the end points when the drift
/// pushed them out.
pub fn division_points(slice_count: usize, axis_len: f64, seed: i32) -> SlicerResult<Vec<f64>> {
    let n = slice_count.clamp(1, MAX_SLICES);
    let half = axis_len / 2.0;
    let mut points = try_vec_with_capacity::<f64>(n + 1, "division points")?;

    let avg_spacing = axis_len / n as f64;
    let baseline = (rand01(seed, BASELINE_INDEX) - 0.5) * axis_len * 0.1;

    points.push(-half);
    for i in 1..n {
        let uniform = -half + i as f64 * avg_spacing;
        let base = rand01(seed, (i as i32).wrapping_mul(3779).wrapping_add(2971));
        let factor = if base < 0.7 {
            0.2 + (base / 0.7) * 0.7
        } else {
            1.0 + ((base - 0.7) / 0.3) * 0.8
        };
        points.push(uniform + (factor - 1.0) * avg_spacing + baseline);
    }
    points.push(half);

    if n > 1 {
        let min_spacing = avg_spacing * MIN_SPACING_RATIO;
        let interior = &mut points[1..n];
        interior.sort_by(f64::total_cmp);
        for i in 1..interior.len() {
            if interior[i] - interior[i - 1] < min_spacing {
                interior[i] = interior[i - 1] + min_spacing;
            }
        }
        fit_interior(&mut points, min_spacing);
    }

    Ok(points)
}

/// Pull the interior points back inside `(first + min_spacing, last - min_spacing)` when the
/// jitter left any of them too close to, or beyond, an end point.
fn fit_interior(points: &mut [f64], min_spacing: f64) {
    let n = points.len() - 1;
    let (lo, hi) = (points[0], points[n]);
    let (first, last) = (points[1], points[n - 1]);
    if first >= lo + min_spacing && last <= hi - min_spacing {
        return;
    }

    let target_lo = lo + min_spacing;
    let target_hi = hi - min_spacing;
    let range = last - first;
    if range < DEGENERATE_RANGE {
        let step = (hi - lo) / n as f64;
        for (i, p) in points.iter_mut().enumerate().take(n).skip(1) {
            *p = lo + i as f64 * step;
        }
    } else {
        let scale = (target_hi - target_lo) / range;
        for p in &mut points[1..n] {
            *p = target_lo + (*p - first) * scale;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slice/divisions.rs"]
mod tests;
