use crate::foundation::error::{SlicerError, SlicerResult, try_vec_with_capacity};
use crate::slice::locate;
use crate::slice::random::rand01;

/// One band along the slicing axis.
///
/// Invariants: `slice_start < slice_end` and
/// `slice_start <= visible_start <= visible_end <= slice_end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SliceSegment {
    /// Axis-space start of the band.
    pub slice_start: f64,
    /// Axis-space end of the band.
    pub slice_end: f64,
    /// Start of the rendered sub-range, centred in the band.
    pub visible_start: f64,
    /// End of the rendered sub-range.
    pub visible_end: f64,
    /// `+1.0` or `-1.0`.
    pub shift_direction: f64,
    /// Multiplier on the global shift magnitude, in `[0.5, 2.0)`.
    pub shift_random_factor: f64,
}

impl SliceSegment {
    /// Width of the rendered sub-range.
    pub fn visible_width(&self) -> f64 {
        self.visible_end - self.visible_start
    }

    /// Signed shift of this band for a global magnitude.
    pub fn shift_amount(&self, magnitude: f64) -> f64 {
        magnitude * self.shift_random_factor * self.shift_direction
    }
}

/// Ordered, read-only table of the slices of one render call.
///
/// Never empty: construction rejects fewer than two division points.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(transparent)]
pub struct SegmentTable {
    segments: Vec<SliceSegment>,
}

impl SegmentTable {
    /// Derive one segment per adjacent pair of `points`.
    ///
    /// `global_shift_sign` is the sign of the user's shift parameter; each slice flips it with
    /// probability one half.
    pub fn build(
        points: &[f64],
        width_fraction: f64,
        seed: i32,
        global_shift_sign: f64,
    ) -> SlicerResult<Self> {
        if points.len() < 2 {
            return Err(SlicerError::validation(
                "segment table needs at least two division points",
            ));
        }
        let count = points.len() - 1;
        let mut segments = try_vec_with_capacity::<SliceSegment>(count, "segment table")?;
        let sign = if global_shift_sign < 0.0 { -1.0 } else { 1.0 };

        for (i, pair) in points.windows(2).enumerate() {
            let (start, end) = (pair[0], pair[1]);
            let keep = (end - start) * width_fraction;
            let (visible_start, visible_end) = if keep >= end - start {
                (start, end)
            } else {
                let center = (start + end) / 2.0;
                let half = (keep / 2.0).max(0.0);
                ((center - half).max(start), (center + half).min(end))
            };

            let i = i as i32;
            let dir_seed = seed.wrapping_mul(17).wrapping_add(i.wrapping_mul(31)) & 0x7FFF;
            let factor_seed = seed.wrapping_mul(23).wrapping_add(i.wrapping_mul(41)) & 0x7FFF;
            let flip = if rand01(dir_seed, 0) > 0.5 { 1.0 } else { -1.0 };

            segments.push(SliceSegment {
                slice_start: start,
                slice_end: end,
                visible_start,
                visible_end: visible_end.max(visible_start),
                shift_direction: sign * flip,
                shift_random_factor: 0.5 + rand01(factor_seed, 0) * 1.5,
            });
        }

        Ok(Self { segments })
    }

    /// Number of segments (at least one).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `idx`.
    pub fn get(&self, idx: usize) -> Option<&SliceSegment> {
        self.segments.get(idx)
    }

    /// All segments in axis order.
    pub fn as_slice(&self) -> &[SliceSegment] {
        &self.segments
    }

    /// Index of the segment owning `axis_coord`; see [`locate::find_segment`].
    #[inline]
    pub fn locate(&self, axis_coord: f64) -> usize {
        locate::find_segment(&self.segments, axis_coord)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slice/segments.rs"]
mod tests;
