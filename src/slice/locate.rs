use crate::slice::segments::SliceSegment;

/// Below this many segments a linear scan beats binary search.
const LINEAR_SCAN_MAX: usize = 8;

/// Index of the segment whose `[slice_start, slice_end]` contains `axis_coord`.
///
/// Coordinates before the first segment map to 0 and coordinates after the last map to the last
/// index, so off-canvas pixels of an expanded destination still land on an edge slice. NaN maps
/// to 0. `segments` must be non-empty and sorted by `slice_start`.
#[inline]
pub(crate) fn find_segment(segments: &[SliceSegment], axis_coord: f64) -> usize {
    let Some(last) = segments.len().checked_sub(1) else {
        return 0;
    };
    if !(axis_coord >= segments[0].slice_start) {
        return 0;
    }
    if axis_coord >= segments[last].slice_end {
        return last;
    }

    if segments.len() <= LINEAR_SCAN_MAX {
        return segments
            .iter()
            .position(|s| axis_coord < s.slice_end)
            .unwrap_or(last);
    }

    // First segment whose end lies beyond the coordinate.
    segments
        .partition_point(|s| s.slice_end <= axis_coord)
        .min(last)
}

#[cfg(test)]
#[path = "../../tests/unit/slice/locate.rs"]
mod tests;
