use crate::buffer::pixel::Pixel;
use crate::buffer::view::{ImageMut, ImageRef};
use crate::foundation::error::SlicerResult;
use crate::params::{ResolvedParams, SliceParams};
use crate::render::context::SliceContext;
use crate::render::scheduler::{RenderThreading, for_each_row};
use crate::slice::divisions::{anchored_axis_length, division_points};
use crate::slice::segments::SegmentTable;

const SHIFT_EPSILON: f64 = 1e-3;
const FULL_WIDTH_EPSILON: f64 = 1e-6;
const MIN_VISIBLE_WIDTH: f64 = 1e-6;

/// Which per-pixel path a render call took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPath {
    /// Destination had no pixels.
    #[default]
    Empty,
    /// Direct copy: nothing to slice, or degenerate geometry.
    ///
    /// Outside degenerate geometry, taken only when every slice keeps its full width and either
    /// the shift is negligible or there is a single slice. A single slice narrowed by `width_fraction < 1` still goes
    /// through the sliced path, so a nonzero shift moves it.
    Identity,
    /// Full slice/shift/coverage pipeline.
    Sliced,
}

/// Summary of one render call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Destination rows written.
    pub rows: u64,
    /// Destination pixels written.
    pub pixels: u64,
    /// Segments in the slice table; zero when the table was never built.
    pub segments: usize,
    /// Path taken.
    pub path: RenderPath,
}

/// Render the slice effect of `params` from `src` into every pixel of `dst`, using all cores.
///
/// Same as [`render_with`] with [`RenderThreading::default`].
pub fn render<P: Pixel>(
    src: &ImageRef<'_, P>,
    dst: &mut ImageMut<'_, P>,
    params: &SliceParams,
) -> SlicerResult<()> {
    render_with(src, dst, params, &RenderThreading::default()).map(|_| ())
}

/// Render the slice effect of `params` from `src` into every pixel of `dst`.
///
/// Parameters are clamped, never rejected. The output is bit-identical for any `threading`.
/// Errors come only from allocation or worker-pool failure; `dst` must then be treated as
/// unspecified.
#[tracing::instrument(
    skip_all,
    fields(
        src_w = src.width(),
        src_h = src.height(),
        dst_w = dst.width(),
        dst_h = dst.height(),
        slices = params.slice_count,
    )
)]
pub fn render_with<P: Pixel>(
    src: &ImageRef<'_, P>,
    dst: &mut ImageMut<'_, P>,
    params: &SliceParams,
    threading: &RenderThreading,
) -> SlicerResult<RenderStats> {
    let mut stats = RenderStats {
        rows: u64::from(dst.height()),
        pixels: u64::from(dst.width()) * u64::from(dst.height()),
        ..RenderStats::default()
    };
    if dst.is_empty() {
        return Ok(stats);
    }

    let resolved = params.resolve(src.width(), src.height());

    if src.is_empty() {
        tracing::debug!("zero-area source, identity copy");
        stats.path = RenderPath::Identity;
        copy_identity(src, dst, threading)?;
        return Ok(stats);
    }
    if is_identity(&resolved) {
        tracing::debug!("identity fast path");
        stats.path = RenderPath::Identity;
        copy_identity(src, dst, threading)?;
        return Ok(stats);
    }

    let points = division_points(
        resolved.slice_count,
        anchored_axis_length(src.width(), src.height(), resolved.anchor),
        resolved.seed,
    )?;
    let segments = SegmentTable::build(
        &points,
        resolved.width_fraction,
        resolved.seed,
        resolved.shift_sign,
    )?;
    stats.segments = segments.len();

    if segments
        .as_slice()
        .iter()
        .all(|s| s.visible_width() < MIN_VISIBLE_WIDTH)
    {
        tracing::debug!(segments = segments.len(), "no visible slice width, identity copy");
        stats.path = RenderPath::Identity;
        copy_identity(src, dst, threading)?;
        return Ok(stats);
    }

    tracing::debug!(
        segments = segments.len(),
        shift = resolved.shift_magnitude,
        "sliced render"
    );
    let ctx = SliceContext::new(*src, &resolved, &segments, &points, dst.origin_offset());
    for_each_row(dst, threading, |y, row| ctx.shade_row(y, row))?;
    stats.path = RenderPath::Sliced;
    Ok(stats)
}

fn is_identity(p: &ResolvedParams) -> bool {
    p.width_fraction >= 1.0 - FULL_WIDTH_EPSILON
        && (p.shift_magnitude <= SHIFT_EPSILON || p.slice_count <= 1)
        && !p.guides
}

/// Copy `src` into `dst`, honouring the source origin and the destination origin offset.
/// Destination pixels with no source counterpart become transparent.
fn copy_identity<P: Pixel>(
    src: &ImageRef<'_, P>,
    dst: &mut ImageMut<'_, P>,
    threading: &RenderThreading,
) -> SlicerResult<()> {
    let off = dst.origin_offset();
    let origin = src.origin();
    let dx = i64::from(off.x) + i64::from(origin.x);
    let dy = i64::from(off.y) + i64::from(origin.y);
    for_each_row(dst, threading, |y, row| {
        let sy = i64::from(y) - dy;
        for (x, out) in row.iter_mut().enumerate() {
            *out = src.get(x as i64 - dx, sy).unwrap_or(P::TRANSPARENT);
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
