use crate::buffer::pixel::Pixel;
use crate::foundation::core::Point;
use crate::foundation::math::{clamp01, overlap_len};
use crate::params::AlphaMode;
use crate::render::context::SliceContext;
use crate::render::sampler::{self, Argb};
use crate::slice::segments::SliceSegment;

/// Running blend state for one destination pixel.
#[derive(Debug, Default)]
pub(crate) struct CoverageAccum {
    alpha_sum: f32,
    weight_sum: f32,
    best: Option<Candidate>,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    opaque: bool,
    coverage: f32,
    argb: Argb,
}

impl CoverageAccum {
    /// Add a sample that covers `coverage` of the pixel's span.
    pub(crate) fn add(&mut self, argb: Argb, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        self.alpha_sum += argb[0] * coverage;
        self.weight_sum += coverage;

        let cand = Candidate {
            opaque: argb[0] > 0.0,
            coverage,
            argb,
        };
        let better = match &self.best {
            None => true,
            Some(best) => {
                (cand.opaque && !best.opaque)
                    || (cand.opaque == best.opaque && cand.coverage > best.coverage)
            }
        };
        if better {
            self.best = Some(cand);
        }
    }

    /// Summed coverage, clamped to `[0, 1]`.
    pub(crate) fn weight(&self) -> f32 {
        self.weight_sum.clamp(0.0, 1.0)
    }

    /// Resolve into a pixel. Colour comes from the best contributor only; alpha follows `mode`.
    pub(crate) fn finish<P: Pixel>(&self, mode: AlphaMode) -> P {
        let Some(best) = self.best else {
            return P::TRANSPARENT;
        };
        if !best.opaque || self.weight() <= 0.0 {
            return P::TRANSPARENT;
        }
        let alpha = match mode {
            AlphaMode::Coverage => self.alpha_sum,
            AlphaMode::Normalized => self.alpha_sum / self.weight_sum,
        }
        .clamp(0.0, P::MAX);
        if alpha.round() <= 0.0 {
            return P::TRANSPARENT;
        }
        P::from_argb([alpha, best.argb[1], best.argb[2], best.argb[3]])
    }
}

/// Composite destination pixel at source-space position `world`, whose slicing-axis
/// coordinate is `axis`.
///
/// The pixel is treated as a span of `2 * feather` along the axis. Every segment whose visible
/// range overlaps the span contributes its shifted source sample, weighted by the overlapped
/// fraction.
pub(crate) fn composite_pixel<P: Pixel>(ctx: &SliceContext<'_, P>, world: Point, axis: f64) -> P {
    let segments = ctx.segments.as_slice();
    let idx = ctx.segments.locate(axis);
    let (lo, hi) = (axis - ctx.feather, axis + ctx.feather);
    let span = hi - lo;

    let mut acc = CoverageAccum::default();
    let mut visit = |seg: &SliceSegment| {
        let coverage = clamp01(overlap_len(lo, hi, seg.visible_start, seg.visible_end) / span);
        if coverage > 0.0 {
            acc.add(shifted_sample(ctx, seg, world), coverage as f32);
        }
    };

    visit(&segments[idx]);
    for seg in segments[..idx].iter().rev() {
        if seg.slice_end <= lo {
            break;
        }
        visit(seg);
    }
    for seg in &segments[idx + 1..] {
        if seg.slice_start >= hi {
            break;
        }
        visit(seg);
    }

    acc.finish(ctx.alpha_mode)
}

/// Sample the source for `world` as seen through the displaced segment `seg`.
#[inline]
fn shifted_sample<P: Pixel>(ctx: &SliceContext<'_, P>, seg: &SliceSegment, world: Point) -> Argb {
    let offset = ctx.shift_dir * seg.shift_amount(ctx.shift_magnitude);
    let origin = ctx.src.origin().to_vec2();
    let src = world - offset - origin;
    sampler::sample(&ctx.src, ctx.sample_mode, src.x, src.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
