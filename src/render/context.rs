use crate::buffer::pixel::Pixel;
use crate::buffer::view::ImageRef;
use crate::foundation::core::{PixelOffset, Point, Vec2};
use crate::params::{AlphaMode, ResolvedParams, SampleMode};
use crate::render::{compositor, guides, transform::AxisFrame};
use crate::slice::segments::SegmentTable;

/// Half-width, in axis units, of the box filter used for edge coverage (one pixel wide).
pub(crate) const FEATHER_HALF_WIDTH: f64 = 0.5;

/// Immutable render-wide state shared by all workers of one render call.
pub(crate) struct SliceContext<'a, P> {
    pub(crate) src: ImageRef<'a, P>,
    pub(crate) frame: AxisFrame,
    pub(crate) shift_dir: Vec2,
    pub(crate) shift_magnitude: f64,
    pub(crate) segments: &'a SegmentTable,
    pub(crate) divisions: &'a [f64],
    pub(crate) feather: f64,
    pub(crate) dest_offset: Vec2,
    pub(crate) sample_mode: SampleMode,
    pub(crate) alpha_mode: AlphaMode,
    pub(crate) guides: bool,
}

impl<'a, P: Pixel> SliceContext<'a, P> {
    pub(crate) fn new(
        src: ImageRef<'a, P>,
        params: &ResolvedParams,
        segments: &'a SegmentTable,
        divisions: &'a [f64],
        dest_offset: PixelOffset,
    ) -> Self {
        let frame = AxisFrame::new(params.anchor, params.angle_rad);
        Self {
            src,
            frame,
            shift_dir: frame.shift_direction(),
            shift_magnitude: params.shift_magnitude,
            segments,
            divisions,
            feather: FEATHER_HALF_WIDTH,
            dest_offset: dest_offset.to_vec2(),
            sample_mode: params.sample_mode,
            alpha_mode: params.alpha_mode,
            guides: params.guides,
        }
    }

    /// Source-space position of destination pixel `(x, y)`.
    #[inline]
    pub(crate) fn world_point(&self, x: u32, y: u32) -> Point {
        Point::new(f64::from(x), f64::from(y)) - self.dest_offset
    }

    /// Final colour of destination pixel `(x, y)`.
    #[inline]
    pub(crate) fn shade(&self, x: u32, y: u32) -> P {
        let world = self.world_point(x, y);
        let axis = self.frame.to_axis(world).y;
        let px = compositor::composite_pixel(self, world, axis);
        if self.guides && guides::on_division(self.divisions, axis, self.feather) {
            guides::paint_guide(px)
        } else {
            px
        }
    }

    /// Shade a whole destination row.
    pub(crate) fn shade_row(&self, y: u32, row: &mut [P]) {
        for (x, out) in row.iter_mut().enumerate() {
            *out = self.shade(x as u32, y);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
