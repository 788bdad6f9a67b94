use crate::buffer::pixel::Pixel;
use crate::foundation::core::PixelOffset;
use crate::foundation::error::{SlicerError, SlicerResult, try_vec_with_capacity};
use crate::params::SliceParams;

/// Largest margin, in pixels, added on each side of an expanded destination.
pub const MAX_EXPANSION_MARGIN: u32 = 25_000;

const SHIFT_EPSILON: f64 = 1e-3;

/// Destination geometry for a host that grows its output buffer so shifted content is not
/// clipped at the canvas edge.
///
/// The margin is added on every side; source pixel `(0, 0)` lands at
/// [`Expansion::origin_offset`] in the expanded buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Expansion {
    /// Pixels added on each side.
    pub margin: u32,
    /// Expanded width.
    pub width: u32,
    /// Expanded height.
    pub height: u32,
}

impl Expansion {
    /// Expansion needed by `params` for a `width x height` source, or `None` when the shift is
    /// negligible or the expanded size would not fit.
    pub fn for_params(params: &SliceParams, width: u32, height: u32) -> Option<Self> {
        let resolved = params.resolve(width, height);
        Self::for_shift(resolved.shift_magnitude, width, height)
    }

    /// Expansion for a resolution-adjusted shift magnitude: `ceil(shift * 2.5) + 5`, capped at
    /// [`MAX_EXPANSION_MARGIN`].
    pub fn for_shift(shift_magnitude: f64, width: u32, height: u32) -> Option<Self> {
        if !shift_magnitude.is_finite() || shift_magnitude.abs() <= SHIFT_EPSILON {
            return None;
        }
        let raw = (shift_magnitude.abs() * 2.5).ceil() + 5.0;
        let margin = raw.min(f64::from(MAX_EXPANSION_MARGIN)) as u32;

        let grow = |dim: u32| margin.checked_mul(2).and_then(|m| dim.checked_add(m));
        match (grow(width), grow(height)) {
            (Some(width), Some(height)) => {
                tracing::debug!(margin, width, height, "destination expansion");
                Some(Self {
                    margin,
                    width,
                    height,
                })
            }
            _ => {
                tracing::warn!(margin, width, height, "expanded destination size overflows");
                None
            }
        }
    }

    /// Where source pixel `(0, 0)` lands in the expanded destination.
    pub fn origin_offset(&self) -> PixelOffset {
        PixelOffset::uniform(self.margin as i32)
    }

    /// Pixel count of the expanded destination.
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Allocate a packed, fully transparent expanded destination.
    pub fn allocate<P: Pixel>(&self) -> SlicerResult<Vec<P>> {
        let len = self.pixel_count().ok_or_else(|| {
            SlicerError::out_of_memory(format!(
                "expanded destination {}x{} is too large",
                self.width, self.height
            ))
        })?;
        let mut buf = try_vec_with_capacity::<P>(len, "expanded destination")?;
        buf.resize(len, P::TRANSPARENT);
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/expand.rs"]
mod tests;
