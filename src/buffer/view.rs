use crate::buffer::pixel::Pixel;
use crate::foundation::core::PixelOffset;
use crate::foundation::error::{SlicerError, SlicerResult};

/// Number of elements a `width x height` image with `stride` elements per row occupies.
///
/// The last row only needs `width` elements, so hosts may hand over buffers without trailing
/// row padding.
pub(crate) fn required_len(width: u32, height: u32, stride: usize) -> SlicerResult<usize> {
    if width == 0 || height == 0 {
        return Ok(0);
    }
    if stride < width as usize {
        return Err(SlicerError::validation(format!(
            "row stride {stride} is smaller than width {width}"
        )));
    }
    stride
        .checked_mul(height as usize - 1)
        .and_then(|v| v.checked_add(width as usize))
        .ok_or_else(|| SlicerError::validation("image buffer size overflow"))
}

/// Read-only, bounds-checked view of a host source buffer.
///
/// Rows are `stride` pixels apart. `origin` is the source-space position of pixel `(0, 0)`.
#[derive(Clone, Copy, Debug)]
pub struct ImageRef<'a, P> {
    data: &'a [P],
    width: u32,
    height: u32,
    stride: usize,
    origin: PixelOffset,
}

impl<'a, P: Pixel> ImageRef<'a, P> {
    /// Wrap `data` as a `width x height` image with `stride` pixels per row.
    pub fn new(data: &'a [P], width: u32, height: u32, stride: usize) -> SlicerResult<Self> {
        let need = required_len(width, height, stride)?;
        if data.len() < need {
            return Err(SlicerError::validation(format!(
                "source buffer holds {} pixels, {width}x{height} with stride {stride} needs {need}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            origin: PixelOffset::ZERO,
        })
    }

    /// Wrap tightly packed rows (`stride == width`).
    pub fn packed(data: &'a [P], width: u32, height: u32) -> SlicerResult<Self> {
        Self::new(data, width, height, width as usize)
    }

    /// Place pixel `(0, 0)` at `origin` in source space.
    pub fn with_origin(mut self, origin: PixelOffset) -> Self {
        self.origin = origin;
        self
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Source-space position of pixel `(0, 0)`.
    pub fn origin(&self) -> PixelOffset {
        self.origin
    }

    /// `true` when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at buffer coordinate `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<P> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        self.data.get(y as usize * self.stride + x as usize).copied()
    }

    /// The `width` pixels of row `y`.
    pub fn row(&self, y: u32) -> Option<&'a [P]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        self.data.get(start..start + self.width as usize)
    }
}

/// Writable, bounds-checked view of a host destination buffer.
///
/// `origin_offset` is where source pixel `(0, 0)` lands in this buffer; hosts that pre-expand the
/// destination (see [`crate::Expansion`]) set it to the expansion margin.
#[derive(Debug)]
pub struct ImageMut<'a, P> {
    data: &'a mut [P],
    width: u32,
    height: u32,
    stride: usize,
    origin_offset: PixelOffset,
}

impl<'a, P: Pixel> ImageMut<'a, P> {
    /// Wrap `data` as a `width x height` image with `stride` pixels per row.
    pub fn new(data: &'a mut [P], width: u32, height: u32, stride: usize) -> SlicerResult<Self> {
        let need = required_len(width, height, stride)?;
        if data.len() < need {
            return Err(SlicerError::validation(format!(
                "destination buffer holds {} pixels, {width}x{height} with stride {stride} needs {need}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            origin_offset: PixelOffset::ZERO,
        })
    }

    /// Wrap tightly packed rows (`stride == width`).
    pub fn packed(data: &'a mut [P], width: u32, height: u32) -> SlicerResult<Self> {
        Self::new(data, width, height, width as usize)
    }

    /// Record where source pixel `(0, 0)` lives in this buffer.
    pub fn with_origin_offset(mut self, offset: PixelOffset) -> Self {
        self.origin_offset = offset;
        self
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Position of source pixel `(0, 0)` in this buffer.
    pub fn origin_offset(&self) -> PixelOffset {
        self.origin_offset
    }

    /// `true` when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: i64, y: i64) -> Option<P> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        self.data.get(y as usize * self.stride + x as usize).copied()
    }

    /// Write `px` at `(x, y)`. Returns `false` (and writes nothing) outside the image.
    pub fn put(&mut self, x: i64, y: i64, px: P) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        match self.data.get_mut(y as usize * self.stride + x as usize) {
            Some(slot) => {
                *slot = px;
                true
            }
            None => false,
        }
    }

    /// Set every pixel inside the image to `px`. Stride padding is left untouched.
    pub fn fill(&mut self, px: P) {
        for row in self.rows_mut() {
            row.fill(px);
        }
    }

    /// Read-only view of the same pixels.
    pub fn as_ref(&self) -> ImageRef<'_, P> {
        ImageRef {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
            origin: PixelOffset::ZERO,
        }
    }

    /// Backing memory trimmed to exactly the rows of this image.
    pub(crate) fn rows_region_mut(&mut self) -> &mut [P] {
        let len = required_len(self.width, self.height, self.stride).unwrap_or(0);
        &mut self.data[..len]
    }

    fn rows_mut(&mut self) -> impl Iterator<Item = &mut [P]> {
        let (width, stride) = (self.width as usize, self.stride.max(1));
        self.rows_region_mut()
            .chunks_mut(stride)
            .map(move |row| &mut row[..width])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/view.rs"]
mod tests;
