//! multislicer renders a randomized "slice and shift" image effect.
//!
//! The image is cut into bands along a rotated axis. Band boundaries are jittered from a seed,
//! each band keeps a centred fraction of its width, and its content slides along the band by a
//! per-band random amount. Band edges are anti-aliased by a box-filter coverage blend.
//!
//! - Describe host buffers with [`ImageRef`] / [`ImageMut`] over [`Argb8`] or [`Argb16`] pixels
//! - Configure the effect with [`SliceParams`] (serde-friendly, clamped, never rejected)
//! - Optionally grow the destination with [`Expansion`] so shifted content is not clipped
//! - Call [`render`] or [`render_with`]
//!
//! Output depends only on the inputs: it is bit-identical across runs and thread counts.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod foundation;
mod params;
mod render;
mod slice;

pub use crate::buffer::pixel::{Argb8, Argb16, ChannelDepth, Pixel};
pub use crate::buffer::view::{ImageMut, ImageRef};
pub use crate::foundation::core::{PixelOffset, Point, Vec2};
pub use crate::foundation::error::{SlicerError, SlicerResult};
pub use crate::params::{AlphaMode, ResolvedParams, SampleMode, SliceParams};
pub use crate::render::expand::{Expansion, MAX_EXPANSION_MARGIN};
pub use crate::render::pipeline::{RenderPath, RenderStats, render, render_with};
pub use crate::render::scheduler::RenderThreading;
pub use crate::slice::divisions::{
    MAX_SLICES, anchored_axis_length, axis_length, division_points,
};
pub use crate::slice::random::rand01;
pub use crate::slice::segments::{SegmentTable, SliceSegment};
