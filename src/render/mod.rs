//! Per-pixel slice rendering: geometry, sampling, compositing and row scheduling.

pub(crate) mod compositor;
pub(crate) mod context;
/// Destination expansion pre-pass for off-canvas shifted content.
pub mod expand;
pub(crate) mod guides;
/// Render entry points.
pub mod pipeline;
pub(crate) mod sampler;
/// Row scheduling across worker threads.
pub mod scheduler;
pub(crate) mod transform;
