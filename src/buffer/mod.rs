//! Pixel formats and bounds-checked image views.

/// ARGB pixel types (8- and 16-bit channels).
pub mod pixel;
/// Borrowed 2-D views over host pixel memory.
pub mod view;
