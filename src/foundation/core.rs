pub use kurbo::{Point, Vec2};

/// Integer pixel offset of a buffer origin relative to source pixel space.
///
/// An expanded destination stores source pixel `(0, 0)` at `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelOffset {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl PixelOffset {
    /// No offset.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create an offset.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same offset on both axes.
    pub const fn uniform(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Convert to a floating-point vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
