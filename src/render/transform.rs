use crate::foundation::core::{Point, Vec2};

/// Rotated coordinate frame of the slicing axis, pivoting on an anchor point.
///
/// In axis space `x` runs along the bands (the shift direction) and `y` is the slicing-axis
/// coordinate that the division points are laid out on. At angle 0 the bands are horizontal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AxisFrame {
    anchor: Point,
    cos: f64,
    sin: f64,
}

impl AxisFrame {
    /// A non-finite angle gives the identity rotation.
    pub(crate) fn new(anchor: Point, angle_rad: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        let (sin, cos) = if sin.is_finite() && cos.is_finite() {
            (sin, cos)
        } else {
            (0.0, 1.0)
        };
        Self { anchor, cos, sin }
    }

    /// Rotate `p` about the anchor by `-angle`.
    #[inline]
    pub(crate) fn to_axis(&self, p: Point) -> Vec2 {
        let d = p - self.anchor;
        Vec2::new(d.x * self.cos + d.y * self.sin, d.y * self.cos - d.x * self.sin)
    }

    /// Rotate a vector by `+angle`.
    #[inline]
    pub(crate) fn rotate(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.cos - v.y * self.sin, v.x * self.sin + v.y * self.cos)
    }

    /// Unit vector of the shift direction in image space.
    pub(crate) fn shift_direction(&self) -> Vec2 {
        self.rotate(Vec2::new(1.0, 0.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/transform.rs"]
mod tests;
