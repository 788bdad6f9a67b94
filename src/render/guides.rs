use crate::buffer::pixel::Pixel;

/// Pixels at or below this fraction of full alpha are left untouched by guide painting.
pub(crate) const GUIDE_ALPHA_THRESHOLD: f32 = 5.0 / 255.0;

/// Whether `axis` lies within `half` of an interior division point.
///
/// `divisions` is the full ordered boundary list; the two outer end points never draw a guide.
pub(crate) fn on_division(divisions: &[f64], axis: f64, half: f64) -> bool {
    if divisions.len() < 3 || !axis.is_finite() {
        return false;
    }
    let interior = &divisions[1..divisions.len() - 1];
    let i = interior.partition_point(|&p| p < axis);
    let near = |j: usize| interior.get(j).is_some_and(|&p| (axis - p).abs() <= half);
    near(i) || (i > 0 && near(i - 1))
}

/// Replace a visible pixel with opaque white.
pub(crate) fn paint_guide<P: Pixel>(px: P) -> P {
    if px.alpha() > GUIDE_ALPHA_THRESHOLD * P::MAX {
        P::from_argb([P::MAX; 4])
    } else {
        px
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/guides.rs"]
mod tests;
