use crate::buffer::pixel::Pixel;
use crate::buffer::view::ImageRef;
use crate::params::SampleMode;

/// `[alpha, red, green, blue]`, straight alpha, channel units.
pub(crate) type Argb = [f32; 4];

pub(crate) const TRANSPARENT: Argb = [0.0; 4];

/// Read `src` at buffer coordinate `(x, y)`.
///
/// Coordinates outside the image give a fully transparent sample; nothing outside the buffer
/// is ever read.
#[inline]
pub(crate) fn sample<P: Pixel>(src: &ImageRef<'_, P>, mode: SampleMode, x: f64, y: f64) -> Argb {
    match mode {
        SampleMode::Nearest => sample_nearest(src, x, y),
        SampleMode::Bilinear => sample_bilinear(src, x, y),
    }
}

fn sample_nearest<P: Pixel>(src: &ImageRef<'_, P>, x: f64, y: f64) -> Argb {
    if !(x.is_finite() && y.is_finite()) {
        return TRANSPARENT;
    }
    src.get(x.round() as i64, y.round() as i64)
        .map_or(TRANSPARENT, Pixel::to_argb)
}

/// Alpha-weighted bilinear filter.
///
/// Colour is interpolated premultiplied and divided back out, so transparent taps (whose colour
/// is meaningless) never darken the result. Taps outside the image count as transparent.
fn sample_bilinear<P: Pixel>(src: &ImageRef<'_, P>, x: f64, y: f64) -> Argb {
    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    if !(x > -1.0 && x < w && y > -1.0 && y < h) {
        return TRANSPARENT;
    }

    let (x0, y0) = (x.floor(), y.floor());
    let (fx, fy) = ((x - x0) as f32, (y - y0) as f32);
    let (ix, iy) = (x0 as i64, y0 as i64);
    if fx == 0.0 && fy == 0.0 {
        return src.get(ix, iy).map_or(TRANSPARENT, Pixel::to_argb);
    }

    let taps = [
        (ix, iy, (1.0 - fx) * (1.0 - fy)),
        (ix + 1, iy, fx * (1.0 - fy)),
        (ix, iy + 1, (1.0 - fx) * fy),
        (ix + 1, iy + 1, fx * fy),
    ];

    let mut alpha = 0.0f32;
    let mut premul = [0.0f32; 3];
    for (tx, ty, weight) in taps {
        if weight <= 0.0 {
            continue;
        }
        let Some(px) = src.get(tx, ty) else {
            continue;
        };
        let [a, r, g, b] = px.to_argb();
        let aw = a * weight;
        alpha += aw;
        premul[0] += r * aw;
        premul[1] += g * aw;
        premul[2] += b * aw;
    }

    if alpha <= 0.0 {
        return TRANSPARENT;
    }
    [
        alpha,
        premul[0] / alpha,
        premul[1] / alpha,
        premul[2] / alpha,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/sampler.rs"]
mod tests;
