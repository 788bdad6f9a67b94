//! Host-facing effect parameters and their resolution into render-ready values.

use crate::foundation::core::Point;
use crate::foundation::math::finite_or;
use crate::slice::divisions::MAX_SLICES;

/// How the source is read at fractional coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// Round to the nearest pixel. Keeps colours exact at hard edges.
    Nearest,
    /// 4-tap weighted average. Smooth sub-pixel motion.
    #[default]
    Bilinear,
}

/// How the per-segment alpha contributions of a pixel are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// Sum of `alpha * coverage`, clamped to the channel max. Visible-range edges fade out over
    /// the feather width.
    #[default]
    Coverage,
    /// Sum of `alpha * coverage` divided by the summed coverage. Blends between neighbouring
    /// slices but cuts off hard against gaps.
    Normalized,
}

/// Effect parameters as delivered by the host (or a JSON parameter file).
///
/// Values are taken as-is; [`SliceParams::resolve`] clamps them into their valid ranges.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SliceParams {
    /// Slice angle in degrees, any sign. 0 gives horizontal bands shifted horizontally.
    pub angle_deg: f64,
    /// Signed shift magnitude in pixels.
    pub shift: f64,
    /// Fraction of each slice that stays visible, `0..=1`.
    pub width_fraction: f64,
    /// Number of slices, `1..=1000`.
    pub slice_count: i64,
    /// Layout and shift seed.
    pub seed: i32,
    /// Rotation anchor in source pixel space; `None` uses the image centre.
    pub anchor: Option<Point>,
    /// Downsample compensation factor applied to the shift (`> 0`).
    pub resolution_scale: f64,
    /// Source sampling mode.
    pub sample_mode: SampleMode,
    /// Alpha combination policy at slice boundaries.
    pub alpha_mode: AlphaMode,
    /// Paint white guide lines on the division points.
    pub guides: bool,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            shift: 0.0,
            width_fraction: 1.0,
            slice_count: 10,
            seed: 1234,
            anchor: None,
            resolution_scale: 1.0,
            sample_mode: SampleMode::default(),
            alpha_mode: AlphaMode::default(),
            guides: false,
        }
    }
}

/// Parameters after clamping and non-finite substitution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedParams {
    /// Angle in radians, finite.
    pub angle_rad: f64,
    /// Shift magnitude in pixels, already multiplied by the resolution scale, `>= 0`.
    pub shift_magnitude: f64,
    /// `+1.0` or `-1.0`.
    pub shift_sign: f64,
    /// Visible fraction in `[0, 1]`.
    pub width_fraction: f64,
    /// Slice count in `[1, 1000]`.
    pub slice_count: usize,
    /// Seed.
    pub seed: i32,
    /// Rotation anchor in source pixel space, finite.
    pub anchor: Point,
    /// Resolution scale, finite and `> 0`.
    pub resolution_scale: f64,
    /// Sampling mode.
    pub sample_mode: SampleMode,
    /// Alpha policy.
    pub alpha_mode: AlphaMode,
    /// Guide overlay flag.
    pub guides: bool,
}

impl SliceParams {
    /// Clamp every parameter into its supported range for a `width x height` source.
    ///
    /// Never fails: out-of-range values are clamped, non-finite values replaced by a neutral
    /// default (no rotation, no shift, full width, unit scale, centred anchor). Each substitution
    /// is logged at `warn` level.
    pub fn resolve(&self, width: u32, height: u32) -> ResolvedParams {
        let centre = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);

        let angle_deg = checked("angle_deg", self.angle_deg, 0.0);
        let shift = checked("shift", self.shift, 0.0);

        let mut width_fraction = checked("width_fraction", self.width_fraction, 1.0);
        if !(0.0..=1.0).contains(&width_fraction) {
            tracing::warn!(width_fraction, "width_fraction clamped into [0, 1]");
            width_fraction = width_fraction.clamp(0.0, 1.0);
        }

        let max = MAX_SLICES as i64;
        let slice_count = if (1..=max).contains(&self.slice_count) {
            self.slice_count as usize
        } else {
            tracing::warn!(
                slice_count = self.slice_count,
                "slice_count clamped into [1, {max}]"
            );
            self.slice_count.clamp(1, max) as usize
        };

        let mut resolution_scale = checked("resolution_scale", self.resolution_scale, 1.0);
        if resolution_scale <= 0.0 {
            tracing::warn!(resolution_scale, "non-positive resolution_scale replaced by 1");
            resolution_scale = 1.0;
        }

        let anchor = match self.anchor {
            Some(p) if p.is_finite() => p,
            Some(p) => {
                tracing::warn!(x = p.x, y = p.y, "non-finite anchor replaced by image centre");
                centre
            }
            None => centre,
        };

        let angle_rad = finite_or(angle_deg.to_radians(), 0.0);
        let shift_magnitude = finite_or(shift.abs() * resolution_scale, 0.0);

        ResolvedParams {
            angle_rad,
            shift_magnitude,
            shift_sign: if shift < 0.0 { -1.0 } else { 1.0 },
            width_fraction,
            slice_count,
            seed: self.seed,
            anchor,
            resolution_scale,
            sample_mode: self.sample_mode,
            alpha_mode: self.alpha_mode,
            guides: self.guides,
        }
    }
}

fn checked(name: &'static str, v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        tracing::warn!(param = name, value = %v, fallback, "non-finite parameter replaced");
        fallback
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
