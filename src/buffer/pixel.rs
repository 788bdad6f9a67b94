use crate::foundation::math::rescale_channel;

/// Channel bit depth of a pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelDepth {
    /// 8 bits per channel, channel max 255.
    Eight,
    /// 16 bits per channel, channel max 32768 (deep-colour host convention).
    Sixteen,
}

impl ChannelDepth {
    /// Bits per channel.
    pub fn bits(self) -> u32 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Largest channel value (fully opaque alpha).
    pub fn max_value(self) -> u32 {
        match self {
            Self::Eight => 255,
            Self::Sixteen => 32768,
        }
    }
}

/// A 4-channel straight-alpha pixel stored as alpha, red, green, blue.
///
/// Channel math inside the compositor is done in `f32` channel units (`0.0..=MAX`), so every
/// depth goes through the same code path.
pub trait Pixel: Copy + Default + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    /// Channel depth of this pixel type.
    const DEPTH: ChannelDepth;
    /// Largest channel value as `f32`.
    const MAX: f32;
    /// All channels zero.
    const TRANSPARENT: Self;

    /// Alpha in channel units.
    fn alpha(self) -> f32;

    /// `[alpha, red, green, blue]` in channel units.
    fn to_argb(self) -> [f32; 4];

    /// Build a pixel from channel units, rounding to nearest and clamping to `0..=MAX`.
    fn from_argb(c: [f32; 4]) -> Self;
}

/// 8-bit ARGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb8 {
    /// Alpha channel.
    pub alpha: u8,
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Argb8 {
    /// Create a pixel from its channels.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Convert from straight RGBA8 (the `image` crate channel order).
    pub fn from_rgba(px: [u8; 4]) -> Self {
        Self::new(px[3], px[0], px[1], px[2])
    }

    /// Convert to straight RGBA8.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl Pixel for Argb8 {
    const DEPTH: ChannelDepth = ChannelDepth::Eight;
    const MAX: f32 = 255.0;
    const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    fn alpha(self) -> f32 {
        f32::from(self.alpha)
    }

    #[inline]
    fn to_argb(self) -> [f32; 4] {
        [
            f32::from(self.alpha),
            f32::from(self.red),
            f32::from(self.green),
            f32::from(self.blue),
        ]
    }

    #[inline]
    fn from_argb(c: [f32; 4]) -> Self {
        let q = |v: f32| v.round().clamp(0.0, Self::MAX) as u8;
        Self::new(q(c[0]), q(c[1]), q(c[2]), q(c[3]))
    }
}

/// 16-bit ARGB pixel with channel max 32768.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb16 {
    /// Alpha channel.
    pub alpha: u16,
    /// Red channel.
    pub red: u16,
    /// Green channel.
    pub green: u16,
    /// Blue channel.
    pub blue: u16,
}

impl Argb16 {
    /// Create a pixel from its channels.
    pub const fn new(alpha: u16, red: u16, green: u16, blue: u16) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Widen a straight RGBA8 pixel.
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        let w = |v: u8| rescale_channel(u32::from(v), 255, 32768) as u16;
        Self::new(w(px[3]), w(px[0]), w(px[1]), w(px[2]))
    }

    /// Narrow to straight RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        let n = |v: u16| rescale_channel(u32::from(v), 32768, 255) as u8;
        [n(self.red), n(self.green), n(self.blue), n(self.alpha)]
    }
}

impl Pixel for Argb16 {
    const DEPTH: ChannelDepth = ChannelDepth::Sixteen;
    const MAX: f32 = 32768.0;
    const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    fn alpha(self) -> f32 {
        f32::from(self.alpha)
    }

    #[inline]
    fn to_argb(self) -> [f32; 4] {
        [
            f32::from(self.alpha),
            f32::from(self.red),
            f32::from(self.green),
            f32::from(self.blue),
        ]
    }

    #[inline]
    fn from_argb(c: [f32; 4]) -> Self {
        let q = |v: f32| v.round().clamp(0.0, Self::MAX) as u16;
        Self::new(q(c[0]), q(c[1]), q(c[2]), q(c[3]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel.rs"]
mod tests;
