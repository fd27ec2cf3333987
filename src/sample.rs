//! Input pixels and the luminance samplers that reduce them to 8 bits.

use image::{ImageBuffer, Rgba};

/// One input pixel with 16-bit channels, color premultiplied by alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Channels {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Channels {
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b, a: u16::MAX }
    }

    /// Unweighted mean of the color channels at full 16-bit precision.
    pub fn average16(&self) -> u32 {
        (self.r as u32 + self.g as u32 + self.b as u32) / 3
    }
}

/// Anything the engine can read pixels from.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Caller guarantees `x < width()` and `y < height()`.
    fn pixel_at(&self, x: u32, y: u32) -> Channels;
}

/// 16-bit RGBA images store straight alpha; report it premultiplied.
impl PixelSource for ImageBuffer<Rgba<u16>, Vec<u16>> {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> Channels {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        let premultiply = |c: u16| (c as u32 * a as u32 / 0xffff) as u16;
        Channels {
            r: premultiply(r),
            g: premultiply(g),
            b: premultiply(b),
            a,
        }
    }
}

/// How a pixel is reduced to one 8-bit luminance sample.
///
/// The diffusing engine samples green only, while the averaging modes use the
/// mean of all three channels. Both are kept as-is so output stays
/// bit-compatible; pick [`Sampler::Average`] explicitly for a true mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampler {
    #[default]
    Green,
    Average,
}

impl Sampler {
    pub fn sample(self, px: Channels) -> u8 {
        match self {
            Sampler::Green => (px.g >> 8) as u8,
            Sampler::Average => (px.average16() >> 8) as u8,
        }
    }
}
