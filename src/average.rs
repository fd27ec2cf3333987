//! Non-diffusing conversions, kept for comparison with the dithered output.

use crate::buffer::GrayBuffer;
use crate::sample::{Channels, PixelSource, Sampler};

/// Plain grayscale: each cell is the 8-bit mean of the color channels.
pub fn average_mono<S: PixelSource>(source: &S) -> GrayBuffer {
    map_pixels(source, |px| Sampler::Average.sample(px))
}

/// Hard 50% threshold on the 16-bit channel mean. No error is carried.
pub fn average_threshold<S: PixelSource>(source: &S) -> GrayBuffer {
    map_pixels(source, |px| ((px.average16() >> 15) as u8).wrapping_mul(255))
}

fn map_pixels<S, F>(source: &S, f: F) -> GrayBuffer
where
    S: PixelSource,
    F: Fn(Channels) -> u8,
{
    let mut buffer = GrayBuffer::new(source.width(), source.height());
    for y in 0..source.height() {
        for x in 0..source.width() {
            buffer.set(x as i64, y as i64, f(source.pixel_at(x, y)));
        }
    }
    buffer
}
