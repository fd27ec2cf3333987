//! Raster-order error-diffusion sweep.

use log::{debug, trace};

use crate::buffer::GrayBuffer;
use crate::kernel::{Kernel, ATKINSON};
use crate::sample::{PixelSource, Sampler};
use crate::threshold::quantize;

/// Dithers a whole image to 0/255.
///
/// Pixels are visited strictly top-to-bottom, left-to-right: every pixel's
/// output depends on the error pushed into it by all earlier pixels, so the
/// sweep cannot be reordered or split across threads.
#[derive(Debug, Clone, Copy)]
pub struct DitherEngine {
    sampler: Sampler,
    kernel: Kernel,
}

impl Default for DitherEngine {
    fn default() -> Self {
        Self::atkinson()
    }
}

impl DitherEngine {
    /// Green-channel sampling with the Atkinson kernel.
    pub fn atkinson() -> Self {
        Self {
            sampler: Sampler::Green,
            kernel: ATKINSON,
        }
    }

    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn run<S: PixelSource>(&self, source: &S) -> GrayBuffer {
        let mut buffer = GrayBuffer::new(source.width(), source.height());
        self.run_into(source, &mut buffer);
        buffer
    }

    /// Sweeps `source` into `buffer`, treating existing cell values as error
    /// already carried in. Pixels outside the buffer are not visited.
    pub fn run_into<S: PixelSource>(&self, source: &S, buffer: &mut GrayBuffer) {
        let width = source.width().min(buffer.width());
        let height = source.height().min(buffer.height());
        debug!(
            "{} sweep over {}x{} ({:?} sampler)",
            self.kernel.name, width, height, self.sampler
        );

        for y in 0..height {
            for x in 0..width {
                let (cx, cy) = (x as i64, y as i64);
                let sample = self.sampler.sample(source.pixel_at(x, y));
                let carried = buffer.get(cx, cy).unwrap_or(0);
                let q = quantize(sample, carried);
                buffer.set(cx, cy, q.level);
                self.kernel.diffuse(buffer, cx, cy, q.residual);
            }
            trace!("row {} done", y);
        }
    }
}
