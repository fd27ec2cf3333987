//! Two-level Atkinson dithering for 1-bit displays.

pub mod average;
pub mod buffer;
pub mod engine;
pub mod io;
pub mod kernel;
pub mod sample;
pub mod threshold;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use buffer::GrayBuffer;
pub use engine::DitherEngine;
pub use sample::{Channels, PixelSource, Sampler};

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonoditherError {
    #[error("Failed to open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode input file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to open file for output {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output file {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Pixel data of length {len} does not fit {width}x{height}")]
    InvalidDimensions { width: u32, height: u32, len: usize },
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, MonoditherError>;

/// Target width of the reference pipeline.
pub const DEFAULT_WIDTH: u32 = 512;

/// Which conversion produces the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Error diffusion with the Atkinson kernel.
    #[default]
    Atkinson,
    /// Grayscale by channel mean, no dithering.
    AverageMono,
    /// Channel mean against a fixed midpoint, no diffusion.
    AverageThreshold,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Atkinson => "atkinson",
            Mode::AverageMono => "average-mono",
            Mode::AverageThreshold => "average-threshold",
        }
    }

    pub fn apply<S: PixelSource>(self, source: &S) -> GrayBuffer {
        match self {
            Mode::Atkinson => DitherEngine::atkinson().run(source),
            Mode::AverageMono => average::average_mono(source),
            Mode::AverageThreshold => average::average_threshold(source),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = MonoditherError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "atkinson" => Ok(Mode::Atkinson),
            "average-mono" => Ok(Mode::AverageMono),
            "average-threshold" => Ok(Mode::AverageThreshold),
            _ => Err(MonoditherError::UnknownMode(s.to_string())),
        }
    }
}

/// Decode → resample → convert → encode.
#[derive(Debug, Clone)]
pub struct Ditherer {
    width: Option<u32>,
    filter: FilterType,
    mode: Mode,
}

impl Default for Ditherer {
    fn default() -> Self {
        Self::new()
    }
}

impl Ditherer {
    pub fn new() -> Self {
        Self {
            width: Some(DEFAULT_WIDTH),
            filter: FilterType::Lanczos3,
            mode: Mode::Atkinson,
        }
    }

    /// `None` keeps the source resolution.
    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn process(&self, image: &DynamicImage) -> GrayBuffer {
        let resized;
        let image = match self.width {
            Some(width) => {
                resized = io::fit_width(image, width, self.filter);
                &resized
            }
            None => image,
        };
        let source = image.to_rgba16();
        self.mode.apply(&source)
    }

    /// Runs the whole pipeline. Nothing is written unless every earlier step
    /// succeeded.
    pub fn convert_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let image = io::open_image(input)?;
        info!(
            "loaded {} ({}x{})",
            input.display(),
            image.width(),
            image.height()
        );

        let buffer = self.process(&image);
        let white = buffer.as_slice().iter().filter(|&&v| v == u8::MAX).count();
        info!(
            "{} produced {}x{}, {} of {} pixels white",
            self.mode.name(),
            buffer.width(),
            buffer.height(),
            white,
            buffer.as_slice().len()
        );

        io::write_png(buffer, output)?;
        info!("wrote {}", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn mode_names_round_trip_through_from_str() {
        for mode in [Mode::Atkinson, Mode::AverageMono, Mode::AverageThreshold] {
            assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
        }
        assert!(matches!(
            "floyd".parse::<Mode>(),
            Err(MonoditherError::UnknownMode(_))
        ));
    }

    #[test]
    fn process_resamples_to_default_width() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1024, 256, Rgb([90, 90, 90])));
        let out = Ditherer::new().process(&img);
        assert_eq!(out.dimensions(), (512, 128));
        assert!(out.as_slice().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn process_without_width_keeps_resolution() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(9, 4, Rgb([200, 200, 200])));
        let out = Ditherer::new()
            .with_width(None)
            .with_mode(Mode::AverageMono)
            .process(&img);
        assert_eq!(out.dimensions(), (9, 4));
        assert!(out.as_slice().iter().all(|&v| v == 200));
    }

    #[test]
    fn eight_bit_sources_scale_like_16_bit_channels() {
        // 100 -> 100 * 257 = 0x6464, green >> 8 = 100
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0, 100, 0])));
        let out = Ditherer::new().with_width(None).process(&img);
        assert_eq!(out.as_slice(), &[0]);
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0, 200, 0])));
        let out = Ditherer::new().with_width(None).process(&img);
        assert_eq!(out.as_slice(), &[255]);
    }
}
