//! File collaborators around the core: decode, resample, encode.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;

use crate::buffer::GrayBuffer;
use crate::{MonoditherError, Result};

/// Opens and decodes `path`, sniffing the format from its content.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let open_err = |source| MonoditherError::Open {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;
    debug!("decoding {} as {:?}", path.display(), reader.format());
    reader.decode().map_err(|source| MonoditherError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Height that keeps the aspect ratio at `target_width`, rounded the way
/// the reference resampler does (`+ 0.7`, then truncate).
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scale = width as f64 / target_width as f64;
    ((0.7 + height as f64 / scale) as u32).max(1)
}

/// Resamples to `target_width`, aspect preserved. A zero width or an empty
/// image is returned untouched.
pub fn fit_width(image: &DynamicImage, target_width: u32, filter: FilterType) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if target_width == 0 || width == 0 || height == 0 {
        return image.clone();
    }
    let target_height = scaled_height(width, height, target_width);
    debug!(
        "resampling {}x{} -> {}x{} ({:?})",
        width, height, target_width, target_height, filter
    );
    image.resize_exact(target_width, target_height, filter)
}

/// Writes `buffer` as an 8-bit grayscale PNG, replacing any existing file.
pub fn write_png(buffer: GrayBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| MonoditherError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let encode_err = |source| MonoditherError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(file);
    buffer
        .into_gray_image()
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(encode_err)?;
    writer
        .flush()
        .map_err(|e| encode_err(image::ImageError::IoError(e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_height_matches_reference_rounding() {
        assert_eq!(scaled_height(1024, 768, 512), 384);
        assert_eq!(scaled_height(1000, 667, 512), 342); // 341.5 + 0.7
        assert_eq!(scaled_height(1000, 665, 512), 341); // 340.48 + 0.7
        assert_eq!(scaled_height(100, 50, 512), 256);
        assert_eq!(scaled_height(5000, 1, 512), 1);
    }

    #[test]
    fn fit_width_preserves_aspect() {
        let img = DynamicImage::new_rgb8(200, 100);
        let out = fit_width(&img, 64, FilterType::Triangle);
        assert_eq!((out.width(), out.height()), (64, 32));
    }

    #[test]
    fn fit_width_zero_is_a_no_op() {
        let img = DynamicImage::new_rgb8(7, 3);
        let out = fit_width(&img, 0, FilterType::Lanczos3);
        assert_eq!((out.width(), out.height()), (7, 3));
    }

    #[test]
    fn open_missing_file_reports_path() {
        let err = open_image("/nonexistent/monodither/input.jpg").unwrap_err();
        assert!(matches!(err, MonoditherError::Open { .. }));
        assert!(err.to_string().contains("input.jpg"));
    }
}
