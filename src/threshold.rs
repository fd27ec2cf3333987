//! Two-level quantization in 8-bit modular arithmetic.
//!
//! Every step wraps at 256 on purpose: the carried error is stored in the
//! same `u8` cells as the output, so a large negative share reads as a large
//! unsigned value and flips the top bit. Widening any intermediate changes
//! the output.

/// Result of thresholding one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantized {
    /// Sample plus everything diffused into the cell so far, modulo 256.
    pub accumulated: u8,
    /// Output level, 0 or 255.
    pub level: u8,
    /// `accumulated - level` read as a signed byte.
    pub residual: i8,
}

/// Thresholds `sample` on top of the error already `carried` in its cell.
pub fn quantize(sample: u8, carried: u8) -> Quantized {
    let accumulated = sample.wrapping_add(carried);
    let level = (accumulated >> 7).wrapping_mul(255);
    let residual = accumulated.wrapping_sub(level) as i8;
    Quantized {
        accumulated,
        level,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_sample_goes_black_with_positive_residual() {
        let q = quantize(100, 0);
        assert_eq!(q.accumulated, 100);
        assert_eq!(q.level, 0);
        assert_eq!(q.residual, 100);
    }

    #[test]
    fn bright_sample_goes_white_with_negative_residual() {
        let q = quantize(200, 0);
        assert_eq!(q.level, 255);
        assert_eq!(q.residual, -55);
    }

    #[test]
    fn midpoint_is_white() {
        assert_eq!(quantize(127, 0).level, 0);
        assert_eq!(quantize(128, 0).level, 255);
        assert_eq!(quantize(128, 0).residual, -127);
        assert_eq!(quantize(255, 0).residual, 0);
    }

    #[test]
    fn carried_error_wraps_before_thresholding() {
        // 200 + 100 = 300 -> 44, which is black
        let q = quantize(200, 100);
        assert_eq!(q.accumulated, 44);
        assert_eq!(q.level, 0);
        assert_eq!(q.residual, 44);

        // a "negative" carry of 249 (-7) pulls 130 below the midpoint
        let q = quantize(130, 249);
        assert_eq!(q.accumulated, 123);
        assert_eq!(q.level, 0);
    }

    #[test]
    fn output_is_always_binary() {
        for sample in 0..=255u8 {
            for carried in [0u8, 1, 12, 127, 128, 249, 255] {
                let q = quantize(sample, carried);
                assert!(q.level == 0 || q.level == 255);
            }
        }
    }
}
