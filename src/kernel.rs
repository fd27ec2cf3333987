//! Error-diffusion kernels as static tap tables.

use crate::buffer::GrayBuffer;

/// One neighbor that receives part of the quantization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub dx: i32,
    pub dy: i32,
    pub weight: i16,
}

const fn tap(dx: i32, dy: i32) -> Tap {
    Tap { dx, dy, weight: 1 }
}

/// Each tap receives `(residual * weight) >> shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    pub name: &'static str,
    pub taps: &'static [Tap],
    pub shift: u32,
}

/// Six taps at 1/8 each: only 3/4 of the error is passed on.
pub const ATKINSON: Kernel = Kernel {
    name: "atkinson",
    taps: &[tap(1, 0), tap(0, 1), tap(1, 1), tap(2, 0), tap(0, 2), tap(-1, 1)],
    shift: 3,
};

impl Kernel {
    /// Share of `residual` for `tap`, re-encoded as an unsigned byte.
    pub fn share(&self, residual: i8, tap: &Tap) -> u8 {
        ((residual as i16 * tap.weight) >> self.shift) as u8
    }

    /// Adds each tap's share around `(x, y)`, skipping cells outside the buffer.
    /// Returns how many taps landed.
    pub fn diffuse(&self, buffer: &mut GrayBuffer, x: i64, y: i64, residual: i8) -> usize {
        let mut landed = 0;
        for tap in self.taps {
            let share = self.share(residual, tap);
            if buffer.wrapping_add(x + tap.dx as i64, y + tap.dy as i64, share) {
                landed += 1;
            }
        }
        landed
    }
}
