//! Owned 8-bit gray canvas the dithering sweep writes into.

/// A `width × height` grid of 8-bit gray values, stored row-major.
///
/// Coordinates are signed so diffusion taps with negative offsets can be
/// expressed directly. Reads and writes outside `[0, width) × [0, height)`
/// are ignored rather than treated as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl GrayBuffer {
    /// Zero-filled (black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Stores `value` at `(x, y)`. Returns `false` when the write was dropped.
    pub fn set(&mut self, x: i64, y: i64, value: u8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Adds `delta` modulo 256. Returns `false` when the target was out of bounds.
    pub fn wrapping_add(&mut self, x: i64, y: i64, delta: u8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = self.cells[idx].wrapping_add(delta);
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.cells
    }

    /// Hands the cells to `image` without copying.
    pub fn into_gray_image(self) -> image::GrayImage {
        image::GrayImage::from_raw(self.width, self.height, self.cells)
            .expect("cells sized to width * height")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = GrayBuffer::new(4, 3);
        assert_eq!(buf.dimensions(), (4, 3));
        assert_eq!(buf.as_slice().len(), 12);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut buf = GrayBuffer::new(3, 2);
        assert!(buf.set(2, 1, 77));
        assert_eq!(buf.get(2, 1), Some(77));
        assert_eq!(buf.as_slice()[5], 77);
    }

    #[test]
    fn out_of_range_access_is_dropped() {
        let mut buf = GrayBuffer::new(2, 2);
        assert!(!buf.set(-1, 0, 9));
        assert!(!buf.set(2, 0, 9));
        assert!(!buf.set(0, 2, 9));
        assert!(!buf.wrapping_add(0, -1, 9));
        assert_eq!(buf.get(5, 5), None);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn wrapping_add_wraps_modulo_256() {
        let mut buf = GrayBuffer::new(1, 1);
        buf.set(0, 0, 250);
        buf.wrapping_add(0, 0, 10);
        assert_eq!(buf.get(0, 0), Some(4));
    }

    #[test]
    fn into_gray_image_keeps_layout() {
        let mut buf = GrayBuffer::new(2, 2);
        buf.set(1, 0, 255);
        let img = buf.into_gray_image();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0).0[0], 255);
        assert_eq!(img.get_pixel(0, 1).0[0], 0);
    }

    #[test]
    fn into_gray_image_carries_every_cell() {
        let mut buf = GrayBuffer::new(5, 3);
        for y in 0..3 {
            for x in 0..5 {
                buf.set(x, y, (y * 5 + x) as u8 * 17);
            }
        }
        let expected = buf.as_slice().to_vec();
        assert_eq!(buf.into_gray_image().into_raw(), expected);

        let empty = GrayBuffer::new(0, 0).into_gray_image();
        assert_eq!(empty.dimensions(), (0, 0));
    }
}
