//! RGBA bitmap primitive shared by the pixel comparator and the composite renderer.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An uncompressed RGBA8 image, row-major with a top-left origin.
///
/// The buffer always holds exactly `width * height * 4` bytes. A bitmap is
/// never mutated after construction; crops and composites allocate new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap an existing RGBA buffer, checking the length invariant.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height);
        if data.len() != expected {
            return Err(Error::BitmapError(format!(
                "{}x{} bitmap needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Wrap a buffer already known to be `width * height * 4` bytes long.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), buffer_len(width, height));
        Self { width, height, data }
    }

    /// A bitmap where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(buffer_len(width, height))
            .collect();
        Self { width, height, data }
    }

    /// Build a bitmap by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(buffer_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// RGBA value at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy the top-left `width x height` region into a new bitmap.
    ///
    /// Pixels that fall outside the source become opaque black.
    pub fn crop(&self, width: u32, height: u32) -> Bitmap {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let mut data = Vec::with_capacity(buffer_len(width, height));
        for y in 0..height {
            if y < self.height && width <= self.width {
                let start = self.offset(0, y);
                data.extend_from_slice(&self.data[start..start + width as usize * CHANNELS]);
                continue;
            }
            for x in 0..width {
                data.extend_from_slice(&self.pixel(x, y).unwrap_or([0, 0, 0, 255]));
            }
        }
        Bitmap { width, height, data }
    }

    /// Hex SHA-256 over the dimensions and pixel bytes.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.data);
        hex::encode(hasher.finalize())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_buffer_length() {
        let err = Bitmap::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, Error::BitmapError(_)));
        assert!(Bitmap::new(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn from_fn_is_row_major() {
        let bmp = Bitmap::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(bmp.pixel(2, 1), Some([2, 1, 0, 255]));
        assert_eq!(&bmp.data()[4..8], &[1, 0, 0, 255]);
        assert_eq!(bmp.pixel(3, 0), None);
    }

    #[test]
    fn crop_keeps_top_left_region() {
        let bmp = Bitmap::from_fn(4, 4, |x, y| [x as u8, y as u8, 7, 255]);
        let cropped = bmp.crop(2, 3);
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 3);
        assert_eq!(cropped.data().len(), 2 * 3 * 4);
        assert_eq!(cropped.pixel(1, 2), Some([1, 2, 7, 255]));
        // source untouched
        assert_eq!(bmp.width(), 4);
    }

    #[test]
    fn crop_beyond_source_fills_opaque_black() {
        let bmp = Bitmap::filled(1, 1, [9, 9, 9, 9]);
        let grown = bmp.crop(2, 2);
        assert_eq!(grown.pixel(0, 0), Some([9, 9, 9, 9]));
        assert_eq!(grown.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn digest_depends_on_dimensions() {
        let a = Bitmap::filled(2, 1, [1, 2, 3, 4]);
        let b = Bitmap::filled(1, 2, [1, 2, 3, 4]);
        assert_eq!(a.data(), b.data());
        assert_ne!(a.digest(), b.digest());
        assert_eq!(a.digest(), a.clone().digest());
    }
}
