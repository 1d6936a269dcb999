use image::RgbaImage;

use crate::error::{VeilError, VeilResult};

// Bitmap
//------------------------------------------------------------------------------

/// An owned RGBA image buffer, row-major with origin at the top left.
///
/// Construction validates that both dimensions are nonzero and that the
/// buffer holds exactly `width * height` four-byte pixels, so every `Bitmap`
/// in circulation is well formed. Transforms never mutate a `Bitmap` in
/// place; they allocate a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> VeilResult<Self> {
        if width == 0 || height == 0 {
            return Err(VeilError::EmptyCarrier);
        }
        if data.len() != (width as usize) * (height as usize) * 4 {
            return Err(VeilError::BufferSizeMismatch);
        }
        Ok(Self { width, height, data })
    }

    pub fn from_image(img: RgbaImage) -> VeilResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y).
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) as usize) * 4
    }

    /// RGBA bytes of pixel (x, y). Callers stay within bounds; the slice
    /// index would panic otherwise.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let off = self.offset(x, y);
        [self.data[off], self.data[off + 1], self.data[off + 2], self.data[off + 3]]
    }

    pub fn into_image(self) -> RgbaImage {
        // The length invariant makes from_raw infallible here.
        RgbaImage::from_raw(self.width, self.height, self.data)
            .unwrap_or_else(|| unreachable!("bitmap invariant violated"))
    }
}
