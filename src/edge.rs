use crate::bitmap::Bitmap;
use crate::color::luma;

// Edge detection
//------------------------------------------------------------------------------
//
// Sobel gradient magnitude over the grayscale-reduced carrier. High scores
// mark busy texture where a luminance nudge hides; flat regions (sky, skin,
// walls) must never be touched, so the embedding gates every write on this
// score. Pixels inside the border margin always score 0.

/// Margin of pixels along every image edge that is never scored or modified.
pub const BORDER_MARGIN: u32 = 2;

/// Gradient magnitudes for every pixel of a carrier, same dimensions,
/// row-major. Computed once per request against the untouched input so the
/// gating decision for one pixel can never be influenced by the modulation
/// of another.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    width: u32,
    height: u32,
    magnitudes: Vec<f32>,
}

impl EdgeMap {
    pub fn of(carrier: &Bitmap) -> Self {
        let (w, h) = (carrier.width(), carrier.height());
        let gray: Vec<f32> = carrier
            .data()
            .chunks_exact(4)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect();

        let mut magnitudes = vec![0.0f32; (w as usize) * (h as usize)];
        for y in BORDER_MARGIN..h.saturating_sub(BORDER_MARGIN) {
            for x in BORDER_MARGIN..w.saturating_sub(BORDER_MARGIN) {
                magnitudes[(y * w + x) as usize] = sobel_at(&gray, x, y, w);
            }
        }

        Self { width: w, height: h, magnitudes }
    }

    /// Gradient magnitude at (x, y); 0 outside the image or inside the
    /// border margin.
    pub fn magnitude(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.magnitudes[(y * self.width + x) as usize]
        } else {
            0.0
        }
    }

    pub fn is_busy(&self, x: u32, y: u32, threshold: f32) -> bool {
        self.magnitude(x, y) > threshold
    }
}

fn sobel_at(gray: &[f32], x: u32, y: u32, width: u32) -> f32 {
    let at = |dx: i64, dy: i64| -> f32 {
        let nx = (x as i64 + dx) as usize;
        let ny = (y as i64 + dy) as usize;
        gray[ny * width as usize + nx]
    };

    let gx = -at(-1, -1) + at(1, -1) - 2.0 * at(-1, 0) + 2.0 * at(1, 0) - at(-1, 1) + at(1, 1);
    let gy = -at(-1, -1) - 2.0 * at(0, -1) - at(1, -1) + at(-1, 1) + 2.0 * at(0, 1) + at(1, 1);

    (gx * gx + gy * gy).sqrt()
}
