// BT.601 color space conversion
//------------------------------------------------------------------------------
//
// Forward and inverse transforms between byte-range RGB and a luma/chroma
// triple. The inverse accepts luma values pushed outside [0, 255] by the
// embedding step and clamps before narrowing back to bytes; skipping the
// clamp shows up as color banding wherever a channel wraps.

/// Luma/chroma sample. `y` is in [0, 255] for byte-range inputs, `u` and `v`
/// carry the BT.601 signed chroma ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    pub y: f32,
    pub u: f32,
    pub v: f32,
}

/// Grayscale reduction shared by edge scoring and the forward transform.
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> Yuv {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    Yuv {
        y: 0.299 * r + 0.587 * g + 0.114 * b,
        u: -0.14713 * r - 0.28886 * g + 0.436 * b,
        v: 0.615 * r - 0.51499 * g - 0.10001 * b,
    }
}

/// Inverse transform. Channels are rounded to nearest and clamped to the
/// byte range before narrowing.
pub fn yuv_to_rgb(yuv: Yuv) -> [u8; 3] {
    let Yuv { y, u, v } = yuv;
    [
        to_channel(y + 1.13983 * v),
        to_channel(y - 0.39465 * u - 0.58060 * v),
        to_channel(y + 2.03211 * u),
    ]
}

fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
