use log::debug;
use qrcode::EcLevel;

use crate::bitmap::Bitmap;
use crate::color::{rgb_to_yuv, yuv_to_rgb};
use crate::edge::EdgeMap;
use crate::error::{VeilError, VeilResult};
use crate::matrix::ModuleGrid;

// Embedding engine
//------------------------------------------------------------------------------

/// Tuning knobs for the embedding. The defaults reproduce the profile this
/// crate ships with; `threshold`, `delta` and `alpha` trade robustness of
/// the hidden code against its visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbedConfig {
    /// Minimum Sobel gradient magnitude for a pixel to be modulated.
    /// Measured on the 8-bit grayscale gradient scale; useful values sit
    /// around 50-64. Higher keeps smooth regions untouched at the cost of
    /// fewer carrier pixels.
    pub threshold: f32,
    /// Luminance modulation magnitude before attenuation.
    pub delta: f32,
    /// Attenuation applied to `delta`.
    pub alpha: f32,
    /// Minimum carrier footprint of one module, in pixels per side.
    pub min_cell_px: f32,
    /// QR error correction level; H tolerates the lossy embedding best.
    pub ec_level: EcLevel,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self { threshold: 64.0, delta: 10.0, alpha: 0.15, min_cell_px: 2.0, ec_level: EcLevel::H }
    }
}

/// Whether `url` carries a scheme this embedder accepts.
pub fn is_supported_url(url: &str) -> bool {
    let has_prefix = |p: &str| {
        url.len() >= p.len() && url.as_bytes()[..p.len()].eq_ignore_ascii_case(p.as_bytes())
    };
    has_prefix("http://") || has_prefix("https://")
}

/// Embed `url` into `carrier` with the default configuration.
pub fn embed(carrier: &Bitmap, url: &str) -> VeilResult<Bitmap> {
    embed_with(carrier, url, &EmbedConfig::default())
}

/// Embed `url` into `carrier` as a QR symbol written into the luminance of
/// edge pixels, returning a new bitmap of identical dimensions.
///
/// The output is a pure function of the carrier, the url and the
/// configuration. Edge scores are taken against the untouched carrier, so
/// the result does not depend on scan order. On error no partial image is
/// produced.
pub fn embed_with(carrier: &Bitmap, url: &str, config: &EmbedConfig) -> VeilResult<Bitmap> {
    if !is_supported_url(url) {
        return Err(VeilError::InvalidUrl);
    }

    let grid = ModuleGrid::encode(url, config.ec_level)?;
    let edges = EdgeMap::of(carrier);
    let (w, h) = (carrier.width(), carrier.height());
    debug!(
        "embedding {} payload bytes as a {count}x{count} module grid into a {w}x{h} carrier",
        url.len(),
        count = grid.module_count(),
    );

    let mut out = carrier.data().to_vec();
    let mut modulated = 0u64;
    for y in 0..h {
        for x in 0..w {
            if !edges.is_busy(x, y, config.threshold) {
                continue;
            }
            let Some(dark) = grid.sample(x, y, w, h, config.min_cell_px) else {
                continue;
            };

            let [r, g, b, _] = carrier.pixel(x, y);
            let mut yuv = rgb_to_yuv(r, g, b);
            let shift = if dark { config.delta } else { -config.delta } * config.alpha;
            yuv.y = (yuv.y + shift).clamp(0.0, 255.0);
            let [r, g, b] = yuv_to_rgb(yuv);

            let off = carrier.offset(x, y);
            out[off..off + 4].copy_from_slice(&[r, g, b, 255]);
            modulated += 1;
        }
    }
    debug!("modulated {modulated} of {} pixels", u64::from(w) * u64::from(h));

    Bitmap::from_raw(w, h, out)
}
