use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use image::{imageops::FilterType, DynamicImage, ImageDecoder, ImageReader};
use log::info;

use qrveil::{embed_with, is_supported_url, Bitmap, EcLevel, EmbedConfig};

/// Hide a QR-encoded link inside a photograph.
///
/// The output looks like the input but scans as a QR code when captured by
/// a reader that samples luminance.
#[derive(Debug, Parser)]
#[command(name = "qrveil", version)]
struct Cli {
    /// Carrier photograph (any format the image crate decodes).
    carrier: PathBuf,

    /// Absolute http(s) URL to hide.
    url: String,

    /// Output path; the extension picks the format.
    #[arg(short, long, default_value = "hidden-qr.png")]
    output: PathBuf,

    /// Edge gradient magnitude a pixel must exceed to be modulated.
    #[arg(long)]
    threshold: Option<f32>,

    /// Luminance modulation magnitude.
    #[arg(long)]
    delta: Option<f32>,

    /// Attenuation applied to the modulation.
    #[arg(long)]
    alpha: Option<f32>,

    /// Longest carrier side in pixels; larger photographs are downscaled.
    #[arg(long, default_value_t = 2000)]
    max_dimension: u32,

    /// QR error correction level: l, m, q or h.
    #[arg(long, default_value = "h", value_parser = parse_ec_level)]
    ec_level: EcLevel,
}

fn parse_ec_level(s: &str) -> Result<EcLevel, String> {
    match s.to_ascii_lowercase().as_str() {
        "l" => Ok(EcLevel::L),
        "m" => Ok(EcLevel::M),
        "q" => Ok(EcLevel::Q),
        "h" => Ok(EcLevel::H),
        _ => Err(format!("unknown error correction level `{s}`, expected l, m, q or h")),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Reject a bad URL before doing any image work.
    anyhow::ensure!(is_supported_url(&cli.url), "url must start with http:// or https://");

    let mut config = EmbedConfig { ec_level: cli.ec_level, ..EmbedConfig::default() };
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(delta) = cli.delta {
        config.delta = delta;
    }
    if let Some(alpha) = cli.alpha {
        config.alpha = alpha;
    }

    let mut img = load_oriented(&cli.carrier)
        .with_context(|| format!("could not load carrier {}", cli.carrier.display()))?;

    if img.width().max(img.height()) > cli.max_dimension {
        info!(
            "downscaling {}x{} carrier to fit {} px",
            img.width(),
            img.height(),
            cli.max_dimension
        );
        img = img.resize(cli.max_dimension, cli.max_dimension, FilterType::Triangle);
    }

    let carrier = Bitmap::from_image(img.to_rgba8())?;
    let output = embed_with(&carrier, &cli.url, &config).context("embedding failed")?;

    output
        .into_image()
        .save(&cli.output)
        .with_context(|| format!("could not write {}", cli.output.display()))?;
    info!("wrote {}", cli.output.display());

    Ok(())
}

/// Decode an image and apply its EXIF orientation, so portrait shots from
/// phone cameras embed the QR in the orientation the viewer sees.
fn load_oriented(path: &Path) -> anyhow::Result<DynamicImage> {
    let mut decoder = ImageReader::open(path)?.with_guessed_format()?.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}
