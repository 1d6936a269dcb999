//! # qrveil
//!
//! Hides a scannable QR-encoded URL inside a photograph. The carrier image
//! stays visually unchanged: the QR modules are written as small luminance
//! shifts, applied only at pixels where Sobel edge detection finds enough
//! local contrast to mask them. Smooth regions are never touched, chroma is
//! never touched, and a dedicated reader can recover the code from the
//! luminance pattern.
//!
//! This is perceptual hiding, not cryptography: the embedding withstands a
//! casual look, not steganalysis.
//!
//! ## Quick start
//!
//! ```rust
//! use qrveil::{embed, Bitmap};
//!
//! # fn main() -> Result<(), qrveil::VeilError> {
//! let pixels = vec![128u8; 64 * 64 * 4]; // RGBA carrier, row-major
//! let carrier = Bitmap::from_raw(64, 64, pixels)?;
//!
//! let output = embed(&carrier, "https://example.com")?;
//! assert_eq!((output.width(), output.height()), (64, 64));
//! # Ok(())
//! # }
//! ```
//!
//! ## Tuning
//!
//! The edge threshold, modulation depth and attenuation are named
//! configuration on [`EmbedConfig`]:
//!
//! ```rust
//! use qrveil::{embed_with, Bitmap, EcLevel, EmbedConfig};
//!
//! # fn main() -> Result<(), qrveil::VeilError> {
//! # let carrier = Bitmap::from_raw(64, 64, vec![128u8; 64 * 64 * 4])?;
//! let config = EmbedConfig { threshold: 50.0, alpha: 0.1, ..EmbedConfig::default() };
//! let output = embed_with(&carrier, "https://example.com", &config)?;
//! # Ok(())
//! # }
//! ```

pub mod bitmap;
pub mod color;
pub mod edge;
pub mod embed;
pub mod error;
pub mod matrix;

pub use bitmap::Bitmap;
pub use edge::EdgeMap;
pub use embed::{embed, embed_with, is_supported_url, EmbedConfig};
pub use error::{VeilError, VeilResult};
pub use matrix::ModuleGrid;

// The error correction level is part of the public configuration surface;
// re-exported so callers never import the encoder crate themselves.
pub use qrcode::EcLevel;
