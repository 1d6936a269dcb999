use std::fmt::{Display, Error, Formatter};

use qrcode::types::QrError;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum VeilError {
    // Input validation
    EmptyCarrier,
    BufferSizeMismatch,
    InvalidUrl,

    // QR encoding
    PayloadTooLong,
    UnencodablePayload,
}

impl Display for VeilError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::EmptyCarrier => "carrier bitmap has zero width or height",
            Self::BufferSizeMismatch => "pixel buffer length does not match dimensions",
            Self::InvalidUrl => "url must start with http:// or https://",
            Self::PayloadTooLong => "url too long for the configured error correction level",
            Self::UnencodablePayload => "url cannot be encoded as a qr symbol",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for VeilError {}

impl From<QrError> for VeilError {
    fn from(e: QrError) -> Self {
        match e {
            QrError::DataTooLong => Self::PayloadTooLong,
            _ => Self::UnencodablePayload,
        }
    }
}

pub type VeilResult<T> = Result<T, VeilError>;
