//! Error types for the drift engine

use thiserror::Error;

/// Result type alias for drift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while comparing a design against its implementation
#[derive(Error, Debug)]
pub enum Error {
    /// A color value was not a `#RRGGBB` hex string
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Bitmap buffer does not match its declared dimensions
    #[error("Invalid bitmap: {0}")]
    BitmapError(String),

    /// Comparison attempted on a zero-area bitmap
    #[error("Cannot compare empty bitmap ({width}x{height})")]
    EmptyBitmap { width: u32, height: u32 },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// PNG decode or encode failure
    #[cfg(feature = "codec")]
    #[error("PNG codec error: {0}")]
    CodecError(String),

    /// A comparison task panicked or was cancelled
    #[error("Comparison task failed: {0}")]
    TaskError(String),
}

#[cfg(feature = "codec")]
impl From<png::DecodingError> for Error {
    fn from(err: png::DecodingError) -> Self {
        Error::CodecError(err.to_string())
    }
}

#[cfg(feature = "codec")]
impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        Error::CodecError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::TaskError(err.to_string())
    }
}
