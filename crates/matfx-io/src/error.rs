//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Variant of the format this crate does not handle.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Image cannot be represented in the target format.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded data was rejected by the core image type.
    #[error(transparent)]
    Core(#[from] matfx_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
