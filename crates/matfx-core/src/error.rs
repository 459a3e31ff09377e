//! Error types for matfx-core operations.
//!
//! Only construction-time contracts produce errors: building an [`Image`]
//! from a pixel buffer of the wrong length, creating a [`Matrix`] with an
//! even window, or running a buffered pass into a differently sized target.
//! Per-pixel access is guarded by [`Image::is_valid`] instead, and window
//! access through a matrix never fails.
//!
//! # Usage
//!
//! ```rust
//! use matfx_core::{Error, Image, Size};
//!
//! let err = Image::from_pixels(Size::new(4, 4), vec![]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! [`Image`]: crate::Image
//! [`Image::is_valid`]: crate::Image::is_valid
//! [`Matrix`]: crate::Matrix

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by image construction, matrix construction and filter passes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    ///
    /// Only returned by the checked accessors such as
    /// [`Image::try_set_color`](crate::Image::try_set_color).
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i64,
        /// Y coordinate that was out of bounds
        y: i64,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Pixel buffer length does not match the requested dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Matrix window size is zero or even.
    #[error("invalid window size {0}: must be odd and at least 1")]
    InvalidWindowSize(u32),

    /// Source and destination images differ in size.
    ///
    /// Returned by the buffered filter passes, which never resize.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// Source image width
        a_width: u32,
        /// Source image height
        a_height: u32,
        /// Destination image width
        b_width: u32,
        /// Destination image height
        b_height: u32,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
