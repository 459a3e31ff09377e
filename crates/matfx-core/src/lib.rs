//! # matfx-core
//!
//! Pixel buffers and sliding-window ("matrix") filter passes.
//!
//! - [`Image`] - owned `width x height` ARGB buffer with bounds-checked and
//!   fast per-pixel access
//! - [`Matrix`], [`MatrixMut`] - odd-sized square windows centred on a
//!   position, resolving window-relative coordinates against an image
//! - [`Filter`] - per-pixel callback invoked by the filter passes
//! - [`Point`], [`Size`], [`Rect`], [`Argb`] - plain value types
//!
//! ## Filter passes
//!
//! ```rust
//! use matfx_core::{filter_fn, Argb, Image, Matrix, Rect, Size};
//!
//! let mut img = Image::filled(Size::new(8, 8), Argb::OPAQUE_WHITE);
//!
//! // Black out a 2x2 block in place.
//! img.apply_filter_to(
//!     filter_fn(|_: &(), _: &Matrix<'_>| Argb::OPAQUE_BLACK),
//!     Rect::new(3, 3, 2, 2),
//!     1,
//! )
//! .unwrap();
//!
//! assert_eq!(img.color_xy(4, 4), Argb::OPAQUE_BLACK);
//! assert_eq!(img.color_xy(5, 5), Argb::OPAQUE_WHITE);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! matfx-core (this crate)
//!    ^
//!    |
//!    +-- matfx-io (GD 2.x decoding/encoding)
//!    +-- matfx-tests (integration tests)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for the value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod image;
pub mod matrix;

// Re-exports for convenience
pub use color::Argb;
pub use error::{Error, Result};
pub use filter::{filter_fn, Filter};
pub use geometry::{Point, Rect, Size};
pub use image::{Decoded, Image};
pub use matrix::{Matrix, MatrixMut};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use matfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Argb;
    pub use crate::error::{Error, Result};
    pub use crate::filter::{filter_fn, Filter};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::image::{Decoded, Image};
    pub use crate::matrix::{Matrix, MatrixMut};
}
