//! # matfx-io
//!
//! Image file support for matfx.
//!
//! Currently a single format: GD 2.x (`.gd`), the uncompressed format of
//! libgd. Decoded files implement [`matfx_core::Decoded`], so they can be
//! handed to [`matfx_core::Image::from_decoded`] without copying pixels.
//!
//! # Example
//!
//! ```rust,ignore
//! use matfx_core::{filter_fn, Argb, Matrix};
//!
//! let mut image = matfx_io::read_image("input.gd")?;
//! image.apply_filter(filter_fn(|_: &(), m: &Matrix<'_>| m.color_xy(1, 1).with_alpha(0xFF)), 3)?;
//! matfx_io::write("output.gd", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod gd;

pub use error::{IoError, IoResult};
pub use gd::{read, read_from_memory, read_image, write, write_to_memory, GdImage};
