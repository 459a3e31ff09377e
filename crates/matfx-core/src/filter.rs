//! Sliding-window filter passes.
//!
//! A pass walks a traversal rectangle of the source image in row-major
//! order (y outer, x inner). At every cell it centres a [`Matrix`] of the
//! requested window size on that cell, asks the [`Filter`] for a color and
//! writes the color at the same coordinate of the target image.
//!
//! # Variants
//!
//! | Method                                       | Traversal                     | Target   |
//! |----------------------------------------------|-------------------------------|----------|
//! | [`Image::apply_filter`]                      | whole image                   | in place |
//! | [`Image::apply_filter_at`]                   | image extent starting at `pos`| in place |
//! | [`Image::apply_filter_to`]                   | `area`                        | in place |
//! | [`Image::apply_filter_with_args_to`]         | `area`, with payload          | in place |
//! | [`Image::apply_buffered_filter`]             | whole image                   | buffer   |
//! | [`Image::apply_buffered_filter_at`]          | image extent starting at `pos`| buffer   |
//! | [`Image::apply_buffered_filter_to`]          | `area`                        | buffer   |
//! | [`Image::apply_buffered_filter_with_args_to`]| `area`, with payload          | buffer   |
//!
//! Every traversal rectangle is clipped to the source bounds first; an empty
//! clip visits nothing. Window reads past the image edge go through the
//! matrix and yield [`Argb::TRANSPARENT`].
//!
//! In-place passes overwrite cells that later windows may still read, so
//! convolution-style filters belong in a buffered pass. The buffer is a
//! distinct `&mut Image`, which rules out aliasing with the source.
//!
//! # Example
//!
//! ```rust
//! use matfx_core::{filter_fn, Argb, Image, Matrix, Size};
//!
//! let src = Image::filled(Size::new(3, 3), Argb(1));
//! let mut dst = Image::new(src.size());
//!
//! // Count in-image neighbours, including the centre.
//! let visited = src
//!     .apply_buffered_filter(
//!         filter_fn(|_: &(), m: &Matrix<'_>| Argb(m.window().map(|(_, c)| c.0).sum())),
//!         3,
//!         &mut dst,
//!     )
//!     .unwrap();
//!
//! assert_eq!(visited, 9);
//! assert_eq!(dst.color_xy(0, 0), Argb(4));
//! assert_eq!(dst.color_xy(1, 1), Argb(9));
//! ```

use crate::{Argb, Error, Image, Matrix, Point, Rect, Result};
use tracing::{debug, trace};

/// A per-pixel filter function.
///
/// `A` is an opaque payload (kernel weights, thresholds, ...) forwarded
/// unchanged to every invocation. Passes without a payload use `()`.
///
/// Any `FnMut(&A, &Matrix<'_>) -> Argb` is a filter; see [`filter_fn`] for
/// help with closure type inference.
///
/// # Example
///
/// ```rust
/// use matfx_core::{Argb, Filter, Image, Matrix, Rect, Size};
///
/// struct Threshold;
///
/// impl Filter<u8> for Threshold {
///     fn apply(&mut self, level: &u8, m: &Matrix<'_>) -> Argb {
///         let h = m.half_size() as i64;
///         if m.color_xy(h, h).r() >= *level { Argb::OPAQUE_WHITE } else { Argb::OPAQUE_BLACK }
///     }
/// }
///
/// let mut img = Image::filled(Size::new(2, 2), Argb::from_channels(0xFF, 0x90, 0, 0));
/// img.apply_filter_with_args_to(&0x80u8, Threshold, Rect::from_size(2, 2), 1).unwrap();
/// assert_eq!(img.color_xy(1, 1), Argb::OPAQUE_WHITE);
/// ```
pub trait Filter<A: ?Sized = ()> {
    /// Computes the output color for the cell the matrix is centred on.
    fn apply(&mut self, args: &A, matrix: &Matrix<'_>) -> Argb;
}

impl<A: ?Sized, F> Filter<A> for F
where
    F: FnMut(&A, &Matrix<'_>) -> Argb,
{
    #[inline]
    fn apply(&mut self, args: &A, matrix: &Matrix<'_>) -> Argb {
        self(args, matrix)
    }
}

/// Pins a closure to the filter signature.
///
/// Closures passed straight to a `F: Filter<A>` bound get no signature
/// hint; wrapping them here lets the compiler infer a higher-ranked
/// `FnMut(&A, &Matrix<'_>)`.
#[inline]
pub fn filter_fn<A: ?Sized, F>(f: F) -> F
where
    F: FnMut(&A, &Matrix<'_>) -> Argb,
{
    f
}

impl Image {
    /// Applies `filter` to every pixel, writing results back in place.
    pub fn apply_filter<F: Filter>(&mut self, filter: F, m_size: u32) -> Result<usize> {
        let area = self.bounds();
        run_in_place(self, &(), filter, area, m_size, "apply_filter")
    }

    /// Applies `filter` in place over the image extent starting at `pos`.
    ///
    /// The traversal rectangle is `Rect::at(pos, self.size())` clipped to the
    /// image, so `pos = (0, 0)` covers the whole image and a positive `pos`
    /// skips the leading rows and columns.
    pub fn apply_filter_at<F: Filter>(&mut self, filter: F, pos: Point, m_size: u32) -> Result<usize> {
        let area = Rect::at(pos, self.size());
        run_in_place(self, &(), filter, area, m_size, "apply_filter_at")
    }

    /// Applies `filter` in place over `area`, clipped to the image.
    pub fn apply_filter_to<F: Filter>(&mut self, filter: F, area: Rect, m_size: u32) -> Result<usize> {
        run_in_place(self, &(), filter, area, m_size, "apply_filter_to")
    }

    /// Applies `filter` in place over `area`, forwarding `args` to every call.
    pub fn apply_filter_with_args_to<A, F>(
        &mut self,
        args: &A,
        filter: F,
        area: Rect,
        m_size: u32,
    ) -> Result<usize>
    where
        A: ?Sized,
        F: Filter<A>,
    {
        run_in_place(self, args, filter, area, m_size, "apply_filter_with_args_to")
    }

    /// Applies `filter` to every pixel, writing results into `buffer`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `buffer` differs in size from `self`;
    /// [`Error::InvalidWindowSize`] for an even or zero `m_size`.
    pub fn apply_buffered_filter<F: Filter>(
        &self,
        filter: F,
        m_size: u32,
        buffer: &mut Image,
    ) -> Result<usize> {
        run_buffered(self, buffer, &(), filter, self.bounds(), m_size, "apply_buffered_filter")
    }

    /// Buffered counterpart of [`Image::apply_filter_at`].
    pub fn apply_buffered_filter_at<F: Filter>(
        &self,
        filter: F,
        pos: Point,
        m_size: u32,
        buffer: &mut Image,
    ) -> Result<usize> {
        let area = Rect::at(pos, self.size());
        run_buffered(self, buffer, &(), filter, area, m_size, "apply_buffered_filter_at")
    }

    /// Buffered counterpart of [`Image::apply_filter_to`].
    pub fn apply_buffered_filter_to<F: Filter>(
        &self,
        filter: F,
        area: Rect,
        m_size: u32,
        buffer: &mut Image,
    ) -> Result<usize> {
        run_buffered(self, buffer, &(), filter, area, m_size, "apply_buffered_filter_to")
    }

    /// Buffered counterpart of [`Image::apply_filter_with_args_to`].
    pub fn apply_buffered_filter_with_args_to<A, F>(
        &self,
        args: &A,
        filter: F,
        area: Rect,
        m_size: u32,
        buffer: &mut Image,
    ) -> Result<usize>
    where
        A: ?Sized,
        F: Filter<A>,
    {
        run_buffered(
            self,
            buffer,
            args,
            filter,
            area,
            m_size,
            "apply_buffered_filter_with_args_to",
        )
    }
}

/// Validates the window size and clips `area` to the source image.
fn prepare(source: &Image, area: Rect, m_size: u32, variant: &str) -> Result<Option<Rect>> {
    // Fails early on an even window, before any cell is visited.
    Matrix::new(source, m_size)?;

    let clipped = area.clip_to(source.size());
    debug!(
        variant,
        m_size,
        area = %area,
        clipped = ?clipped,
        "filter pass"
    );
    Ok(clipped)
}

fn run_in_place<A, F>(
    image: &mut Image,
    args: &A,
    mut filter: F,
    area: Rect,
    m_size: u32,
    variant: &str,
) -> Result<usize>
where
    A: ?Sized,
    F: Filter<A>,
{
    let Some(traversal) = prepare(image, area, m_size, variant)? else {
        return Ok(0);
    };

    let mut visited = 0;
    for p in traversal.iter_points() {
        let color = {
            let matrix = Matrix::at(image, p, m_size)?;
            filter.apply(args, &matrix)
        };
        image.set_color(p, color);
        visited += 1;
    }

    trace!(variant, visited, "filter pass done");
    Ok(visited)
}

fn run_buffered<A, F>(
    source: &Image,
    buffer: &mut Image,
    args: &A,
    mut filter: F,
    area: Rect,
    m_size: u32,
    variant: &str,
) -> Result<usize>
where
    A: ?Sized,
    F: Filter<A>,
{
    if source.size() != buffer.size() {
        let (a, b) = (source.size(), buffer.size());
        return Err(Error::dimension_mismatch((a.width, a.height), (b.width, b.height)));
    }
    let Some(traversal) = prepare(source, area, m_size, variant)? else {
        return Ok(0);
    };

    let mut matrix = Matrix::new(source, m_size)?;
    let mut visited = 0;
    for p in traversal.iter_points() {
        matrix.set_position(p);
        buffer.set_color(p, filter.apply(args, &matrix));
        visited += 1;
    }

    trace!(variant, visited, "filter pass done");
    Ok(visited)
}
