//! Owned ARGB pixel buffer.
//!
//! [`Image`] owns a `width * height` buffer of [`Argb`] values in
//! **row-major** order (`index = y * width + x`). Its dimensions never change
//! after construction.
//!
//! # Two-tier pixel access
//!
//! Per-pixel access comes in two flavours:
//!
//! - **Fast accessors** ([`Image::color`], [`Image::color_xy`],
//!   [`Image::set_color`], [`Image::set_color_xy`]) do not validate the
//!   coordinate. Callers must check [`Image::is_valid`] first. In debug
//!   builds a violated precondition trips an assertion; in release builds
//!   an x beyond the row width silently addresses a pixel of a neighbouring
//!   row, and anything beyond the buffer panics.
//! - **Checked accessors** ([`Image::get_color`], [`Image::try_set_color`])
//!   run `is_valid` and then take the fast path.
//!
//! Window-relative access through a [`Matrix`] is always bounds-checked and
//! never fails.
//!
//! # Usage
//!
//! ```rust
//! use matfx_core::{Argb, Image, Point, Size};
//!
//! let mut img = Image::new(Size::new(4, 3));
//! let p = Point::new(2, 1);
//! if img.is_valid(p) {
//!     img.set_color(p, Argb::OPAQUE_WHITE);
//! }
//! assert_eq!(img.get_color(p), Some(Argb::OPAQUE_WHITE));
//! assert_eq!(img.get_color(Point::new(4, 0)), None);
//! ```

use crate::{Argb, Error, Matrix, MatrixMut, Point, Rect, Result, Size};

/// Decoded image data handed over by a file decoder.
///
/// This is the seam between the core and format crates: a decoder reports
/// its dimensions and gives up its row-major pixel vector, which
/// [`Image::from_decoded`] adopts without copying.
pub trait Decoded {
    /// Dimensions of the decoded image.
    fn dimensions(&self) -> Size;

    /// Consumes the decoder output, yielding `width * height` pixels in
    /// row-major order.
    fn into_pixels(self) -> Vec<Argb>;
}

/// Owned `width x height` ARGB image.
///
/// # Example
///
/// ```rust
/// use matfx_core::{Argb, Image, Size};
///
/// let img = Image::filled(Size::new(2, 2), Argb::OPAQUE_BLACK);
/// assert_eq!(img.len(), 4);
/// assert_eq!(img.color_xy(1, 1), Argb::OPAQUE_BLACK);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    dimen: Size,
    len: usize,
    pixels: Vec<Argb>,
}

impl Image {
    /// Creates an image with every pixel set to [`Argb::TRANSPARENT`].
    pub fn new(size: Size) -> Self {
        Self::filled(size, Argb::TRANSPARENT)
    }

    /// Creates an image with every pixel set to `color`.
    pub fn filled(size: Size, color: Argb) -> Self {
        let len = size.width as usize * size.height as usize;
        Self {
            dimen: size,
            len,
            pixels: vec![color; len],
        }
    }

    /// Creates an image that takes ownership of `pixels`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len()` is not
    /// `size.width * size.height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use matfx_core::{Argb, Image, Size};
    ///
    /// let img = Image::from_pixels(Size::new(2, 1), vec![Argb(1), Argb(2)]).unwrap();
    /// assert_eq!(img.color_xy(1, 0), Argb(2));
    /// ```
    pub fn from_pixels(size: Size, pixels: Vec<Argb>) -> Result<Self> {
        let expected = size.area();
        if pixels.len() as u64 != expected {
            return Err(Error::invalid_dimensions(
                size.width,
                size.height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            dimen: size,
            len: pixels.len(),
            pixels,
        })
    }

    /// Creates an image from a decoder's output.
    ///
    /// Same length contract as [`Image::from_pixels`].
    pub fn from_decoded<D: Decoded>(decoded: D) -> Result<Self> {
        let size = decoded.dimensions();
        Self::from_pixels(size, decoded.into_pixels())
    }

    /// Returns the image dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.dimen
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.dimen.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.dimen.height
    }

    /// Returns the number of pixels, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a rectangle covering the entire image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.dimen.width, self.dimen.height)
    }

    /// Returns the row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Returns the row-major pixel buffer mutably.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }

    /// Consumes the image, returning its pixel buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }

    /// Returns `true` if `point` addresses a pixel of this image.
    #[inline]
    pub fn is_valid(&self, point: Point) -> bool {
        self.is_valid_xy(point.x, point.y)
    }

    /// Returns `true` if `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn is_valid_xy(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.dimen.width as i64 && y < self.dimen.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.dimen.width as usize + x as usize
    }

    /// Returns the color at `point` without validating it.
    ///
    /// The caller must have checked [`Image::is_valid`].
    #[inline]
    pub fn color(&self, point: Point) -> Argb {
        debug_assert!(self.is_valid(point), "pixel {point} out of bounds");
        self.color_xy(point.x as u32, point.y as u32)
    }

    /// Returns the color at (x, y) without validating it.
    ///
    /// The caller must have checked [`Image::is_valid_xy`].
    #[inline]
    pub fn color_xy(&self, x: u32, y: u32) -> Argb {
        debug_assert!(x < self.dimen.width && y < self.dimen.height, "pixel out of bounds");
        self.pixels[self.index(x, y)]
    }

    /// Writes the color at `point` without validating it.
    ///
    /// The caller must have checked [`Image::is_valid`].
    #[inline]
    pub fn set_color(&mut self, point: Point, color: Argb) {
        debug_assert!(self.is_valid(point), "pixel {point} out of bounds");
        self.set_color_xy(point.x as u32, point.y as u32, color);
    }

    /// Writes the color at (x, y) without validating it.
    ///
    /// The caller must have checked [`Image::is_valid_xy`].
    #[inline]
    pub fn set_color_xy(&mut self, x: u32, y: u32, color: Argb) {
        debug_assert!(x < self.dimen.width && y < self.dimen.height, "pixel out of bounds");
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Returns the color at `point`, or `None` if it is outside the image.
    #[inline]
    pub fn get_color(&self, point: Point) -> Option<Argb> {
        if self.is_valid(point) {
            Some(self.color(point))
        } else {
            None
        }
    }

    /// Writes the color at `point` after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `point` is outside the image.
    #[inline]
    pub fn try_set_color(&mut self, point: Point, color: Argb) -> Result<()> {
        if !self.is_valid(point) {
            return Err(Error::out_of_bounds(point.x, point.y, self.dimen.width, self.dimen.height));
        }
        self.set_color(point, color);
        Ok(())
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Argb) {
        self.pixels.fill(color);
    }

    /// Creates a read-only matrix of window `size` centred at the origin.
    pub fn matrix(&self, size: u32) -> Result<Matrix<'_>> {
        Matrix::new(self, size)
    }

    /// Creates a read-only matrix of window `size` centred at `point`.
    pub fn matrix_at(&self, point: Point, size: u32) -> Result<Matrix<'_>> {
        Matrix::at(self, point, size)
    }

    /// Creates a read-only matrix of window `size` centred at (x, y).
    pub fn matrix_at_xy(&self, x: i64, y: i64, size: u32) -> Result<Matrix<'_>> {
        Matrix::at(self, Point::new(x, y), size)
    }

    /// Creates a read-write matrix of window `size` centred at the origin.
    pub fn matrix_mut(&mut self, size: u32) -> Result<MatrixMut<'_>> {
        MatrixMut::new(self, size)
    }

    /// Creates a read-write matrix of window `size` centred at `point`.
    pub fn matrix_mut_at(&mut self, point: Point, size: u32) -> Result<MatrixMut<'_>> {
        MatrixMut::at(self, point, size)
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.dimen.width)
            .field("height", &self.dimen.height)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDecoded {
        size: Size,
        pixels: Vec<Argb>,
    }

    impl Decoded for FakeDecoded {
        fn dimensions(&self) -> Size {
            self.size
        }

        fn into_pixels(self) -> Vec<Argb> {
            self.pixels
        }
    }

    fn numbered(width: u32, height: u32) -> Image {
        let pixels = (0..width * height).map(Argb).collect();
        Image::from_pixels(Size::new(width, height), pixels).unwrap()
    }

    #[test]
    fn test_image_new() {
        let img = Image::new(Size::new(5, 3));
        assert_eq!(img.width(), 5);
        assert_eq!(img.height(), 3);
        assert_eq!(img.len(), 15);
        assert!(img.pixels().iter().all(|&c| c == Argb::TRANSPARENT));
    }

    #[test]
    fn test_from_pixels_wrong_len() {
        let result = Image::from_pixels(Size::new(3, 3), vec![Argb(0); 8]);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_from_decoded() {
        let decoded = FakeDecoded {
            size: Size::new(2, 2),
            pixels: vec![Argb(1), Argb(2), Argb(3), Argb(4)],
        };
        let img = Image::from_decoded(decoded).unwrap();
        assert_eq!(img.color_xy(0, 1), Argb(3));
    }

    #[test]
    fn test_from_decoded_wrong_len() {
        let decoded = FakeDecoded {
            size: Size::new(2, 2),
            pixels: vec![Argb(1)],
        };
        assert!(Image::from_decoded(decoded).is_err());
    }

    #[test]
    fn test_row_major_layout() {
        let img = numbered(4, 3);
        assert_eq!(img.color_xy(3, 0), Argb(3));
        assert_eq!(img.color_xy(0, 1), Argb(4));
        assert_eq!(img.color(Point::new(2, 2)), Argb(10));
    }

    #[test]
    fn test_is_valid_inside() {
        let img = Image::new(Size::new(7, 5));
        for y in 0..5 {
            for x in 0..7 {
                assert!(img.is_valid_xy(x, y));
            }
        }
    }

    #[test]
    fn test_is_valid_outside() {
        let img = Image::new(Size::new(7, 5));
        for (x, y) in [(-1, 0), (0, -1), (7, 0), (0, 5), (7, 5), (-1, -1), (i64::MAX, 0)] {
            assert!(!img.is_valid_xy(x, y), "({x}, {y}) should be invalid");
        }
    }

    #[test]
    fn test_set_get_every_pixel() {
        let mut img = Image::new(Size::new(6, 4));
        let bounds = img.bounds();
        for p in bounds.iter_points() {
            let c = Argb((p.y * 100 + p.x) as u32 | 0xFF00_0000);
            img.set_color(p, c);
            assert_eq!(img.color(p), c);
        }
        assert_eq!(img.color_xy(5, 3), Argb(0xFF00_0000 | 305));
    }

    #[test]
    fn test_checked_access() {
        let mut img = Image::new(Size::new(2, 2));
        assert_eq!(img.get_color(Point::new(-1, 0)), None);
        let err = img.try_set_color(Point::new(2, 0), Argb(1)).unwrap_err();
        assert!(err.is_bounds_error());
        img.try_set_color(Point::new(1, 1), Argb(9)).unwrap();
        assert_eq!(img.get_color(Point::new(1, 1)), Some(Argb(9)));
    }

    #[test]
    fn test_fill() {
        let mut img = numbered(3, 3);
        img.fill(Argb::OPAQUE_WHITE);
        assert!(img.pixels().iter().all(|&c| c == Argb::OPAQUE_WHITE));
    }

    #[test]
    fn test_pixel_buffer_access() {
        let mut img = Image::new(Size::new(2, 2));
        img.pixels_mut()[3] = Argb(42);
        assert_eq!(img.color_xy(1, 1), Argb(42));
        assert_eq!(img.into_pixels(), vec![Argb(0), Argb(0), Argb(0), Argb(42)]);
    }

    #[test]
    fn test_empty_image() {
        let img = Image::new(Size::new(0, 10));
        assert!(img.is_empty());
        assert!(!img.is_valid_xy(0, 0));
    }
}
