//! Window matrices: square neighbourhood views into an [`Image`].
//!
//! A matrix has an odd window `size` and a centre `position`. Window
//! coordinates run from `(0, 0)` at the top-left of the window to
//! `(size - 1, size - 1)` at the bottom-right; `(half_size, half_size)` is
//! the centre and maps to `position` itself:
//!
//! ```text
//!   window (size = 3)          image
//!   ┌───┬───┬───┐
//!   │0,0│1,0│2,0│      (px-1,py-1) (px,py-1) (px+1,py-1)
//!   ├───┼───┼───┤
//!   │0,1│1,1│2,1│  ->  (px-1,py)   (px,py)   (px+1,py)
//!   ├───┼───┼───┤
//!   │0,2│1,2│2,2│      (px-1,py+1) (px,py+1) (px+1,py+1)
//!   └───┴───┴───┘
//! ```
//!
//! The centre may sit anywhere, including outside the image. Each access
//! is bounds-checked individually: reads outside the image yield
//! [`Argb::TRANSPARENT`] and writes outside the image are dropped. Filters
//! that want a different edge policy inspect [`Matrix::is_valid`] themselves.
//!
//! Two views exist, mirroring shared and exclusive borrows:
//! - [`Matrix`] borrows `&Image` and only reads
//! - [`MatrixMut`] borrows `&mut Image` and can also write
//!
//! Both borrow the image, so neither can outlive it.

use crate::{Argb, Error, Image, Point, Result};

/// Window geometry shared by [`Matrix`] and [`MatrixMut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    size: u32,
    half_size: u32,
    position: Point,
}

impl Window {
    fn new(size: u32, position: Point) -> Result<Self> {
        if size % 2 == 0 {
            return Err(Error::InvalidWindowSize(size));
        }
        Ok(Self {
            size,
            half_size: (size - 1) / 2,
            position,
        })
    }

    /// Maps a window coordinate to an absolute image coordinate.
    #[inline]
    fn resolve(&self, window: Point) -> Point {
        let half = self.half_size as i64;
        self.position.offset(window.x.saturating_sub(half), window.y.saturating_sub(half))
    }
}

/// Read-only square window into an [`Image`].
///
/// # Example
///
/// ```rust
/// use matfx_core::{Argb, Image, Matrix, Point, Size};
///
/// let img = Image::filled(Size::new(4, 4), Argb::OPAQUE_WHITE);
/// let m = Matrix::at(&img, Point::new(0, 0), 3).unwrap();
///
/// // Centre of the window is the matrix position.
/// assert_eq!(m.color_xy(1, 1), Argb::OPAQUE_WHITE);
/// // Top-left cell maps to (-1, -1), outside the image.
/// assert_eq!(m.color_xy(0, 0), Argb::TRANSPARENT);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matrix<'a> {
    image: &'a Image,
    window: Window,
}

impl<'a> Matrix<'a> {
    /// Creates a matrix of window `size` centred at the image origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] if `size` is zero or even.
    pub fn new(image: &'a Image, size: u32) -> Result<Self> {
        Self::at(image, Point::ZERO, size)
    }

    /// Creates a matrix of window `size` centred at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] if `size` is zero or even.
    pub fn at(image: &'a Image, position: Point, size: u32) -> Result<Self> {
        Ok(Self {
            image,
            window: Window::new(size, position)?,
        })
    }

    /// Returns the window edge length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.window.size
    }

    /// Returns `(size - 1) / 2`, the window coordinate of the centre.
    #[inline]
    pub fn half_size(&self) -> u32 {
        self.window.half_size
    }

    /// Returns the absolute position of the window centre.
    #[inline]
    pub fn position(&self) -> Point {
        self.window.position
    }

    /// Moves the window centre to `position`.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.window.position = position;
    }

    /// Returns the image this matrix views.
    #[inline]
    pub fn image(&self) -> &'a Image {
        self.image
    }

    /// Maps a window coordinate to an absolute image coordinate.
    #[inline]
    pub fn resolve(&self, window: Point) -> Point {
        self.window.resolve(window)
    }

    /// Returns `true` if the window coordinate lands inside the image.
    #[inline]
    pub fn is_valid(&self, window: Point) -> bool {
        self.image.is_valid(self.resolve(window))
    }

    /// Returns the color at a window coordinate.
    ///
    /// Yields [`Argb::TRANSPARENT`] when the resolved coordinate is outside
    /// the image.
    #[inline]
    pub fn color(&self, window: Point) -> Argb {
        read(self.image, self.resolve(window))
    }

    /// Returns the color at window coordinate (wx, wy).
    #[inline]
    pub fn color_xy(&self, wx: i64, wy: i64) -> Argb {
        self.color(Point::new(wx, wy))
    }

    /// Iterates over every window cell as `(window_point, color)`.
    ///
    /// Cells are visited row by row; out-of-image cells report
    /// [`Argb::TRANSPARENT`].
    ///
    /// ```rust
    /// use matfx_core::{Argb, Image, Size};
    ///
    /// let img = Image::filled(Size::new(3, 3), Argb(1));
    /// let m = img.matrix_at_xy(0, 0, 3).unwrap();
    /// let sum: u32 = m.window().map(|(_, c)| c.0).sum();
    /// assert_eq!(sum, 4);
    /// ```
    pub fn window(&self) -> impl Iterator<Item = (Point, Argb)> + '_ {
        let size = self.window.size as i64;
        (0..size).flat_map(move |wy| {
            (0..size).map(move |wx| {
                let p = Point::new(wx, wy);
                (p, self.color(p))
            })
        })
    }
}

/// Read-write square window into an [`Image`].
///
/// Behaves like [`Matrix`] for reads; writes outside the image are
/// silently dropped.
///
/// # Example
///
/// ```rust
/// use matfx_core::{Argb, Image, MatrixMut, Point, Size};
///
/// let mut img = Image::new(Size::new(3, 3));
/// {
///     let mut m = MatrixMut::at(&mut img, Point::new(2, 2), 3).unwrap();
///     m.set_color_xy(0, 0, Argb::OPAQUE_WHITE); // (1, 1)
///     m.set_color_xy(2, 2, Argb::OPAQUE_WHITE); // (3, 3), dropped
/// }
/// assert_eq!(img.color_xy(1, 1), Argb::OPAQUE_WHITE);
/// ```
#[derive(Debug)]
pub struct MatrixMut<'a> {
    image: &'a mut Image,
    window: Window,
}

impl<'a> MatrixMut<'a> {
    /// Creates a matrix of window `size` centred at the image origin.
    pub fn new(image: &'a mut Image, size: u32) -> Result<Self> {
        Self::at(image, Point::ZERO, size)
    }

    /// Creates a matrix of window `size` centred at `position`.
    pub fn at(image: &'a mut Image, position: Point, size: u32) -> Result<Self> {
        Ok(Self {
            image,
            window: Window::new(size, position)?,
        })
    }

    /// Returns the window edge length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.window.size
    }

    /// Returns `(size - 1) / 2`, the window coordinate of the centre.
    #[inline]
    pub fn half_size(&self) -> u32 {
        self.window.half_size
    }

    /// Returns the absolute position of the window centre.
    #[inline]
    pub fn position(&self) -> Point {
        self.window.position
    }

    /// Moves the window centre to `position`.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.window.position = position;
    }

    /// Reborrows this matrix as a read-only view at the same position.
    #[inline]
    pub fn as_matrix(&self) -> Matrix<'_> {
        Matrix {
            image: &*self.image,
            window: self.window,
        }
    }

    /// Maps a window coordinate to an absolute image coordinate.
    #[inline]
    pub fn resolve(&self, window: Point) -> Point {
        self.window.resolve(window)
    }

    /// Returns `true` if the window coordinate lands inside the image.
    #[inline]
    pub fn is_valid(&self, window: Point) -> bool {
        self.image.is_valid(self.resolve(window))
    }

    /// Returns the color at a window coordinate, or [`Argb::TRANSPARENT`]
    /// outside the image.
    #[inline]
    pub fn color(&self, window: Point) -> Argb {
        read(&*self.image, self.resolve(window))
    }

    /// Returns the color at window coordinate (wx, wy).
    #[inline]
    pub fn color_xy(&self, wx: i64, wy: i64) -> Argb {
        self.color(Point::new(wx, wy))
    }

    /// Writes the color at a window coordinate.
    ///
    /// A no-op when the resolved coordinate is outside the image.
    #[inline]
    pub fn set_color(&mut self, window: Point, color: Argb) {
        let abs = self.resolve(window);
        if self.image.is_valid(abs) {
            self.image.set_color(abs, color);
        }
    }

    /// Writes the color at window coordinate (wx, wy).
    #[inline]
    pub fn set_color_xy(&mut self, wx: i64, wy: i64, color: Argb) {
        self.set_color(Point::new(wx, wy), color);
    }
}

#[inline]
fn read(image: &Image, abs: Point) -> Argb {
    if image.is_valid(abs) {
        image.color(abs)
    } else {
        Argb::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn numbered(width: u32, height: u32) -> Image {
        let pixels = (0..width * height).map(|i| Argb(i + 1)).collect();
        Image::from_pixels(Size::new(width, height), pixels).unwrap()
    }

    #[test]
    fn test_rejects_even_size() {
        let img = numbered(3, 3);
        assert_eq!(Matrix::new(&img, 2).unwrap_err(), Error::InvalidWindowSize(2));
        assert_eq!(Matrix::new(&img, 0).unwrap_err(), Error::InvalidWindowSize(0));
        assert!(Matrix::new(&img, 1).is_ok());
    }

    #[test]
    fn test_half_size() {
        let img = numbered(3, 3);
        assert_eq!(img.matrix(1).unwrap().half_size(), 0);
        assert_eq!(img.matrix(3).unwrap().half_size(), 1);
        assert_eq!(img.matrix(7).unwrap().half_size(), 3);
    }

    #[test]
    fn test_default_position() {
        let img = numbered(3, 3);
        assert_eq!(img.matrix(5).unwrap().position(), Point::ZERO);
    }

    #[test]
    fn test_centre_matches_image() {
        let img = numbered(5, 4);
        for size in [1, 3, 5] {
            for p in img.bounds().iter_points() {
                let m = img.matrix_at(p, size).unwrap();
                let h = m.half_size() as i64;
                assert_eq!(m.color_xy(h, h), img.color(p));
            }
        }
    }

    #[test]
    fn test_resolve_offsets() {
        let img = numbered(5, 5);
        let m = img.matrix_at_xy(2, 3, 5).unwrap();
        assert_eq!(m.resolve(Point::new(0, 0)), Point::new(0, 1));
        assert_eq!(m.resolve(Point::new(4, 4)), Point::new(4, 5));
        assert_eq!(m.color_xy(0, 0), img.color_xy(0, 1));
        assert_eq!(m.color_xy(3, 1), img.color_xy(3, 2));
    }

    #[test]
    fn test_edge_sentinel() {
        let img = numbered(4, 4);
        let m = img.matrix_at_xy(0, 0, 3).unwrap();
        assert!(!m.is_valid(Point::new(0, 0)));
        assert_eq!(m.color_xy(0, 0), Argb::TRANSPARENT);
        assert_eq!(m.color_xy(2, 2), img.color_xy(1, 1));
    }

    #[test]
    fn test_position_outside_image() {
        let img = numbered(2, 2);
        let mut m = img.matrix_at_xy(-10, 50, 3).unwrap();
        assert!(m.window().all(|(_, c)| c == Argb::TRANSPARENT));
        m.set_position(Point::new(1, 1));
        assert_eq!(m.color_xy(1, 1), img.color_xy(1, 1));
    }

    #[test]
    fn test_extreme_positions_read_sentinel() {
        let img = numbered(3, 3);
        let m = Matrix::at(&img, Point::new(i64::MAX, 0), 3).unwrap();
        assert_eq!(m.color_xy(2, 1), Argb::TRANSPARENT);
        assert!(m.window().all(|(_, c)| c == Argb::TRANSPARENT));

        let m = img.matrix_at_xy(i64::MIN, i64::MIN, 5).unwrap();
        assert_eq!(m.color_xy(0, 0), Argb::TRANSPARENT);
        assert_eq!(m.color_xy(i64::MIN, i64::MAX), Argb::TRANSPARENT);
    }

    #[test]
    fn test_extreme_position_write_dropped() {
        let mut img = numbered(3, 3);
        let before = img.clone();
        let mut m = img.matrix_mut_at(Point::new(0, i64::MAX), 3).unwrap();
        m.set_color_xy(2, 2, Argb(0xDEAD));
        m.set_color_xy(i64::MAX, i64::MIN, Argb(0xDEAD));
        assert_eq!(img, before);
    }

    #[test]
    fn test_window_row_major() {
        let img = numbered(3, 3);
        let m = img.matrix_at_xy(1, 1, 3).unwrap();
        let colors: Vec<u32> = m.window().map(|(_, c)| c.0).collect();
        assert_eq!(colors, (1..=9).collect::<Vec<_>>());
        let points: Vec<Point> = m.window().map(|(p, _)| p).take(2).collect();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(1, 0)]);
    }

    #[test]
    fn test_matrix_mut_write_drops_outside() {
        let mut img = numbered(2, 2);
        let before = img.clone();
        {
            let mut m = img.matrix_mut(3).unwrap();
            m.set_color_xy(0, 0, Argb(0xDEAD));
            m.set_color_xy(0, 1, Argb(0xDEAD));
            m.set_color_xy(1, 0, Argb(0xDEAD));
        }
        assert_eq!(img, before);
    }

    #[test]
    fn test_matrix_mut_round_trip() {
        let mut img = numbered(4, 4);
        let mut m = img.matrix_mut_at(Point::new(2, 2), 3).unwrap();
        m.set_color(Point::new(2, 0), Argb(0xABCD));
        assert_eq!(m.color(Point::new(2, 0)), Argb(0xABCD));
        assert_eq!(m.as_matrix().color_xy(2, 0), Argb(0xABCD));
        assert_eq!(img.color_xy(3, 1), Argb(0xABCD));
    }
}
