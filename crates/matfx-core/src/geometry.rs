//! Geometry values: sizes, signed points and rectangles.
//!
//! # Coordinate System
//!
//! All coordinates use the usual image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Image   │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Points are signed so that a [`Matrix`](crate::Matrix) may be centred
//! outside the image and so that window offsets can go negative. Rectangles
//! carry a signed origin for the same reason; [`Rect::clip_to`] brings them
//! back inside an image.
//!
//! # Usage
//!
//! ```rust
//! use matfx_core::{Point, Rect, Size};
//!
//! let area = Rect::from_size(10, 10);
//! let clipped = area.clip_to(Size::new(4, 4)).unwrap();
//! assert_eq!(clipped, Rect::new(0, 0, 4, 4));
//! assert!(clipped.contains(Point::new(3, 3)));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unsigned 2D extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `width * height` without overflow.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Size {
    #[inline]
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Signed 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate
    pub x: i64,
    /// Vertical coordinate
    pub y: i64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point::new(0, 0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by (dx, dy), saturating at the `i64`
    /// range.
    ///
    /// ```rust
    /// use matfx_core::Point;
    ///
    /// assert_eq!(Point::new(1, 1).offset(-2, 3), Point::new(-1, 4));
    /// ```
    #[inline]
    pub const fn offset(&self, dx: i64, dy: i64) -> Point {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangle defined by a signed origin and unsigned dimensions.
///
/// The left/top edges are inclusive, the right/bottom edges exclusive.
/// A rectangle with zero width or height is empty.
///
/// # Example
///
/// ```rust
/// use matfx_core::Rect;
///
/// let rect = Rect::new(-2, 3, 10, 5);
/// assert_eq!(rect.right(), 8);
/// assert_eq!(rect.bottom(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i64,
    /// Y coordinate of the top edge (inclusive)
    pub y: i64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle of `size` whose top-left corner is `origin`.
    #[inline]
    pub const fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the X coordinate of the right edge (exclusive), saturating at
    /// `i64::MAX`.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x.saturating_add(self.width as i64)
    }

    /// Returns the Y coordinate of the bottom edge (exclusive), saturating at
    /// `i64::MAX`.
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height as i64)
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if `point` lies inside this rectangle.
    ///
    /// ```rust
    /// use matfx_core::{Point, Rect};
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(Point::new(10, 10)));
    /// assert!(rect.contains(Point::new(109, 109)));
    /// assert!(!rect.contains(Point::new(110, 110)));
    /// ```
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the intersection of this rectangle with another, or `None`
    /// if they share no pixel.
    ///
    /// ```rust
    /// use matfx_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, -50, 100, 100);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 0, 50, 50)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        // Neither extent can exceed the narrower input, so it fits in u32.
        if x < right && y < bottom {
            let width = right.saturating_sub(x).min(u32::MAX as i64) as u32;
            let height = bottom.saturating_sub(y).min(u32::MAX as i64) as u32;
            Some(Rect::new(x, y, width, height))
        } else {
            None
        }
    }

    /// Clips this rectangle to the bounds of an image of `size`.
    ///
    /// Returns `None` when nothing of the rectangle lies inside the image.
    #[inline]
    pub fn clip_to(&self, size: Size) -> Option<Rect> {
        self.intersect(&Rect::from_size(size.width, size.height))
    }

    /// Returns an iterator over all points of this rectangle.
    ///
    /// Iterates row by row, left to right, top to bottom.
    ///
    /// ```rust
    /// use matfx_core::{Point, Rect};
    ///
    /// let points: Vec<_> = Rect::new(1, 0, 2, 2).iter_points().collect();
    /// assert_eq!(
    ///     points,
    ///     vec![Point::new(1, 0), Point::new(2, 0), Point::new(1, 1), Point::new(2, 1)]
    /// );
    /// ```
    #[inline]
    pub fn iter_points(&self) -> impl Iterator<Item = Point> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| Point::new(x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
