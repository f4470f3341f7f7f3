//! Rectangle and point types in logical (possibly fractional) coordinates.
//!
//! Callers describe regions in floating-point coordinates; operations turn
//! them into integer iteration windows through [`crate::ViewWindow`].
//! Every method here returns a new value, nothing clips a caller's
//! rectangle in place.
//!
//! # Coordinate System
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use raster_core::Rectangle;
//!
//! let rect = Rectangle::new(10.0, 20.0, 100.0, 50.0);
//! assert_eq!(rect.right(), 110.0);
//!
//! let clipped = rect.contract(0.0, 0.0, 64.0, 64.0);
//! assert_eq!(clipped, Rectangle::new(10.0, 20.0, 54.0, 44.0));
//! ```

/// Axis-aligned rectangle with `f64` origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// X coordinate of the left edge
    pub x: f64,
    /// Y coordinate of the top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle with the given origin and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Creates a rectangle from integer pixel coordinates.
    #[inline]
    pub fn from_pixels(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x as f64, y as f64, width as f64, height as f64)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Intersection with the box `(x, y, width, height)`.
    ///
    /// Never grows the rectangle. When the two do not overlap the result
    /// has zero width and/or height, anchored at the clamped origin.
    ///
    /// ```rust
    /// use raster_core::Rectangle;
    ///
    /// let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    /// let miss = r.contract(20.0, 20.0, 5.0, 5.0);
    /// assert!(miss.is_empty());
    /// ```
    pub fn contract(&self, x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        let left = self.x.max(x);
        let top = self.y.max(y);
        let right = self.right().min(x + width);
        let bottom = self.bottom().min(y + height);
        Rectangle::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    /// Intersection with another rectangle, see [`contract`](Self::contract).
    #[inline]
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        self.contract(other.x, other.y, other.width, other.height)
    }

    /// Returns this rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rectangle({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A 2D point, used as the destination origin of blits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ZERO: Point = Point::new(0.0, 0.0);
}
