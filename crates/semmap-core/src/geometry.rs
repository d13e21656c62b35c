//! Geometric primitives for locating diagram elements.
//!
//! Semmap never lays anything out; it only needs to know where the drawing
//! tool placed each shape and label so that labels can be paired with the
//! closest shape.
//!
//! # Coordinate System
//!
//! Positions use the SVG coordinate system of the input document:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use std::fmt;

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use semmap_core::geometry::Point;
/// let group = Point::new(100.0, 200.0);
/// let line = Point::new(50.0, 17.5);
///
/// let absolute = group.add_point(line);
/// assert_eq!(absolute.x(), 150.0);
/// assert_eq!(absolute.y(), 217.5);
///
/// assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Calculates the Euclidean distance between this point and another.
    pub fn distance_to(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
