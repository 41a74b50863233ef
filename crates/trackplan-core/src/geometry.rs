//! Geometric primitives for diagram layout.
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle, used for every rect primitive
//!
//! # Coordinate System
//!
//! Diagram space follows SVG: origin at the top-left corner, x grows to the
//! right and y grows downward. Document space (see
//! [`TextFragment`](crate::fragment::TextFragment)) is the opposite vertically.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use trackplan_core::geometry::Point;
/// let marker = Point::new(490.0, 280.0);
///
/// let stub = marker.add_point(Point::new(8.0, 0.0));
/// assert_eq!(stub.x(), 498.0);
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
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds of the given size centered on `center`.
    ///
    /// ```
    /// # use trackplan_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_center(Point::new(100.0, 280.0), Size::new(16.0, 16.0));
    /// assert_eq!(bounds.min_x(), 92.0);
    /// assert_eq!(bounds.min_y(), 272.0);
    /// ```
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;
        Self {
            min_x: center.x() - half_width,
            min_y: center.y() - half_height,
            max_x: center.x() + half_width,
            max_y: center.y() + half_height,
        }
    }

    /// Creates bounds of the given size whose top-left corner is `top_left`.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x(),
            min_y: top_left.y(),
            max_x: top_left.x() + size.width(),
            max_y: top_left.y() + size.height(),
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns `true` if `point` lies inside or on the edge of the bounds.
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_add() {
        let moved = Point::new(490.0, 280.0).add_point(Point::new(8.0, 0.0));
        assert_approx_eq!(f32, moved.x(), 498.0);
        assert_approx_eq!(f32, moved.y(), 280.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(40.0, 210.0), Size::new(900.0, 260.0));
        assert_approx_eq!(f32, bounds.max_x(), 940.0);
        assert_approx_eq!(f32, bounds.max_y(), 470.0);
        assert_approx_eq!(f32, bounds.width(), 900.0);
        assert_approx_eq!(f32, bounds.height(), 260.0);
    }

    #[test]
    fn test_bounds_from_center_contains() {
        let center = Point::new(490.0, 230.0);
        let bounds = Bounds::new_from_center(center, Size::new(52.0, 160.0));
        assert_approx_eq!(f32, bounds.min_x(), 464.0);
        assert_approx_eq!(f32, bounds.min_y(), 150.0);
        assert!(bounds.contains(center));
        assert!(bounds.contains(Point::new(516.0, 310.0)));
        assert!(!bounds.contains(Point::new(600.0, 230.0)));
    }
}
