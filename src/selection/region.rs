//! Screen-space geometry for region selection

use std::fmt;

/// A point in screen pixel coordinates (top-left origin)
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A normalized rectangle in screen pixel coordinates.
///
/// `x1 <= x2` and `y1 <= y2` always hold; the only way to build one is
/// through [`Region::from_corners`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Region {
    /// Build a region from two opposite corners in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn x2(&self) -> i32 {
        self.x2
    }

    pub fn y2(&self) -> i32 {
        self.y2
    }

    pub fn width(&self) -> u32 {
        self.x2.abs_diff(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.abs_diff(self.y1)
    }

    /// A zero-width or zero-height region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Shift the region by the given offset, e.g. from screen to widget space
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes_every_direction() {
        let corners = [
            (Point::new(10, 20), Point::new(110, 70)),
            (Point::new(110, 70), Point::new(10, 20)),
            (Point::new(110, 20), Point::new(10, 70)),
            (Point::new(10, 70), Point::new(110, 20)),
        ];

        for (a, b) in corners {
            let region = Region::from_corners(a, b);
            assert_eq!(region.x1(), a.x.min(b.x));
            assert_eq!(region.y1(), a.y.min(b.y));
            assert_eq!(region.x2(), a.x.max(b.x));
            assert_eq!(region.y2(), a.y.max(b.y));
            assert_eq!(region.width(), 100);
            assert_eq!(region.height(), 50);
        }
    }

    #[test]
    fn test_degenerate_region_is_empty() {
        let p = Point::new(42, 42);
        let region = Region::from_corners(p, p);
        assert!(region.is_empty());

        let line = Region::from_corners(Point::new(0, 5), Point::new(30, 5));
        assert!(line.is_empty());
        assert_eq!(line.width(), 30);
    }

    #[test]
    fn test_negative_coordinates() {
        // Monitors left of the primary have negative x
        let region = Region::from_corners(Point::new(-1920, 100), Point::new(-1800, 10));
        assert_eq!(region.x1(), -1920);
        assert_eq!(region.width(), 120);
        assert_eq!(region.height(), 90);
    }

    #[test]
    fn test_display() {
        let region = Region::from_corners(Point::new(30, 40), Point::new(10, 20));
        assert_eq!(region.to_string(), "(10, 20) - (30, 40)");
    }

    #[test]
    fn test_offset() {
        let region = Region::from_corners(Point::new(10, 20), Point::new(30, 40));
        let moved = region.offset(-10, -20);
        assert_eq!(moved, Region::from_corners(Point::new(0, 0), Point::new(20, 20)));
    }
}
