use std::fmt;

use maze_core::Point;

/// A pair of points denoting opposite corners of an axis-aligned rectangle.
///
/// Used two ways: as a consecutive-pair segment of a route (see
/// [`Route::to_frames`](crate::Route::to_frames)) and as a pruning window
/// whose `start` is the low corner and `end` the high corner. Equality is
/// an exact match of both corners in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteFrame {
    pub start: Point,
    pub end: Point,
}

impl RouteFrame {
    /// Create a frame from raw corner coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32, x2: i32, y2: i32) -> Self {
        Self {
            start: Point::new(x, y),
            end: Point::new(x2, y2),
        }
    }

    /// Create a frame from two corner points.
    #[inline]
    pub const fn from_points(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether `p` lies strictly inside the window (bounds are exclusive).
    #[inline]
    pub fn contains_strictly(&self, p: Point) -> bool {
        self.start.x < p.x && p.x < self.end.x && self.start.y < p.y && p.y < self.end.y
    }

    /// Keep only the points strictly inside the window, preserving order.
    pub fn filter(&self, points: &[Point]) -> Vec<Point> {
        points
            .iter()
            .copied()
            .filter(|&p| self.contains_strictly(p))
            .collect()
    }

    /// Whether `p` lies inside the window, bounds included.
    #[inline]
    pub fn overlaps(&self, p: Point) -> bool {
        self.start.x <= p.x && p.x <= self.end.x && self.start.y <= p.y && p.y <= self.end.y
    }

    /// Both corners share a row.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Both corners share a column.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Length of the segment between the corners, summed over both axes.
    #[inline]
    pub fn span(&self) -> i32 {
        self.start.axis_distance(self.end)
    }
}

impl fmt::Display for RouteFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
