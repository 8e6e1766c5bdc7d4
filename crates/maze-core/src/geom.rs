//! Integer grid coordinates.

use std::fmt;

/// A cell address. X grows right, Y grows down.
///
/// Ordering is by `x`, then `y`; it only serves as a stable tie-break.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`. Used to rank candidates.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        f64::from(other.x - self.x).hypot(f64::from(other.y - self.y))
    }

    /// `|dx| + |dy|`. For two points on one line this is the length of the
    /// segment between them.
    #[inline]
    pub fn axis_distance(self, other: Point) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Whether the two points share a row or a column. A point is colinear
    /// with itself.
    #[inline]
    pub fn is_colinear(self, other: Point) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
