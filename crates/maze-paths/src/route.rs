//! Ordered point sequences and their text form.
//!
//! A [`Route`] is built by appending points. Colinearity of consecutive
//! points is checked by [`Route::validate`], not by construction, so that
//! refinement output can be inspected before it is trusted.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use maze_core::Point;

use crate::frame::RouteFrame;

/// An ordered sequence of grid points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Create an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a route from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(i32, i32)]) -> Self {
        pairs.iter().copied().map(Point::from).collect()
    }

    /// Number of points in the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the route holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Append a point.
    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Append several points.
    pub fn extend_from_slice(&mut self, points: &[Point]) {
        self.points.extend_from_slice(points);
    }

    /// Remove and return the last point.
    ///
    /// # Panics
    ///
    /// Panics on an empty route.
    pub fn pop(&mut self) -> Point {
        match self.points.pop() {
            Some(p) => p,
            None => panic!("pop() on an empty route"),
        }
    }

    /// The last point.
    ///
    /// # Panics
    ///
    /// Panics on an empty route.
    pub fn last(&self) -> Point {
        match self.points.last() {
            Some(&p) => p,
            None => panic!("last() on an empty route"),
        }
    }

    /// Shorten the route to its first `len` points.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
    }

    /// Whether `p` occurs anywhere in the route.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Whether the route is non-empty and ends at `target`.
    #[inline]
    pub fn is_finished(&self, target: Point) -> bool {
        self.points.last() == Some(&target)
    }

    /// Reverse the route in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// A reversed copy.
    pub fn reversed(&self) -> Route {
        let mut r = self.clone();
        r.reverse();
        r
    }

    /// Map each point to its index. A repeated point maps to its last index.
    pub fn to_point_map(&self) -> HashMap<Point, usize> {
        self.points.iter().enumerate().map(|(i, &p)| (p, i)).collect()
    }

    /// Consecutive-pair frames: `len - 1` of them, none for fewer than two points.
    pub fn to_frames(&self) -> Vec<RouteFrame> {
        self.points
            .windows(2)
            .map(|w| RouteFrame::from_points(w[0], w[1]))
            .collect()
    }

    /// Check that every step changes at most one axis.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, w) in self.points.windows(2).enumerate() {
            if !w[0].is_colinear(w[1]) {
                return Err(ValidationError::RouteStep {
                    step: i + 1,
                    from: w[0],
                    to: w[1],
                });
            }
        }
        Ok(())
    }

    /// Canonical text form, `[x y] [x y] …`; the empty route is `[]`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<Point>> for Route {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Route {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.points.is_empty() {
            return f.write_str("[]");
        }
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{} {}]", p.x, p.y)?;
        }
        Ok(())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    /// Parse the canonical text form. Both `""` and `"[]"` give an empty route.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.trim();
        if rest.is_empty() || rest == "[]" {
            return Ok(Route::new());
        }

        let mut points = Vec::new();
        while !rest.is_empty() {
            let Some(body) = rest.strip_prefix('[') else {
                return Err(ParseRouteError::Unbracketed(rest.to_string()));
            };
            let Some(end) = body.find(']') else {
                return Err(ParseRouteError::Unbracketed(rest.to_string()));
            };
            let group = &body[..end];
            let mut fields = group.split_whitespace();
            let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(ParseRouteError::BadPair(group.to_string()));
            };
            let x = x
                .parse::<i32>()
                .map_err(|_| ParseRouteError::BadNumber(x.to_string()))?;
            let y = y
                .parse::<i32>()
                .map_err(|_| ParseRouteError::BadNumber(y.to_string()))?;
            points.push(Point::new(x, y));
            rest = body[end + 1..].trim_start();
        }
        Ok(Route { points })
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A non-colinear step found by [`Route::validate`] or
/// [`RoutingStruct::validate`](crate::RoutingStruct::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Step `step` of a route (from point `step - 1` to point `step`) is diagonal.
    RouteStep { step: usize, from: Point, to: Point },
    /// An adjacency edge of a reachability graph is diagonal.
    GraphEdge { node: Point, to: Point },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteStep { step, from, to } => {
                write!(f, "bad node address in route {from} -> {to}, step: {step}")
            }
            Self::GraphEdge { node, to } => {
                write!(f, "bad node address {node} -> {to}, node: {node}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Malformed route text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRouteError {
    /// A point group is not enclosed in `[` and `]`.
    Unbracketed(String),
    /// A point group does not hold exactly two values.
    BadPair(String),
    /// A coordinate is not an integer.
    BadNumber(String),
}

impl fmt::Display for ParseRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbracketed(s) => write!(f, "route: expected \u{201c}[x y]\u{201d} at: {s}"),
            Self::BadPair(s) => write!(f, "route: expected two coordinates in \u{201c}[{s}]\u{201d}"),
            Self::BadNumber(s) => write!(f, "route: invalid coordinate \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for ParseRouteError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r: Route = "[8 9] [8 11] [26 11]".parse().unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
