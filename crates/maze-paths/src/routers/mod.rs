//! The route-search strategies and their closed dispatch.

use std::fmt;
use std::str::FromStr;

use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::search::RouterResult;
use crate::traits::{Direction, Router};

mod deer;
mod fox;
mod hare;
mod hog;
mod wolf;

pub use deer::Deer;
pub use fox::Fox;
pub use hare::Hare;
pub use hog::Hog;
pub use wolf::Wolf;

/// Strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouterKind {
    Hare,
    Deer,
    Hog,
    #[default]
    Fox,
    Wolf,
}

impl RouterKind {
    /// Every strategy, in declaration order.
    pub const ALL: [RouterKind; 5] = [Self::Hare, Self::Deer, Self::Hog, Self::Fox, Self::Wolf];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Hare => "hare",
            Self::Deer => "deer",
            Self::Hog => "hog",
            Self::Fox => "fox",
            Self::Wolf => "wolf",
        }
    }
}

impl Router for RouterKind {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult> {
        log::debug!("{self}: {start} -> {target} on {}x{}", size.x, size.y);
        match self {
            Self::Hare => Hare.build_routes(graphs, start, target, size),
            Self::Deer => Deer.build_routes(graphs, start, target, size),
            Self::Hog => Hog.build_routes(graphs, start, target, size),
            Self::Fox => Fox.build_routes(graphs, start, target, size),
            Self::Wolf => Wolf.build_routes(graphs, start, target, size),
        }
    }
}

impl fmt::Display for RouterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRouterError(pub String);

impl fmt::Display for ParseRouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown router \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseRouterError {}

impl FromStr for RouterKind {
    type Err = ParseRouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseRouterError(s.to_string()))
    }
}
