use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::search::RouterResult;

/// A position reachable in one movement, with a display-only cost.
///
/// The cost never influences route selection; it only travels along for
/// tie-break display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub pos: Point,
    pub cost: i32,
}

/// Corridor movement model: enumerates the turn points reachable from a cell.
pub trait MoveOracle {
    /// Grid size (width = x, height = y).
    fn size(&self) -> Point;

    /// Append the moves available from `from` into `buf`. The caller clears
    /// `buf` before calling. `target` is offered directly when it is in
    /// unobstructed line of sight.
    fn next_moves(&self, from: Point, target: Point, buf: &mut Vec<Move>);
}

/// Which way a reachability graph is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// From start toward target.
    Forward,
    /// From target toward start.
    Reverse,
}

/// A route-search strategy.
///
/// `graphs` hands out the reachability graph for either direction; a
/// strategy only asks for the directions it searches.
pub trait Router {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult>;
}
