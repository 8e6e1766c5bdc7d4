use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::search::{FramePolicy, RouterResult, Search};
use crate::traits::{Direction, Router};

/// Single greedy descent with narrowing frames.
///
/// Each chosen point records a window bounded by the route points already
/// on its row and column, and the next candidates must fall inside it.
/// No backtracking: the one result may stop short of the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hare;

impl Router for Hare {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult> {
        let graph = graphs(Direction::Forward);
        let result = Search::new(&graph, start, target, size, FramePolicy::Narrowing).descend_once();
        log::debug!("hare: {} points, reached {}", result.route.len(), result.reached(target));
        vec![result]
    }
}
