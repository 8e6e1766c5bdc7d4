use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::search::{FramePolicy, RouterResult, Search};
use crate::traits::{Direction, Router};

/// Single greedy descent without frames. Records candidate lists only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deer;

impl Router for Deer {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult> {
        let graph = graphs(Direction::Forward);
        let result = Search::new(&graph, start, target, size, FramePolicy::Off).descend_once();
        log::debug!("deer: {} points, reached {}", result.route.len(), result.reached(target));
        vec![result]
    }
}
