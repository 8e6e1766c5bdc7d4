use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::refine::short_by_interval;
use crate::search::{Completion, FramePolicy, RouterResult, Search};
use crate::traits::{Direction, Router};

/// Backtracking search with narrowing frames, run from both ends.
///
/// Up to three results: the first forward completion, the first reverse
/// completion turned around, and their interval merge when both exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wolf;

impl Router for Wolf {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult> {
        let forward = graphs(Direction::Forward);
        let fwd = Search::new(&forward, start, target, size, FramePolicy::Narrowing)
            .run(Completion::First)
            .pop();

        let reverse = graphs(Direction::Reverse);
        let rev = Search::new(&reverse, target, start, size, FramePolicy::Narrowing)
            .run(Completion::First)
            .pop()
            .map(|mut r| {
                r.reverse();
                r
            });

        let merged = match (&fwd, &rev) {
            (Some(f), Some(r)) => Some(short_by_interval(&f.route, &r.route)),
            _ => None,
        };
        let mut results: Vec<RouterResult> = fwd.into_iter().chain(rev).collect();
        results.extend(merged.map(RouterResult::new));
        log::debug!("wolf: {} results", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::RouteFrame;
    use crate::search::tests::{graph, p};

    #[test]
    fn merges_both_directions() {
        // Forward only knows the long way round; reverse finds the direct
        // line, and the merge keeps it.
        let fwd = graph(&[
            ((0, 0), &[(0, 9)]),
            ((0, 9), &[(8, 9)]),
            ((8, 9), &[(8, 3)]),
            ((8, 3), &[]),
        ]);
        let rev = graph(&[
            ((8, 3), &[(8, 0)]),
            ((8, 0), &[(0, 0)]),
            ((0, 0), &[]),
        ]);
        let graphs = |dir: Direction| match dir {
            Direction::Forward => fwd.clone(),
            Direction::Reverse => rev.clone(),
        };
        let results = Wolf.build_routes(&graphs, p(0, 0), p(8, 3), p(10, 10));
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].route.serialize(), "[0 0] [0 9] [8 9] [8 3]");
        assert_eq!(results[1].route.serialize(), "[0 0] [8 0] [8 3]");
        assert_eq!(results[2].route.serialize(), "[0 0] [8 0] [8 3]");
        assert_eq!(results[0].frames.len(), results[0].route.len() - 1);
        assert!(results[2].frames.is_empty());
    }

    #[test]
    fn backtracks_out_of_pruned_branch() {
        // (0,5) is nearest to the target but dead-ends.
        let g = graph(&[
            ((0, 0), &[(0, 5), (5, 0)]),
            ((0, 5), &[(0, 0)]),
            ((5, 0), &[(5, 6)]),
            ((5, 6), &[]),
        ]);
        let results = Wolf.build_routes(&|_| g.clone(), p(0, 0), p(5, 6), p(7, 7));
        // The same graph serves both directions, so only the forward
        // search can succeed.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route.serialize(), "[0 0] [5 0] [5 6]");
        assert_eq!(results[0].frames[0], RouteFrame::new(0, -1, 7, 7));
    }
}
