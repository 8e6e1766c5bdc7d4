use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::search::{Completion, FramePolicy, RouterResult, Search};
use crate::traits::{Direction, Router};

/// Exhaustive depth-first search over the forward graph.
///
/// Records a whole-grid frame at every step and returns the completions
/// found under the single exclusion set, in discovery order. Finds at
/// least one route whenever the graph connects start and target.
///
/// Not every simple path is reported. After each completion the target's
/// predecessor is excluded for the rest of the search, so a second route
/// through that same predecessor is never found.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hog;

impl Router for Hog {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult> {
        let graph = graphs(Direction::Forward);
        let results =
            Search::new(&graph, start, target, size, FramePolicy::FullField).run(Completion::All);
        log::debug!("hog: {} completions", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_routing_tree;
    use crate::graph::tests::TableOracle;
    use crate::search::full_frame;
    use crate::search::tests::{graph, p};

    fn square() -> TableOracle {
        TableOracle::new(
            p(5, 5),
            &[
                ((0, 0), &[(4, 0), (0, 4)]),
                ((4, 0), &[(0, 0), (4, 4)]),
                ((0, 4), &[(0, 0), (4, 4)]),
                ((4, 4), &[(4, 0), (0, 4)]),
            ],
        )
    }

    #[test]
    fn finds_both_completions_around_square() {
        let oracle = square();
        let provider = |_: Direction| build_routing_tree(&oracle, p(0, 0), p(4, 4));
        let results = Hog.build_routes(&provider, p(0, 0), p(4, 4), p(5, 5));
        let routes: Vec<String> = results.iter().map(|r| r.route.serialize()).collect();
        assert_eq!(routes, vec!["[0 0] [0 4] [4 4]", "[0 0] [4 0] [4 4]"]);
        for r in &results {
            assert!(r.reached(p(4, 4)));
            assert!(r.route.validate().is_ok());
            assert_eq!(r.frames, vec![full_frame(p(5, 5)); 2]);
        }
    }

    #[test]
    fn earlier_results_survive_backtracking() {
        let g = graph(&[
            ((0, 0), &[(0, 2), (2, 0)]),
            ((0, 2), &[(2, 2)]),
            ((2, 0), &[(2, 2)]),
            ((2, 2), &[]),
        ]);
        let results = Hog.build_routes(&|_| g.clone(), p(0, 0), p(2, 2), p(3, 3));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].route.serialize(), "[0 0] [0 2] [2 2]");
        assert_eq!(results[0].point_lists, vec![vec![p(0, 2), p(2, 0)], vec![p(2, 2)]]);
        assert_eq!(results[1].route.serialize(), "[0 0] [2 0] [2 2]");
        assert_eq!(results[1].point_lists, vec![vec![p(2, 0)], vec![p(2, 2)]]);
    }

    #[test]
    fn shared_predecessor_is_reported_once() {
        // Both routes reach (2, 4) through (2, 2), which is excluded after the
        // first completion.
        let g = graph(&[
            ((0, 0), &[(0, 2), (2, 0)]),
            ((0, 2), &[(2, 2)]),
            ((2, 0), &[(2, 2)]),
            ((2, 2), &[(2, 4)]),
            ((2, 4), &[]),
        ]);
        let results = Hog.build_routes(&|_| g.clone(), p(0, 0), p(2, 4), p(5, 5));
        let routes: Vec<String> = results.iter().map(|r| r.route.serialize()).collect();
        assert_eq!(routes, vec!["[0 0] [0 2] [2 2] [2 4]"]);
    }

    #[test]
    fn unreachable_target_gives_nothing() {
        let g = graph(&[((0, 0), &[(0, 3)]), ((0, 3), &[(0, 0), (3, 3)]), ((3, 3), &[(0, 3)])]);
        let results = Hog.build_routes(&|_| g.clone(), p(0, 0), p(6, 6), p(7, 7));
        assert!(results.is_empty());
        assert!(!g.connects(p(0, 0), p(6, 6)));
    }
}
