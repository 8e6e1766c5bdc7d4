use maze_core::Point;

use crate::graph::RoutingStruct;
use crate::refine::{shortest_by_intersection, unlooping, unlooping_line};
use crate::search::{Completion, FramePolicy, RouterResult, Search};
use crate::traits::{Direction, Router};

/// Backtracking search without frames, run from both ends.
///
/// Results, in order, each present only when it exists:
///
/// 0. the first forward completion
/// 1. the first completion on the reverse graph, reversed to run start to target
/// 2. the intersection merge of 1 and 0
/// 3. the merge with loops erased
/// 4. the merge with colinear runs collapsed
///
/// Entries 2 to 4 need both searches to succeed and carry no traces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fox;

impl Router for Fox {
    fn build_routes(
        &self,
        graphs: &dyn Fn(Direction) -> RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
    ) -> Vec<RouterResult> {
        let forward = graphs(Direction::Forward);
        let fwd = Search::new(&forward, start, target, size, FramePolicy::Off)
            .run(Completion::First)
            .pop();

        let reverse = graphs(Direction::Reverse);
        let rev = Search::new(&reverse, target, start, size, FramePolicy::Off)
            .run(Completion::First)
            .pop()
            .map(|mut r| {
                r.reverse();
                r
            });

        let mut results = Vec::with_capacity(5);
        let merged = match (&fwd, &rev) {
            (Some(f), Some(r)) => Some(shortest_by_intersection(&r.route, &f.route)),
            _ => None,
        };
        results.extend(fwd);
        results.extend(rev);
        if let Some(merged) = merged {
            let unlooped = unlooping(&merged);
            let lined = unlooping_line(&merged);
            results.push(RouterResult::new(merged));
            results.push(RouterResult::new(unlooped));
            results.push(RouterResult::new(lined));
        }
        log::debug!("fox: {} results", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::TableOracle;
    use crate::graph::{build_reversed_routing_tree, build_routing_tree};
    use crate::search::tests::{graph, p};

    fn square() -> TableOracle {
        TableOracle::new(
            p(5, 5),
            &[
                ((0, 0), &[(4, 0), (0, 4)]),
                ((4, 0), &[(0, 0), (4, 4)]),
                ((0, 4), &[(0, 0), (4, 4), (0, 4)]),
                ((4, 4), &[(4, 0), (0, 4)]),
            ],
        )
    }

    fn provider(oracle: &TableOracle, start: Point, target: Point) -> impl Fn(Direction) -> RoutingStruct + '_ {
        move |dir| match dir {
            Direction::Forward => build_routing_tree(oracle, start, target),
            Direction::Reverse => build_reversed_routing_tree(oracle, start, target),
        }
    }

    #[test]
    fn five_results_when_both_ends_succeed() {
        let oracle = square();
        let graphs = provider(&oracle, p(0, 0), p(4, 4));
        let results = Fox.build_routes(&graphs, p(0, 0), p(4, 4), p(5, 5));
        assert_eq!(results.len(), 5);
        for r in &results {
            assert_eq!(r.route.serialize(), "[0 0] [0 4] [4 4]");
            assert!(r.reached(p(4, 4)));
        }
        // The reverse result keeps its search-order trace.
        assert_eq!(results[1].point_lists[0], vec![p(0, 4), p(4, 0)]);
        assert!(results[2].point_lists.is_empty());
        assert!(results.iter().all(|r| r.frames.is_empty()));
    }

    #[test]
    fn reverse_result_runs_forward() {
        let fwd = graph(&[
            ((0, 0), &[(0, 6)]),
            ((0, 6), &[(0, 0), (6, 6)]),
            ((6, 6), &[]),
        ]);
        let rev = graph(&[
            ((6, 6), &[(6, 0), (0, 6)]),
            ((6, 0), &[(0, 0)]),
            ((0, 6), &[(0, 0)]),
            ((0, 0), &[]),
        ]);
        let graphs = |dir: Direction| match dir {
            Direction::Forward => fwd.clone(),
            Direction::Reverse => rev.clone(),
        };
        let results = Fox.build_routes(&graphs, p(0, 0), p(6, 6), p(7, 7));
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].route.serialize(), "[0 0] [0 6] [6 6]");
        assert_eq!(results[1].route.serialize(), "[0 0] [0 6] [6 6]");
        assert_eq!(results[1].route.get(0), p(0, 0));
    }

    #[test]
    fn one_sided_success_gives_no_merge() {
        let fwd = graph(&[((0, 0), &[(0, 6)]), ((0, 6), &[(6, 6)]), ((6, 6), &[])]);
        let rev = graph(&[((6, 6), &[(6, 3)]), ((6, 3), &[(6, 6)]), ((0, 0), &[])]);
        let graphs = |dir: Direction| match dir {
            Direction::Forward => fwd.clone(),
            Direction::Reverse => rev.clone(),
        };
        let results = Fox.build_routes(&graphs, p(0, 0), p(6, 6), p(7, 7));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route.serialize(), "[0 0] [0 6] [6 6]");
    }

    #[test]
    fn merge_refinements_are_applied() {
        // Forward takes a detour; reverse goes straight.
        let fwd = graph(&[
            ((0, 0), &[(0, 2)]),
            ((0, 2), &[(3, 2)]),
            ((3, 2), &[(3, 0)]),
            ((3, 0), &[(5, 0)]),
            ((5, 0), &[(5, 5)]),
            ((5, 5), &[]),
        ]);
        let rev = graph(&[
            ((5, 5), &[(5, 0)]),
            ((5, 0), &[(0, 0)]),
            ((0, 0), &[]),
        ]);
        let graphs = |dir: Direction| match dir {
            Direction::Forward => fwd.clone(),
            Direction::Reverse => rev.clone(),
        };
        let results = Fox.build_routes(&graphs, p(0, 0), p(5, 5), p(6, 6));
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].route.serialize(), "[0 0] [0 2] [3 2] [3 0] [5 0] [5 5]");
        assert_eq!(results[1].route.serialize(), "[0 0] [5 0] [5 5]");
        assert_eq!(results[2].route.serialize(), "[0 0] [5 0] [5 5]");
        assert!(results[3].route.validate().is_ok());
        assert!(results[4].route.validate().is_ok());
    }
}
