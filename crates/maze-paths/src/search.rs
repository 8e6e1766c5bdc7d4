//! Greedy descent and backtracking over a [`RoutingStruct`].
//!
//! Every strategy is a configuration of [`Search`]: which frame policy
//! prunes candidates, whether dead ends are backtracked, and whether the
//! search stops at the first completion. The graph itself is never
//! modified; candidates are filtered instead.

use maze_core::Point;

use crate::frame::RouteFrame;
use crate::graph::{PointRegistry, RoutingStruct};
use crate::route::Route;

/// A route together with the decisions that produced it.
///
/// `point_lists[i]` holds the candidates offered at `route[i]`, and
/// `frames[i]` the window used when choosing `route[i + 1]`. Both exist
/// for replay and debugging only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterResult {
    pub route: Route,
    pub point_lists: Vec<Vec<Point>>,
    pub frames: Vec<RouteFrame>,
}

impl RouterResult {
    /// A result with no recorded decisions.
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    /// Whether the route ends at `target`.
    pub fn reached(&self, target: Point) -> bool {
        self.route.is_finished(target)
    }

    /// Reverse the route. The decision traces stay in search order.
    pub fn reverse(&mut self) {
        self.route.reverse();
    }
}

// ---------------------------------------------------------------------------
// Selection helpers
// ---------------------------------------------------------------------------

/// Points of `points` that are not already in `route`.
pub fn filter_not_in(points: &[Point], route: &Route) -> Vec<Point> {
    let visited = route.to_point_map();
    points
        .iter()
        .copied()
        .filter(|p| !visited.contains_key(p))
        .collect()
}

/// The point nearest to `target` by straight-line distance. Ties go to the
/// earliest point.
pub fn nearest_to(points: &[Point], target: Point) -> Option<Point> {
    let (&first, rest) = points.split_first()?;
    let mut best = first;
    let mut best_dist = first.distance(target);
    for &p in rest {
        let d = p.distance(target);
        if d < best_dist {
            best = p;
            best_dist = d;
        }
    }
    Some(best)
}

/// Window covering the whole grid.
pub fn full_frame(size: Point) -> RouteFrame {
    RouteFrame::new(-1, -1, size.x, size.y)
}

/// Window for a newly chosen `p`: on each axis, bounded by the nearest
/// route point on the same line beyond `p`, or by the grid edge.
pub fn narrow_frame(route: &Route, p: Point, size: Point) -> RouteFrame {
    let (mut min_x, mut max_x) = (-1, size.x);
    let (mut min_y, mut max_y) = (-1, size.y);
    for &q in route.points() {
        if q == p {
            continue;
        }
        if q.y == p.y {
            if q.x > p.x {
                max_x = max_x.min(q.x);
            } else {
                min_x = min_x.max(q.x);
            }
        }
        if q.x == p.x {
            if q.y > p.y {
                max_y = max_y.min(q.y);
            } else {
                min_y = min_y.max(q.y);
            }
        }
    }
    RouteFrame::new(min_x, min_y, max_x, max_y)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// How candidates are windowed before nearest-point selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FramePolicy {
    /// No window, no frames recorded.
    Off,
    /// Every step records and applies the whole-grid window.
    FullField,
    /// Every step records a window narrowed around the chosen point.
    Narrowing,
}

/// When a backtracking search stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    First,
    All,
}

/// Decision traces, kept index-aligned with the active route.
#[derive(Debug, Clone, Default)]
struct Trace {
    point_lists: Vec<Vec<Point>>,
    frames: Vec<RouteFrame>,
}

impl Trace {
    fn last_frame(&self, size: Point) -> RouteFrame {
        self.frames.last().copied().unwrap_or_else(|| full_frame(size))
    }

    fn truncate(&mut self, len: usize) {
        self.point_lists.truncate(len);
        self.frames.truncate(len);
    }

    fn snapshot(&self, route: &Route) -> RouterResult {
        RouterResult {
            route: route.clone(),
            point_lists: self.point_lists.clone(),
            frames: self.frames.clone(),
        }
    }
}

/// One search over one graph. Owns its exclusion set and traces.
pub(crate) struct Search<'a> {
    graph: &'a RoutingStruct,
    start: Point,
    target: Point,
    size: Point,
    frames: FramePolicy,
    excluded: PointRegistry,
    trace: Trace,
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        graph: &'a RoutingStruct,
        start: Point,
        target: Point,
        size: Point,
        frames: FramePolicy,
    ) -> Self {
        Self {
            graph,
            start,
            target,
            size,
            frames,
            excluded: PointRegistry::new(),
            trace: Trace::default(),
        }
    }

    /// A single greedy descent from the start. The route ends at the target
    /// or at the first dead end.
    pub(crate) fn descend_once(mut self) -> RouterResult {
        let mut route = Route::new();
        self.descend(&mut route, self.start);
        self.trace.snapshot(&route)
    }

    /// Depth-first search with a permanent exclusion set.
    ///
    /// On a dead end the tail is popped and excluded, its predecessor is
    /// popped too and the descent resumes from it. After a completion the
    /// target is popped without being excluded and its predecessor is
    /// treated as the dead point. Every backtrack excludes one new point,
    /// so the search ends once the route shrinks to a single point.
    pub(crate) fn run(mut self, completion: Completion) -> Vec<RouterResult> {
        let mut results = Vec::new();
        let mut route = Route::new();
        let mut point = self.start;

        loop {
            self.descend(&mut route, point);

            if route.is_finished(self.target) {
                log::trace!("completion #{}: {route}", results.len());
                results.push(self.trace.snapshot(&route));
                if completion == Completion::First {
                    break;
                }
                route.pop();
            }

            if route.len() <= 1 {
                break;
            }
            let dead = route.pop();
            self.excluded.insert(dead);
            point = route.pop();
            self.trace.truncate(route.len());
            log::trace!(
                "backtrack: dead {dead}, resume {point}, {} excluded",
                self.excluded.len()
            );
        }
        results
    }

    fn descend(&mut self, route: &mut Route, mut point: Point) {
        loop {
            route.push(point);
            if point == self.target {
                return;
            }
            match self.select(route, point) {
                Some(next) => point = next,
                None => return,
            }
        }
    }

    fn select(&mut self, route: &Route, from: Point) -> Option<Point> {
        let candidates: Vec<Point> = self
            .graph
            .get(from)
            .iter()
            .copied()
            .filter(|p| !self.excluded.contains(p))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        self.trace.point_lists.push(candidates.clone());

        let frame = match self.frames {
            FramePolicy::Off => None,
            FramePolicy::FullField | FramePolicy::Narrowing => {
                Some(self.trace.last_frame(self.size))
            }
        };
        let windowed = match frame {
            Some(frame) => frame.filter(&candidates),
            None => candidates,
        };
        let open = filter_not_in(&windowed, route);
        let next = nearest_to(&open, self.target)?;

        match self.frames {
            FramePolicy::Off => {}
            FramePolicy::FullField => self.trace.frames.push(full_frame(self.size)),
            FramePolicy::Narrowing => {
                self.trace
                    .frames
                    .push(narrow_frame(route, next, self.size));
            }
        }
        match frame {
            Some(frame) => log::trace!("{from} -> {next} of {open:?} within {frame}"),
            None => log::trace!("{from} -> {next} of {open:?}"),
        }
        Some(next)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Build a graph from an adjacency table, sorted canonically.
    pub(crate) fn graph(edges: &[((i32, i32), &[(i32, i32)])]) -> RoutingStruct {
        let mut g = RoutingStruct::new();
        for (from, to) in edges {
            g.insert(Point::from(*from), to.iter().copied().map(Point::from).collect());
        }
        g.sort_points_in_values();
        g
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let pts = [p(0, 2), p(2, 0), p(1, 1)];
        assert_eq!(nearest_to(&pts, p(0, 0)), Some(p(1, 1)));
        assert_eq!(nearest_to(&pts[..2], p(0, 0)), Some(p(0, 2)));
        assert_eq!(nearest_to(&[], p(0, 0)), None);
    }

    #[test]
    fn filter_not_in_route() {
        let route = Route::from_pairs(&[(0, 0), (0, 4)]);
        let pts = [p(0, 4), p(4, 4), p(0, 0), p(9, 4)];
        assert_eq!(filter_not_in(&pts, &route), vec![p(4, 4), p(9, 4)]);
    }

    #[test]
    fn narrow_frame_stops_at_visited_lines() {
        // Route so far runs along row 5 and column 8; the new point (8, 2)
        // shares column 8 with (8, 5), which bounds it from below.
        let route = Route::from_pairs(&[(1, 5), (8, 5)]);
        let frame = narrow_frame(&route, p(8, 2), p(20, 10));
        assert_eq!(frame, RouteFrame::new(-1, -1, 20, 5));

        let route = Route::from_pairs(&[(1, 5), (8, 5), (8, 2)]);
        let frame = narrow_frame(&route, p(4, 2), p(20, 10));
        assert_eq!(frame, RouteFrame::new(-1, -1, 8, 10));
        let frame = narrow_frame(&route, p(4, 5), p(20, 10));
        assert_eq!(frame, RouteFrame::new(1, -1, 8, 10));
    }

    #[test]
    fn full_frame_admits_every_cell() {
        let frame = full_frame(p(3, 2));
        assert!(frame.contains_strictly(p(0, 0)));
        assert!(frame.contains_strictly(p(2, 1)));
        assert!(!frame.contains_strictly(p(3, 1)));
    }

    #[test]
    fn descend_stops_at_dead_end() {
        let g = graph(&[((0, 0), &[(0, 3)]), ((0, 3), &[(0, 0)]), ((5, 5), &[])]);
        let result = Search::new(&g, p(0, 0), p(5, 5), p(6, 6), FramePolicy::Off).descend_once();
        assert_eq!(result.route, Route::from_pairs(&[(0, 0), (0, 3)]));
        assert!(!result.reached(p(5, 5)));
        assert_eq!(result.point_lists, vec![vec![p(0, 3)], vec![p(0, 0)]]);
        assert!(result.frames.is_empty());
    }

    #[test]
    fn backtracking_keeps_traces_aligned() {
        // (0,5) is nearer to the target than (5,0) but dead-ends.
        let g = graph(&[
            ((0, 0), &[(0, 5), (5, 0)]),
            ((0, 5), &[(0, 0)]),
            ((5, 0), &[(5, 6)]),
            ((5, 6), &[]),
        ]);
        let results =
            Search::new(&g, p(0, 0), p(5, 6), p(7, 7), FramePolicy::FullField).run(Completion::All);
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.route, Route::from_pairs(&[(0, 0), (5, 0), (5, 6)]));
        assert_eq!(r.frames.len(), r.route.len() - 1);
        assert_eq!(r.point_lists.len(), r.route.len() - 1);
        assert_eq!(r.point_lists[0], vec![p(5, 0)]);
    }

    #[test]
    fn all_completions_are_distinct() {
        let g = graph(&[
            ((0, 0), &[(0, 3), (3, 0)]),
            ((0, 3), &[(3, 3)]),
            ((3, 0), &[(3, 3)]),
            ((3, 3), &[]),
        ]);
        let results =
            Search::new(&g, p(0, 0), p(3, 3), p(4, 4), FramePolicy::Off).run(Completion::All);
        let routes: Vec<String> = results.iter().map(|r| r.route.serialize()).collect();
        assert_eq!(routes, vec!["[0 0] [0 3] [3 3]", "[0 0] [3 0] [3 3]"]);
    }

    #[test]
    fn start_equal_to_target() {
        let g = graph(&[((2, 2), &[(2, 5)])]);
        let results =
            Search::new(&g, p(2, 2), p(2, 2), p(6, 6), FramePolicy::Off).run(Completion::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route, Route::from_pairs(&[(2, 2)]));
    }
}
