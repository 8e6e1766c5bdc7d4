//! Post-processing of raw search routes.
//!
//! None of these functions check colinearity of their output; callers that
//! need a valid route run [`Route::validate`] on the result.

use maze_core::Point;

use crate::route::Route;

/// Splice two routes at their shared points, keeping the shorter segment
/// between consecutive intersections.
///
/// `a` and `b` are swapped so that `a` is not longer than `b`. Only the
/// interior points of `a` are tried as intersections, and an intersection
/// whose index in `b` lies behind the previous one ends the scan. Segment
/// length is counted in points. If no intersection is found the shorter
/// route comes back unchanged.
pub fn shortest_by_intersection(a: &Route, b: &Route) -> Route {
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };
    if a.len() < 3 {
        return a.clone();
    }

    let (pa, pb) = (a.points(), b.points());
    let index_b = b.to_point_map();
    let (mut last_a, mut last_b) = (0, 0);
    let mut matched = false;
    let mut out: Vec<Point> = Vec::with_capacity(a.len());

    for (ia, p) in pa.iter().enumerate().take(pa.len() - 1).skip(1) {
        let Some(&ib) = index_b.get(p) else {
            continue;
        };
        if ib < last_b {
            break;
        }
        if ib - last_b < ia - last_a {
            out.extend_from_slice(&pb[last_b..ib]);
        } else {
            out.extend_from_slice(&pa[last_a..ia]);
        }
        last_a = ia;
        last_b = ib;
        matched = true;
    }

    if !matched {
        return a.clone();
    }

    let (tail_a, tail_b) = (&pa[last_a..], &pb[last_b..]);
    if tail_a.len() < tail_b.len() {
        out.extend_from_slice(tail_a);
    } else {
        out.extend_from_slice(tail_b);
    }
    Route::from(out)
}

/// Loop erasure: whenever the current point recurs later in the route,
/// everything up to its last occurrence is dropped.
pub fn unlooping(route: &Route) -> Route {
    let items = route.points();
    let mut out = Vec::with_capacity(items.len());
    let mut i = 0;
    while i < items.len() {
        let node = items[i];
        if let Some(off) = items[i + 1..].iter().rposition(|&p| p == node) {
            i += off + 1;
        }
        out.push(node);
        i += 1;
    }
    Route::from(out)
}

/// Run of consecutive points sharing one coordinate.
#[derive(Debug, Default)]
struct Run {
    value: Option<i32>,
    begin: usize,
    repeat: usize,
}

impl Run {
    /// Feed the coordinate of point `i`. Returns the start index of a run
    /// longer than two points that `i` has just closed.
    fn advance(&mut self, value: i32, i: usize) -> Option<usize> {
        let closed = if self.value != Some(value) {
            let closed = (self.repeat > 2).then_some(self.begin);
            self.repeat = 1;
            self.begin = i;
            closed
        } else {
            self.repeat += 1;
            None
        };
        self.value = Some(value);
        closed
    }
}

/// Emit `items[begin..=end]` as its two endpoints, after whatever of
/// `items[last_added..begin]` precedes it.
///
/// A run may start before `last_added` when its first point is the corner
/// already emitted by the previous collapse, or, with repeated consecutive
/// points, somewhere earlier still. Either way the last emitted point lies on
/// the run, so only `items[end]` is still owed.
fn collapse(out: &mut Vec<Point>, items: &[Point], last_added: usize, begin: usize, end: usize) {
    if begin >= last_added {
        out.extend_from_slice(&items[last_added..=begin]);
    }
    if end >= last_added {
        out.push(items[end]);
    }
}

/// Collapse every run of more than two consecutive points on one row, or
/// on one column, to the run's first and last point.
///
/// Rows and columns are tracked in the same pass, so a single point can
/// close both kinds of run. A run still open at the end of the route is
/// collapsed as well.
pub fn unlooping_line(route: &Route) -> Route {
    let items = route.points();
    let mut out: Vec<Point> = Vec::with_capacity(items.len());
    let mut row = Run::default();
    let mut col = Run::default();
    let mut last_added = 0;

    for (i, p) in items.iter().enumerate() {
        for closed in [row.advance(p.y, i), col.advance(p.x, i)] {
            if let Some(begin) = closed {
                collapse(&mut out, items, last_added, begin, i - 1);
                last_added = i;
            }
        }
    }

    let open = [&row, &col]
        .into_iter()
        .filter(|run| run.repeat > 2)
        .map(|run| run.begin)
        .min();
    match open {
        Some(begin) => collapse(&mut out, items, last_added, begin, items.len() - 1),
        None => out.extend_from_slice(&items[last_added..]),
    }
    Route::from(out)
}

/// Summed frame spans of `points[from..=to]`.
fn interval_cost(points: &[Point], from: usize, to: usize) -> i32 {
    points[from..=to]
        .windows(2)
        .map(|w| w[0].axis_distance(w[1]))
        .sum()
}

/// Splice two routes at their shared points, keeping the segment with the
/// smaller summed frame span between consecutive intersections.
///
/// Both routes must start at the same point for a splice to be attempted;
/// otherwise, or when they share no later point, the cheaper route is
/// returned whole. Ties favour `a`.
pub fn short_by_interval(a: &Route, b: &Route) -> Route {
    let (pa, pb) = (a.points(), b.points());
    let whole = || {
        let cost_a = a.to_frames().iter().map(|f| f.span()).sum::<i32>();
        let cost_b = b.to_frames().iter().map(|f| f.span()).sum::<i32>();
        if cost_b < cost_a { b.clone() } else { a.clone() }
    };
    if pa.is_empty() || pb.is_empty() || pa[0] != pb[0] {
        return whole();
    }

    let index_b = b.to_point_map();
    let (mut last_a, mut last_b) = (0, 0);
    let mut matched = false;
    let mut out: Vec<Point> = Vec::with_capacity(pa.len());

    for (ia, p) in pa.iter().enumerate().skip(1) {
        let Some(&ib) = index_b.get(p) else {
            continue;
        };
        if ib < last_b {
            break;
        }
        if interval_cost(pb, last_b, ib) < interval_cost(pa, last_a, ia) {
            out.extend_from_slice(&pb[last_b..ib]);
        } else {
            out.extend_from_slice(&pa[last_a..ia]);
        }
        last_a = ia;
        last_b = ib;
        matched = true;
    }

    if !matched {
        return whole();
    }

    let (tail_a, tail_b) = (&pa[last_a..], &pb[last_b..]);
    let cost_a = interval_cost(tail_a, 0, tail_a.len() - 1);
    let cost_b = interval_cost(tail_b, 0, tail_b.len() - 1);
    out.extend_from_slice(if cost_b < cost_a { tail_b } else { tail_a });
    log::trace!("short_by_interval: {} + {} -> {}", pa.len(), pb.len(), out.len());
    Route::from(out)
}
