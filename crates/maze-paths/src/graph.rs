//! Reachability graphs over turn points.
//!
//! [`build_routing_tree`] explores a [`MoveOracle`] breadth-first from a
//! start cell and records, for every turn point it dequeues, the set of
//! turn points reachable in one movement. The target is a sink: it is
//! recorded as an edge but never expanded.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use maze_core::Point;

use crate::route::ValidationError;
use crate::traits::{Move, MoveOracle};

/// Membership set of points.
pub type PointRegistry = HashSet<Point>;

/// Composite key used for the canonical adjacency order.
#[inline]
pub fn canonical_key(p: Point) -> i32 {
    p.x * 10 + p.y
}

/// Sort points into canonical order. Points with equal keys fall back to
/// coordinate order so the result never depends on input order.
pub fn sort_canonical(points: &mut [Point]) {
    points.sort_by_key(|&p| (canonical_key(p), p));
}

/// Adjacency mapping from a turn point to the points reachable from it in
/// one movement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingStruct {
    nodes: HashMap<Point, Vec<Point>>,
}

impl RoutingStruct {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the adjacency list of `node`, replacing any previous one.
    pub fn insert(&mut self, node: Point, next: Vec<Point>) {
        self.nodes.insert(node, next);
    }

    /// Adjacency list of `node`; empty for unknown nodes.
    pub fn get(&self, node: Point) -> &[Point] {
        self.nodes.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is a key of the graph.
    pub fn contains(&self, node: Point) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no keys.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys in canonical order.
    pub fn sorted_keys(&self) -> Vec<Point> {
        let mut keys: Vec<Point> = self.nodes.keys().copied().collect();
        sort_canonical(&mut keys);
        keys
    }

    /// Sort every adjacency list into canonical order.
    pub fn sort_points_in_values(&mut self) {
        for points in self.nodes.values_mut() {
            sort_canonical(points);
        }
    }

    /// Check that every edge changes at most one axis. Nodes are visited in
    /// canonical order, so the reported edge is reproducible.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for node in self.sorted_keys() {
            if let Some(&to) = self.get(node).iter().find(|&&to| !node.is_colinear(to)) {
                return Err(ValidationError::GraphEdge { node, to });
            }
        }
        Ok(())
    }

    /// Breadth-first search over the graph: whether `to` can be reached
    /// from `from` along recorded edges.
    pub fn connects(&self, from: Point, to: Point) -> bool {
        let mut seen = PointRegistry::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return true;
            }
            for &n in self.get(p) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        false
    }
}

impl fmt::Display for RoutingStruct {
    /// One line per node in canonical order: `  (x, y) => [(x, y), …]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.sorted_keys() {
            let mut next = self.get(node).to_vec();
            sort_canonical(&mut next);
            write!(f, "  {node} => [")?;
            for (i, p) in next.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{p}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Explore `oracle` breadth-first from `start` toward `target`.
///
/// Every dequeued point is expanded once; each move it offers becomes an
/// edge, and moves not yet queued are queued unless they are the target.
/// The target key is always present and maps to an empty list unless the
/// start is the target. Adjacency lists come back in canonical order.
pub fn build_routing_tree<O: MoveOracle>(oracle: &O, start: Point, target: Point) -> RoutingStruct {
    let mut tree = RoutingStruct::new();
    tree.insert(target, Vec::new());

    let mut queue: VecDeque<Point> = VecDeque::from([start]);
    let mut queued = PointRegistry::from([start]);
    let mut next = BTreeSet::new();
    let mut moves: Vec<Move> = Vec::new();

    while let Some(point) = queue.pop_front() {
        moves.clear();
        oracle.next_moves(point, target, &mut moves);

        for mv in moves.iter() {
            next.insert(mv.pos);
            if mv.pos == target || queued.contains(&mv.pos) {
                continue;
            }
            queued.insert(mv.pos);
            queue.push_back(mv.pos);
        }

        if !next.is_empty() {
            tree.insert(point, std::mem::take(&mut next).into_iter().collect());
        }
    }

    tree.sort_points_in_values();
    log::debug!(
        "routing tree {start} -> {target}: {} nodes, {} visited",
        tree.len(),
        queued.len()
    );
    tree
}

/// [`build_routing_tree`] with start and target swapped.
pub fn build_reversed_routing_tree<O: MoveOracle>(
    oracle: &O,
    start: Point,
    target: Point,
) -> RoutingStruct {
    build_routing_tree(oracle, target, start)
}
