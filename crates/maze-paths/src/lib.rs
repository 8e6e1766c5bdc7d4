//! Route search over corridor mazes.
//!
//! A mover slides along open runs and turns only where a horizontal and a
//! vertical run cross. This crate works on that model through a
//! [`MoveOracle`] and provides:
//!
//! - **Reachability graphs** of turn points ([`build_routing_tree`])
//! - **Strategies** that walk a graph toward a target ([`Hare`], [`Deer`],
//!   [`Hog`], [`Fox`], [`Wolf`], selected by [`RouterKind`])
//! - **Refinements** of finished routes ([`shortest_by_intersection`],
//!   [`unlooping`], [`unlooping_line`], [`short_by_interval`])
//!
//! # Strategies
//!
//! | Strategy | Frames | Backtracking | Directions | Results |
//! |---|---|---|---|---|
//! | [`Hare`] | narrowing | no | forward | 1 |
//! | [`Deer`] | none | no | forward | 1 |
//! | [`Hog`] | whole grid | exhaustive | forward | at most one per target predecessor |
//! | [`Fox`] | none | first completion | both | up to 5 |
//! | [`Wolf`] | narrowing | first completion | both | up to 3 |
//!
//! Graphs are read-only to every strategy, and each search owns its
//! exclusion set and traces.

mod frame;
mod graph;
mod refine;
mod route;
mod routers;
mod search;
mod traits;

pub use frame::RouteFrame;
pub use graph::{
    PointRegistry, RoutingStruct, build_reversed_routing_tree, build_routing_tree, canonical_key,
    sort_canonical,
};
pub use refine::{short_by_interval, shortest_by_intersection, unlooping, unlooping_line};
pub use route::{ParseRouteError, Route, ValidationError};
pub use routers::{Deer, Fox, Hare, Hog, ParseRouterError, RouterKind, Wolf};
pub use search::{RouterResult, filter_not_in, full_frame, narrow_frame, nearest_to};
pub use traits::{Direction, Move, MoveOracle, Router};
