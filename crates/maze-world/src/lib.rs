//! **maze-world** — maze maps and the route navigator.
//!
//! A [`World`] is loaded from text and implements
//! [`MoveOracle`](maze_paths::MoveOracle) with corridor movement. The
//! [`navigator`] runs any strategy from `maze-paths` against it.

pub mod moves;
pub mod navigator;
pub mod world;

pub use navigator::{NavConfig, NavRoute, build_routing_tree, find_best_route, find_routes};
pub use world::{World, WorldError};
