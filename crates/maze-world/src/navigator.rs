//! Route requests against a [`World`].

use std::fmt;

use maze_core::Point;
use maze_paths::{
    Direction, Route, RouteFrame, Router, RouterKind, RouterResult, RoutingStruct,
    build_reversed_routing_tree,
};

use crate::world::World;

/// What to search and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Strategy to run.
    pub router: RouterKind,
    /// Search from the exit back to the start.
    pub reversed: bool,
}

/// One strategy result, tagged with its producer and target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavRoute {
    pub router: RouterKind,
    pub route: Route,
    /// Candidates offered at each route point.
    pub point_lists: Vec<Vec<Point>>,
    /// Window applied at each route point.
    pub frames: Vec<RouteFrame>,
    target: Point,
}

impl NavRoute {
    fn new(router: RouterKind, result: RouterResult, target: Point) -> Self {
        Self {
            router,
            route: result.route,
            point_lists: result.point_lists,
            frames: result.frames,
            target,
        }
    }

    /// The cell this route was searched toward.
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether the route ends on its target.
    pub fn is_found_target(&self) -> bool {
        self.route.is_finished(self.target)
    }

    /// `prefix` followed by an exit marker if the target was reached,
    /// otherwise an empty string.
    pub fn result_marker(&self, prefix: &str) -> String {
        if self.is_found_target() {
            format!("{prefix}\u{2705} (Exit)")
        } else {
            String::new()
        }
    }
}

impl fmt::Display for NavRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.route, self.result_marker(": "))
    }
}

/// Run the configured strategy on `world`.
///
/// Reachability graphs are built on demand, once per direction the
/// strategy asks for.
pub fn find_routes(world: &World, config: &NavConfig) -> Vec<NavRoute> {
    let (start, target) = if config.reversed {
        (world.exit(), world.start())
    } else {
        (world.start(), world.exit())
    };
    log::debug!("{}: {start} -> {target}", config.router);

    let graphs = |dir: Direction| match dir {
        Direction::Forward => maze_paths::build_routing_tree(world, start, target),
        Direction::Reverse => build_reversed_routing_tree(world, start, target),
    };
    let routes: Vec<NavRoute> = config
        .router
        .build_routes(&graphs, start, target, world.size())
        .into_iter()
        .map(|result| NavRoute::new(config.router, result, target))
        .collect();

    log::debug!(
        "{}: {} routes, {} reached",
        config.router,
        routes.len(),
        routes.iter().filter(|r| r.is_found_target()).count()
    );
    routes
}

/// The refined route: Fox's intersection merge with colinear runs
/// collapsed. `None` unless both Fox searches succeed.
pub fn find_best_route(world: &World) -> Option<NavRoute> {
    let config = NavConfig {
        router: RouterKind::Fox,
        reversed: false,
    };
    find_routes(world, &config).into_iter().nth(4)
}

/// The forward reachability graph from the world's start to its exit.
pub fn build_routing_tree(world: &World) -> RoutingStruct {
    maze_paths::build_routing_tree(world, world.start(), world.exit())
}
