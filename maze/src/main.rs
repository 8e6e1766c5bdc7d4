//! maze: print the routes each strategy finds through a map file.
//!
//! Usage: `maze <map-file> [hare|deer|hog|fox|wolf] [reversed]`

use std::process::ExitCode;

use maze_paths::RouterKind;
use maze_world::{NavConfig, World, build_routing_tree, find_routes};

const USAGE: &str = "usage: maze <map-file> [hare|deer|hog|fox|wolf] [reversed]";

fn parse_args(args: &[String]) -> Result<(String, NavConfig), Box<dyn std::error::Error>> {
    let [path, rest @ ..] = args else {
        return Err(USAGE.into());
    };
    let mut config = NavConfig::default();
    for arg in rest {
        if arg == "reversed" {
            config.reversed = true;
        } else {
            config.router = arg.parse::<RouterKind>()?;
        }
    }
    Ok((path.clone(), config))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, config) = parse_args(&args)?;
    let text = std::fs::read_to_string(&path)?;
    let world = World::parse(&text)?;
    log::debug!("loaded {path}");

    let size = world.size();
    println!("Map size: {}x{}", size.x, size.y);
    println!("Start position: {}", world.start());
    println!("Exit position: {}", world.exit());
    println!();

    let tree = build_routing_tree(&world);
    println!("Routing tree: {} nodes", tree.len());
    print!("{tree}");
    println!();

    let routes = find_routes(&world, &config);
    println!("Router {}: {} routes", config.router, routes.len());
    for (i, route) in routes.iter().enumerate() {
        let status = match route.route.validate() {
            Ok(()) => "ok".to_string(),
            Err(err) => err.to_string(),
        };
        println!("#{i} [{status}] {route}");
    }

    if routes.iter().any(|r| r.is_found_target()) {
        Ok(ExitCode::SUCCESS)
    } else {
        println!("No route reaches the exit");
        Ok(ExitCode::FAILURE)
    }
}
