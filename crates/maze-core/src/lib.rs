//! **maze-core** — shared types for corridor maze routing.
//!
//! Integer cell coordinates ([`Point`]) and the tile map ([`Grid`]) that
//! worlds are loaded into.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Grid, Tile};
