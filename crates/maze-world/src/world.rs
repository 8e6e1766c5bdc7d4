//! Maze worlds loaded from text.
//!
//! A [`World`] is a [`Grid`] plus a start and an exit cell. The text form
//! is one row per line:
//!
//! ```text
//! wwwwwwwwwwwww
//! w@        w w
//! w wwww wwww Q
//! w           w
//! wwwwwwwwwwwww
//! ```
//!
//! `w` is a wall, `@` the start, `Q` the exit, and any other character an
//! open cell.

use std::fmt;
use std::str::FromStr;

use maze_core::{Grid, Point, Tile};

pub const WALL: char = 'w';
pub const START: char = '@';
pub const EXIT: char = 'Q';

/// A grid with a start and an exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    grid: Grid,
    start: Point,
    exit: Point,
}

impl World {
    /// Create a world from a grid. The exit cell is marked on the grid.
    pub fn new(grid: Grid, start: Point, exit: Point) -> Self {
        let mut w = Self { grid, start, exit };
        w.set_exit(exit);
        w
    }

    /// Parse a world from its text form.
    ///
    /// Every line is trimmed and blank lines are skipped. Rows shorter than
    /// the widest one are padded with open cells. When a marker appears
    /// more than once, the last one in column-major order wins.
    pub fn parse(text: &str) -> Result<Self, WorldError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(WorldError::Empty);
        }

        let mut grid = Grid::new(width as i32, rows.len() as i32);
        let mut start = None;
        let mut exit = None;
        for x in 0..width {
            for (y, row) in rows.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match row.get(x).copied() {
                    Some(WALL) => grid.set(p, Tile::Wall),
                    Some(EXIT) => {
                        grid.set(p, Tile::Exit);
                        exit = Some(p);
                    }
                    Some(START) => start = Some(p),
                    _ => {}
                }
            }
        }

        let start = start.ok_or(WorldError::MissingStart)?;
        let exit = exit.ok_or(WorldError::MissingExit)?;
        log::debug!("world {}x{}: start {start}, exit {exit}", grid.width(), grid.height());
        Ok(Self { grid, start, exit })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Map size (width = x, height = y).
    pub fn size(&self) -> Point {
        self.grid.size()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Move the start. The grid is left untouched.
    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    /// Move the exit and mark it on the grid. The old exit cell keeps its
    /// marker.
    pub fn set_exit(&mut self, exit: Point) {
        self.exit = exit;
        self.grid.set(exit, Tile::Exit);
    }

    /// Whether `p` is inside the map and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.grid.is_open(p)
    }
}

impl FromStr for World {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors raised while loading a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The text holds no map rows.
    Empty,
    /// No `@` cell.
    MissingStart,
    /// No `Q` cell.
    MissingExit,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("world: no map rows"),
            Self::MissingStart => write!(f, "world: no start marker \u{201c}{START}\u{201d}"),
            Self::MissingExit => write!(f, "world: no exit marker \u{201c}{EXIT}\u{201d}"),
        }
    }
}

impl std::error::Error for WorldError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
        wwwwwwwwwwwww
        w@        w w
        w wwww wwww Q
        w           w
        wwwwwwwwwwwww
    ";

    #[test]
    fn parse_markers_and_size() {
        let w: World = MAP.parse().unwrap();
        assert_eq!(w.size(), Point::new(13, 5));
        assert_eq!(w.start(), Point::new(1, 1));
        assert_eq!(w.exit(), Point::new(12, 2));
        assert!(w.is_open(w.start()));
        assert!(w.is_open(w.exit()));
        assert_eq!(w.grid().at(w.exit()), Some(Tile::Exit));
        assert!(!w.is_open(Point::new(0, 0)));
        assert!(w.is_open(Point::new(11, 1)));
        assert!(!w.is_open(Point::new(13, 1)));
        assert!(!w.is_open(Point::new(-1, 1)));
    }

    #[test]
    fn short_rows_are_padded_open() {
        let w = World::parse("www\nw@Qwww\n\n   www  \n").unwrap();
        assert_eq!(w.size(), Point::new(6, 3));
        assert!(w.is_open(Point::new(4, 0)));
        assert!(w.is_open(Point::new(5, 2)));
        assert!(!w.is_open(Point::new(0, 2)));
        assert_eq!(w.start(), Point::new(1, 1));
        assert_eq!(w.exit(), Point::new(2, 1));
    }

    #[test]
    fn missing_parts() {
        assert_eq!(World::parse(""), Err(WorldError::Empty));
        assert_eq!(World::parse(" \n  \n"), Err(WorldError::Empty));
        assert_eq!(World::parse("w Q"), Err(WorldError::MissingStart));
        assert_eq!(World::parse("w@ "), Err(WorldError::MissingExit));
        assert_eq!(
            WorldError::MissingExit.to_string(),
            "world: no exit marker \u{201c}Q\u{201d}"
        );
    }

    #[test]
    fn set_start_and_exit() {
        let mut w: World = MAP.parse().unwrap();
        w.set_start(Point::new(6, 3));
        w.set_exit(Point::new(11, 1));
        assert_eq!(w.start(), Point::new(6, 3));
        assert_eq!(w.exit(), Point::new(11, 1));
        assert_eq!(w.grid().at(Point::new(11, 1)), Some(Tile::Exit));
    }

    #[test]
    fn new_marks_exit() {
        let w = World::new(Grid::new(4, 1), Point::new(0, 0), Point::new(3, 0));
        assert_eq!(w.grid().count(Tile::Exit), 1);
        assert_eq!(w.grid().count(Tile::Wall), 0);
    }
}
