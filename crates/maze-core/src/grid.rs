//! Rectangular tile maps.
//!
//! [`Grid`] keeps one [`Tile`] per cell in a row-major `Vec`. Routing only
//! needs to tell walls from everything else, so the exit marker is just an
//! open tile that remembers what it is.

use crate::geom::Point;

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
    Exit,
}

impl Tile {
    /// Anything but a wall can be stood on.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// A `width` × `height` tile map with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Grid {
    /// An all-open grid. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            cells: vec![Tile::Open; (width * height) as usize],
        }
    }

    /// Dimensions as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Buffer index of an in-bounds point.
    fn offset(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// Tile at `p`, or `None` outside the map.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.offset(p).map(|i| self.cells[i])
    }

    /// Overwrite the tile at `p`. Points outside the map are ignored.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.offset(p) {
            self.cells[i] = tile;
        }
    }

    /// Inside the map and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// `(point, tile)` pairs, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Point::new(i as i32 % width, i as i32 / width), t))
    }
}
