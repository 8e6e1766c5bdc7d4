//! Corridor movement over a [`World`].
//!
//! From any cell a mover slides along its row or column until blocked. It
//! may stop only where its run crosses a perpendicular run at least two
//! cells long, or on the target when the target is in line of sight.

use maze_core::Point;
use maze_paths::{Move, MoveOracle};

use crate::world::World;

impl World {
    /// Lowest and highest `y` reachable by sliding vertically from `p`.
    pub fn vertical_run(&self, p: Point) -> (i32, i32) {
        let mut min = p.y;
        while self.is_open(Point::new(p.x, min - 1)) {
            min -= 1;
        }
        let mut max = p.y;
        while self.is_open(Point::new(p.x, max + 1)) {
            max += 1;
        }
        (min, max)
    }

    /// Lowest and highest `x` reachable by sliding horizontally from `p`.
    pub fn horizontal_run(&self, p: Point) -> (i32, i32) {
        let mut min = p.x;
        while self.is_open(Point::new(min - 1, p.y)) {
            min -= 1;
        }
        let mut max = p.x;
        while self.is_open(Point::new(max + 1, p.y)) {
            max += 1;
        }
        (min, max)
    }

    /// Whether `to` shares a row or column with `from` and every cell
    /// strictly between them is open. The endpoints are not checked.
    pub fn can_move_to(&self, from: Point, to: Point) -> bool {
        if from.x == to.x {
            let (a, b) = (from.y.min(to.y), from.y.max(to.y));
            (a + 1..b).all(|y| self.is_open(Point::new(from.x, y)))
        } else if from.y == to.y {
            let (a, b) = (from.x.min(to.x), from.x.max(to.x));
            (a + 1..b).all(|x| self.is_open(Point::new(x, from.y)))
        } else {
            false
        }
    }

    /// Turn points reachable from `from` in one movement, plus `target`
    /// when it is in line of sight.
    ///
    /// A turn point lies on `from`'s own row or column, inside `from`'s
    /// run on that axis (which must span at least two cells), and on a
    /// perpendicular run that also spans at least two cells. `from` itself
    /// is never offered as a turn point. Costs are informational: the
    /// target's cost is its axis distance, a turn point's the longer of
    /// the two runs it joins.
    pub fn find_next_moves(&self, from: Point, target: Point) -> Vec<Move> {
        let mut buf = Vec::new();
        self.push_next_moves(from, target, &mut buf);
        buf
    }

    fn push_next_moves(&self, from: Point, target: Point, buf: &mut Vec<Move>) {
        if self.can_move_to(from, target) {
            buf.push(Move {
                pos: target,
                cost: from.axis_distance(target),
            });
        }

        let (y_min, y_max) = self.vertical_run(from);
        if y_min < y_max {
            for y in (y_min..=y_max).filter(|&y| y != from.y) {
                let pos = Point::new(from.x, y);
                let (x_min, x_max) = self.horizontal_run(pos);
                if x_min < x_max {
                    let cost = (x_max - x_min).max(y_max - y_min);
                    buf.push(Move { pos, cost });
                }
            }
        }

        let (x_min, x_max) = self.horizontal_run(from);
        if x_min < x_max {
            for x in (x_min..=x_max).filter(|&x| x != from.x) {
                let pos = Point::new(x, from.y);
                let (y_min, y_max) = self.vertical_run(pos);
                if y_min < y_max {
                    let cost = (y_max - y_min).max(x_max - x_min);
                    buf.push(Move { pos, cost });
                }
            }
        }
    }
}

impl MoveOracle for World {
    fn size(&self) -> Point {
        World::size(self)
    }

    fn next_moves(&self, from: Point, target: Point, buf: &mut Vec<Move>) {
        self.push_next_moves(from, target, buf);
    }
}
