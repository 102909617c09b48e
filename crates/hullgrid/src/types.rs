//! Shared grid and geometry primitives.
//!
//! - `cross`: the one orientation test everything else builds on.
//! - `Cell`, `Grid`: row-major occupancy map, indexed `[row = y][col = x]`.
//!
//! Coordinate convention: a point's `x` field is the column and `y` the row.
//! The same mapping is applied for occupancy lookups, visited-tracking, and
//! parent-tracking in `path`; mixing conventions silently produces wrong or
//! empty paths.

use crate::Vec2;

/// Orientation of the triple `(o, a, b)`: positive for a counter-clockwise
/// turn, zero for collinear, negative for clockwise.
#[inline]
pub fn cross(o: Vec2<i64>, a: Vec2<i64>, b: Vec2<i64>) -> i64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Occupancy of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
}

/// Row-major occupancy map.
///
/// Dimensions travel with the value; callers pick them per scenario (the
/// reference UI uses 20×20) and rebuild the grid per path query.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// All-free grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            cells: vec![Cell::Free; width * height],
            width,
            height,
        }
    }

    /// Build from explicit rows (`rows[y][x]`). Ragged rows are a caller
    /// contract violation and fail fast.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Grid {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == width),
            "ragged occupancy rows"
        );
        Grid {
            cells: rows.iter().flatten().copied().collect(),
            width,
            height,
        }
    }

    /// All-free grid with the listed cells blocked. Out-of-range obstacles
    /// are ignored.
    pub fn from_obstacles(width: usize, height: usize, obstacles: &[Vec2<i64>]) -> Grid {
        let mut g = Grid::new(width, height);
        for &p in obstacles {
            if g.in_bounds(p) {
                g.set(p, Cell::Blocked);
            }
        }
        g
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, p: Vec2<i64>) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Occupancy at `p`. Panics out of bounds; check `in_bounds` first.
    #[inline]
    pub fn at(&self, p: Vec2<i64>) -> Cell {
        self.cells[p.y as usize * self.width + p.x as usize]
    }

    #[inline]
    pub fn set(&mut self, p: Vec2<i64>, cell: Cell) {
        self.cells[p.y as usize * self.width + p.x as usize] = cell;
    }
}
