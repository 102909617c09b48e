//! Scenario sanity checks and text rendering for debug tooling.
//!
//! Pure values in, values out; nothing here prints. Callers (the CLI, or a
//! test) decide what to do with the findings.

use crate::contain::contains;
use crate::types::{Cell, Grid};
use crate::Vec2;

/// True when the hull is a usable boundary and every item lies inside or on
/// it.
pub fn hull_encloses(hull: &[Vec2<i64>], items: &[Vec2<i64>]) -> bool {
    hull.len() >= 3 && items.iter().all(|&p| contains(p, hull))
}

/// Indices of items sitting on blocked cells. Empty for a well-formed
/// scenario.
pub fn blocked_items(grid: &Grid, items: &[Vec2<i64>]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|&(_, &p)| grid.in_bounds(p) && grid.at(p) == Cell::Blocked)
        .map(|(i, _)| i)
        .collect()
}

/// Render the grid one row per line: `o` item, `*` path cell, `█` blocked,
/// `·` free. Items win over path cells, path cells over occupancy.
pub fn render(grid: &Grid, items: &[Vec2<i64>], path: &[Vec2<i64>]) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            let p = Vec2::new(x, y);
            let ch = if items.contains(&p) {
                'o'
            } else if path.contains(&p) {
                '*'
            } else if grid.at(p) == Cell::Blocked {
                '█'
            } else {
                '·'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_marks_layers() {
        let grid = Grid::from_obstacles(3, 2, &[Vec2::new(2, 1)]);
        let items = [Vec2::new(0, 0)];
        let path = [Vec2::new(0, 0), Vec2::new(1, 0)];
        assert_eq!(render(&grid, &items, &path), "o*·\n··█\n");
    }

    #[test]
    fn blocked_items_reports_collisions() {
        let grid = Grid::from_obstacles(4, 4, &[Vec2::new(1, 1), Vec2::new(2, 2)]);
        let items = [Vec2::new(0, 0), Vec2::new(2, 2), Vec2::new(3, 3)];
        assert_eq!(blocked_items(&grid, &items), vec![1]);
    }
}
