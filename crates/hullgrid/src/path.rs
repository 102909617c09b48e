//! Boundary-constrained shortest path on an occupancy grid (BFS).
//!
//! A neighbor cell is expandable iff it is in bounds, unvisited, free, and
//! contained by the boundary polygon under the configured policy. Neighbor
//! order is fixed (right, down, left, up), so ties between equal-length
//! paths resolve deterministically. The goal test happens on dequeue, which
//! with BFS guarantees minimum hop count.
//!
//! Diagnostics go through an injectable trace callback instead of direct
//! output, so the search stays free of side effects while tests and callers
//! can still watch it step by step.

use std::collections::VecDeque;

use crate::contain::{contains_with, Containment};
use crate::types::{Cell, Grid};
use crate::Vec2;

/// Fixed neighbor priority: right, down, left, up (in `(dx, dy)`).
const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    pub containment: Containment,
}

/// Input precondition failures. Reported through the trace channel only;
/// the return value is an empty path either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reject {
    BoundaryTooSmall,
    StartOutOfBounds,
    EndOutOfBounds,
}

/// Why a neighbor cell was not expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    Visited,
    Blocked,
    OutsideBoundary,
}

/// Diagnostic events emitted during a search. Purely observational; the
/// result never depends on the consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Rejected(Reject),
    Expanded(Vec2<i64>),
    Skipped(Vec2<i64>, Skip),
    Found { hops: usize },
    Exhausted { explored: usize },
}

/// Shortest 4-connected path from `start` to `end` inside `boundary`,
/// avoiding blocked cells. Empty vec means invalid input or no path; the
/// caller distinguishes the two via its own precondition checks.
pub fn find_path(
    grid: &Grid,
    start: Vec2<i64>,
    end: Vec2<i64>,
    boundary: &[Vec2<i64>],
) -> Vec<Vec2<i64>> {
    find_path_with(grid, start, end, boundary, SearchCfg::default(), |_| {})
}

/// [`find_path`] with an explicit configuration and trace callback.
///
/// `start` itself is exempt from the obstacle/boundary predicate; callers
/// pre-validate their endpoints.
pub fn find_path_with(
    grid: &Grid,
    start: Vec2<i64>,
    end: Vec2<i64>,
    boundary: &[Vec2<i64>],
    cfg: SearchCfg,
    mut trace: impl FnMut(TraceEvent),
) -> Vec<Vec2<i64>> {
    if boundary.len() < 3 {
        trace(TraceEvent::Rejected(Reject::BoundaryTooSmall));
        return Vec::new();
    }
    if !grid.in_bounds(start) {
        trace(TraceEvent::Rejected(Reject::StartOutOfBounds));
        return Vec::new();
    }
    if !grid.in_bounds(end) {
        trace(TraceEvent::Rejected(Reject::EndOutOfBounds));
        return Vec::new();
    }

    let w = grid.width();
    let idx = |p: Vec2<i64>| p.y as usize * w + p.x as usize;

    // Fresh per call; nothing is shared between invocations.
    let mut visited = vec![false; w * grid.height()];
    let mut parent: Vec<Option<u32>> = vec![None; w * grid.height()];
    let mut queue: VecDeque<Vec2<i64>> = VecDeque::new();

    visited[idx(start)] = true;
    queue.push_back(start);
    let mut explored = 0usize;

    while let Some(cur) = queue.pop_front() {
        explored += 1;
        trace(TraceEvent::Expanded(cur));
        if cur == end {
            let path = reconstruct(&parent, start, end, w);
            trace(TraceEvent::Found {
                hops: path.len().saturating_sub(1),
            });
            return path;
        }
        for (dx, dy) in NEIGHBORS {
            let next = Vec2::new(cur.x + dx, cur.y + dy);
            if !grid.in_bounds(next) {
                continue;
            }
            if visited[idx(next)] {
                trace(TraceEvent::Skipped(next, Skip::Visited));
                continue;
            }
            if grid.at(next) == Cell::Blocked {
                trace(TraceEvent::Skipped(next, Skip::Blocked));
                continue;
            }
            if !contains_with(next, boundary, cfg.containment) {
                trace(TraceEvent::Skipped(next, Skip::OutsideBoundary));
                continue;
            }
            visited[idx(next)] = true;
            parent[idx(next)] = Some(idx(cur) as u32);
            queue.push_back(next);
        }
    }

    trace(TraceEvent::Exhausted { explored });
    Vec::new()
}

/// Follow parent links from `end` back to `start`, then reverse.
fn reconstruct(parent: &[Option<u32>], start: Vec2<i64>, end: Vec2<i64>, w: usize) -> Vec<Vec2<i64>> {
    let idx = |p: Vec2<i64>| p.y as usize * w + p.x as usize;
    let point = |i: usize| Vec2::new((i % w) as i64, (i / w) as i64);
    let mut path = vec![end];
    let mut cur = idx(end);
    while cur != idx(start) {
        match parent[cur] {
            Some(prev) => {
                cur = prev as usize;
                path.push(point(cur));
            }
            // Unreachable when called after a dequeue hit; return empty
            // rather than looping.
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
