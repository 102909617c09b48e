//! Convex hull with step replay (Andrew's monotone chain).
//!
//! Purpose
//! - Compute the hull of a grid point set and, alongside it, the ordered log
//!   of intermediate chain states the UI animates through. One snapshot is
//!   emitted after every push and every pop on either chain, plus a final
//!   snapshot holding the finished hull.
//!
//! Tie-break policy
//! - The pop condition uses `cross <= 0`, so collinear points are discarded:
//!   three exactly collinear points on an edge collapse to the two endpoints.

use crate::types::cross;
use crate::Vec2;

/// One snapshot of the construction state: current lower chain followed by
/// current upper chain. The last step of a run is the finished hull in CCW
/// order, vertices unique, with no closing duplicate.
pub type HullStep = Vec<Vec2<i64>>;

/// Compute the hull-step replay log for `points`.
///
/// Pure function; the input is not mutated and identical inputs produce
/// identical logs. Fewer than 3 points yield a degenerate (possibly empty)
/// final step rather than an error.
pub fn compute_hull_steps(points: &[Vec2<i64>]) -> Vec<HullStep> {
    let mut sorted = points.to_vec();
    // x ascending, ties by y. This ordering determines hull vertex order and
    // must stay deterministic.
    sorted.sort_by_key(|p| (p.x, p.y));

    let mut lower: Vec<Vec2<i64>> = Vec::with_capacity(sorted.len());
    let mut upper: Vec<Vec2<i64>> = Vec::with_capacity(sorted.len());
    let mut steps: Vec<HullStep> = Vec::new();

    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
            steps.push(snapshot(&lower, &upper));
        }
        lower.push(p);
        steps.push(snapshot(&lower, &upper));
    }

    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
            steps.push(snapshot(&lower, &upper));
        }
        upper.push(p);
        steps.push(snapshot(&lower, &upper));
    }

    // Each chain's last point duplicates the first point of the other chain.
    lower.pop();
    upper.pop();
    steps.push(snapshot(&lower, &upper));
    steps
}

/// Final hull only (last entry of the replay log).
pub fn compute_hull(points: &[Vec2<i64>]) -> Vec<Vec2<i64>> {
    compute_hull_steps(points).pop().unwrap_or_default()
}

#[inline]
fn snapshot(lower: &[Vec2<i64>], upper: &[Vec2<i64>]) -> HullStep {
    lower.iter().chain(upper.iter()).copied().collect()
}
