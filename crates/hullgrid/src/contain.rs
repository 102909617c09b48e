//! Point-in-polygon on integer coordinates (ray casting, exact).
//!
//! Why exact
//! - Grid cells sit exactly on hull edges all the time, so the parity test
//!   alone is unreliable there; an explicit on-edge check is ORed in. All
//!   comparisons are integer cross-multiplications, so there is no epsilon
//!   in the slope denominator; horizontal edges are a guarded branch.
//!
//! Polygon representation
//! - The vertex sequence is treated as implicitly closed. Callers may append
//!   a duplicate closing vertex; the resulting zero-length edge contributes
//!   neither a crossing nor a double-processed edge.

use crate::types::cross;
use crate::Vec2;

/// Whether boundary cells count as contained. `BoundaryInclusive` matches
/// the pathfinder's validity predicate; `Interior` is the strict variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Containment {
    #[default]
    BoundaryInclusive,
    Interior,
}

/// Boundary-inclusive containment: true if `p` is strictly inside `polygon`
/// or lies exactly on one of its edges. Fewer than 3 vertices is `false`,
/// never an error.
pub fn contains(p: Vec2<i64>, polygon: &[Vec2<i64>]) -> bool {
    contains_with(p, polygon, Containment::BoundaryInclusive)
}

/// Containment under an explicit boundary policy.
pub fn contains_with(p: Vec2<i64>, polygon: &[Vec2<i64>], policy: Containment) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    match policy {
        Containment::BoundaryInclusive => ray_parity(p, polygon) || on_boundary(p, polygon),
        Containment::Interior => ray_parity(p, polygon) && !on_boundary(p, polygon),
    }
}

/// Strict-interior parity test: toggle per edge that straddles the rightward
/// horizontal ray from `p` and crosses it right of `p.x`.
fn ray_parity(p: Vec2<i64>, polygon: &[Vec2<i64>]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[j];
        let b = polygon[i];
        j = i;
        // Horizontal (and zero-length) edges never straddle the ray; skip
        // before touching the slope.
        if a.y == b.y {
            continue;
        }
        if (a.y > p.y) != (b.y > p.y) {
            // Crossing iff p.x < a.x + (b.x - a.x)(p.y - a.y)/dy; compare
            // cross-multiplied, sign-corrected for dy.
            let dy = b.y - a.y;
            let lhs = (p.x - a.x) * dy;
            let rhs = (b.x - a.x) * (p.y - a.y);
            if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
                inside = !inside;
            }
        }
    }
    inside
}

/// True if `p` lies on any edge of the implicitly closed polygon.
fn on_boundary(p: Vec2<i64>, polygon: &[Vec2<i64>]) -> bool {
    let n = polygon.len();
    let mut j = n - 1;
    for i in 0..n {
        if on_segment(p, polygon[j], polygon[i]) {
            return true;
        }
        j = i;
    }
    false
}

/// Collinear-and-between test for the closed segment `[a, b]`.
#[inline]
fn on_segment(p: Vec2<i64>, a: Vec2<i64>, b: Vec2<i64>) -> bool {
    cross(a, b, p) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
