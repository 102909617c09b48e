//! Core algorithms for the grid routing visualizer.
//!
//! Three independent surfaces, consumed by an external UI/animation layer:
//! - `hull`: Andrew's monotone chain, instrumented to emit a replayable
//!   sequence of intermediate chain snapshots for animation.
//! - `contain`: exact integer ray-casting point-in-polygon with a
//!   boundary-inclusive policy.
//! - `path`: BFS over a 4-connected occupancy grid, constrained to cells
//!   inside a containment polygon (typically the computed hull).
//!
//! The caller owns all application state: it generates points/obstacles
//! (see `rand`), drives the hull-step animation from the finite replay log,
//! and surfaces empty results as user-facing messages. The core signals
//! failure exclusively through return values and never panics on expected
//! input conditions.

pub mod contain;
pub mod hull;
pub mod inspect;
pub mod path;
pub mod rand;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Grid points are exact integer coordinates; all geometry below runs on
// i64 without epsilons.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contain::{contains, contains_with, Containment};
    pub use crate::hull::{compute_hull, compute_hull_steps, HullStep};
    pub use crate::inspect::{blocked_items, hull_encloses, render};
    pub use crate::path::{find_path, find_path_with, Reject, SearchCfg, Skip, TraceEvent};
    pub use crate::rand::{draw_scatter, ReplayToken, Scatter, ScatterCfg};
    pub use crate::types::{cross, Cell, Grid};
    pub use nalgebra::Vector2 as Vec2;
}
