//! Replay the hull-step animation in the terminal.
//!
//! Usage:
//!   cargo run -p hullgrid --example replay -- [seed]
//!
//! Plays the role of the UI timer: steps through the precomputed hull-step
//! log one frame at a time. The log is finite and restartable; re-running
//! with the same seed replays the exact same frames.

use hullgrid::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0u64);
    let sc = draw_scatter(ScatterCfg::default(), ReplayToken { seed, index: 0 });
    let steps = compute_hull_steps(&sc.items);
    let grid = Grid::from_obstacles(20, 20, &sc.obstacles);
    for (i, step) in steps.iter().enumerate() {
        println!("step {}/{}: {} chain points", i + 1, steps.len(), step.len());
    }
    let hull = steps.last().cloned().unwrap_or_default();
    let path = if sc.items.len() >= 2 {
        find_path(&grid, sc.items[0], sc.items[1], &hull)
    } else {
        Vec::new()
    };
    println!("{}", render(&grid, &sc.items, &path));
}
