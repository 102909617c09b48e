//! Demo runner standing in for the visualizer UI: generates scenarios,
//! runs the algorithms, and emits JSON (and optionally an ASCII map).
//! All user-facing precondition messages live here, not in the library.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use hullgrid::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hullgrid")]
#[command(about = "Scenario generator and algorithm runner for the grid routing demo")]
struct Cmd {
    /// RNG seed for scenario generation
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Scenario index under the same seed
    #[arg(long, default_value_t = 0)]
    index: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct ScenarioArgs {
    #[arg(long, default_value_t = 20)]
    width: i64,
    #[arg(long, default_value_t = 20)]
    height: i64,
    #[arg(long, default_value_t = 6)]
    items: usize,
    #[arg(long, default_value_t = 10)]
    obstacles: usize,
    /// Write JSON here instead of stdout
    #[arg(long)]
    out: Option<String>,
}

impl ScenarioArgs {
    fn cfg(&self) -> ScatterCfg {
        ScatterCfg {
            width: self.width,
            height: self.height,
            items: self.items,
            obstacles: self.obstacles,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate a random scenario and print it as JSON
    Scatter {
        #[command(flatten)]
        args: ScenarioArgs,
    },
    /// Compute the hull-step replay log for a generated scenario
    Hull {
        #[command(flatten)]
        args: ScenarioArgs,
    },
    /// Full pipeline: scatter, hull, then route between two item indices
    Route {
        #[command(flatten)]
        args: ScenarioArgs,
        /// Start item index
        #[arg(long)]
        start: usize,
        /// End item index
        #[arg(long)]
        end: usize,
        /// Also print an ASCII map of the result
        #[arg(long)]
        map: bool,
    },
}

#[derive(Serialize)]
struct PointOut {
    x: i64,
    y: i64,
}

impl From<Vec2<i64>> for PointOut {
    fn from(p: Vec2<i64>) -> Self {
        PointOut { x: p.x, y: p.y }
    }
}

fn points_out(pts: &[Vec2<i64>]) -> Vec<PointOut> {
    pts.iter().copied().map(PointOut::from).collect()
}

#[derive(Serialize)]
struct ScenarioOut {
    items: Vec<PointOut>,
    obstacles: Vec<PointOut>,
}

impl From<&Scatter> for ScenarioOut {
    fn from(sc: &Scatter) -> Self {
        ScenarioOut {
            items: points_out(&sc.items),
            obstacles: points_out(&sc.obstacles),
        }
    }
}

#[derive(Serialize)]
struct HullOut {
    steps: Vec<Vec<PointOut>>,
    hull: Vec<PointOut>,
}

#[derive(Serialize)]
struct RouteOut {
    scenario: ScenarioOut,
    hull: Vec<PointOut>,
    path: Vec<PointOut>,
    found: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tok = ReplayToken {
        seed: cmd.seed,
        index: cmd.index,
    };
    match cmd.action {
        Action::Scatter { args } => scatter(args, tok),
        Action::Hull { args } => hull(args, tok),
        Action::Route {
            args,
            start,
            end,
            map,
        } => route(args, tok, start, end, map),
    }
}

fn scatter(args: ScenarioArgs, tok: ReplayToken) -> Result<()> {
    let sc = draw_scatter(args.cfg(), tok);
    tracing::info!(
        items = sc.items.len(),
        obstacles = sc.obstacles.len(),
        "scatter"
    );
    emit(&ScenarioOut::from(&sc), args.out)
}

fn hull(args: ScenarioArgs, tok: ReplayToken) -> Result<()> {
    let sc = draw_scatter(args.cfg(), tok);
    if sc.items.len() < 3 {
        bail!("need at least 3 items to compute a hull");
    }
    let steps = compute_hull_steps(&sc.items);
    let final_hull = steps.last().cloned().unwrap_or_default();
    tracing::info!(steps = steps.len(), vertices = final_hull.len(), "hull");
    emit(
        &HullOut {
            steps: steps.iter().map(|s| points_out(s)).collect(),
            hull: points_out(&final_hull),
        },
        args.out,
    )
}

fn route(args: ScenarioArgs, tok: ReplayToken, start: usize, end: usize, map: bool) -> Result<()> {
    let sc = draw_scatter(args.cfg(), tok);
    if sc.items.len() < 3 {
        bail!("need at least 3 items to compute a hull");
    }
    let (Some(&s), Some(&e)) = (sc.items.get(start), sc.items.get(end)) else {
        bail!("item index out of range (have {} items)", sc.items.len());
    };
    if s == e {
        bail!("start and end items are the same");
    }

    let hull = compute_hull(&sc.items);
    let grid = Grid::from_obstacles(args.width.max(1) as usize, args.height.max(1) as usize, &sc.obstacles);
    for i in blocked_items(&grid, &sc.items) {
        tracing::warn!(item = i, "item sits on an obstacle cell");
    }

    let path = find_path_with(&grid, s, e, &hull, SearchCfg::default(), |ev| match ev {
        TraceEvent::Found { hops } => tracing::info!(hops, "path found"),
        TraceEvent::Exhausted { explored } => tracing::info!(explored, "no path"),
        ev => tracing::debug!(?ev, "search"),
    });
    if path.is_empty() {
        tracing::warn!("no path found between the selected items");
    }
    if map {
        println!("{}", render(&grid, &sc.items, &path));
    }
    emit(
        &RouteOut {
            scenario: ScenarioOut::from(&sc),
            hull: points_out(&hull),
            found: !path.is_empty(),
            path: points_out(&path),
        },
        args.out,
    )
}

fn emit<T: Serialize>(value: &T, out: Option<String>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(out) => {
            let out = Path::new(&out);
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out, text)?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
