// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless RRT driver.
//!
//! Owns the tick cadence and a renderer: grows the tree one step per tick,
//! drains the dirty list into an SVG sink after every tick, and stops at the
//! node budget.
//!
//! Run:
//! - `cargo run -p thicket_demos --example rrt_headless -- --seed 7 --svg tree.svg`
//! - `RUST_LOG=thicket_rrt=debug cargo run -p thicket_demos --example rrt_headless`

use std::fmt::{self, Write as _};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use kurbo::{Point, Size};
use thicket_rrt::{DirtyEntry, Growth, Rrt, RrtConfig};
use tracing_subscriber::EnvFilter;

/// Grow a goal-biased RRT and write it out as SVG.
#[derive(Debug, Parser)]
struct Args {
    /// Extent width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Extent height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Maximum edge length.
    #[arg(long, default_value_t = 100.0)]
    max_edge: f64,
    /// Probability of sampling the goal.
    #[arg(long, default_value_t = thicket_rrt::DEFAULT_GOAL_BIAS)]
    goal_bias: f64,
    /// Number of connected nodes to stop at.
    #[arg(long, default_value_t = thicket_rrt::DEFAULT_NODE_BUDGET)]
    budget: usize,
    /// Random seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Milliseconds to sleep between ticks (the browser version used 30).
    #[arg(long, default_value_t = 0)]
    tick_ms: u64,
    /// Where to write the SVG. Prints to stdout when absent.
    #[arg(long)]
    svg: Option<PathBuf>,
}

/// Rendering collaborator: turns drained dirty entries into SVG elements.
#[derive(Debug, Default)]
struct SvgSink {
    body: String,
    points: usize,
    segments: usize,
}

impl SvgSink {
    fn draw(&mut self, entry: &DirtyEntry) -> fmt::Result {
        if let Some(parent) = entry.parent {
            writeln!(
                self.body,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black" stroke-width="0.5"/>"#,
                parent.x, parent.y, entry.position.x, entry.position.y
            )?;
            self.segments += 1;
        }
        writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="2"/>"#,
            entry.position.x, entry.position.y
        )?;
        self.points += 1;
        Ok(())
    }

    fn marker(&mut self, at: Point, color: &str, label: &str, dy: f64) -> fmt::Result {
        writeln!(
            self.body,
            r#"<circle cx="{x:.2}" cy="{y:.2}" r="10" fill="{color}"/><text x="{tx:.2}" y="{ty:.2}" font-family="Arial" font-size="20" fill="{color}">{label}</text>"#,
            x = at.x,
            y = at.y,
            tx = at.x - 20.0,
            ty = at.y + dy,
        )
    }

    fn finish(self, extent: Size) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="#f6f8f9"/>
{body}</svg>
"##,
            w = extent.width,
            h = extent.height,
            body = self.body,
        )
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let extent = Size::new(args.width, args.height);
    let start = Point::new(50.0, args.height - 100.0);
    let goal = Point::new(args.width - 50.0, 100.0);
    let config = RrtConfig::new(start, goal, extent, args.max_edge)
        .with_goal_bias(args.goal_bias)
        .with_node_budget(args.budget);

    let mut rrt = Rrt::from_seed(config, args.seed).context("invalid run configuration")?;

    let mut sink = SvgSink::default();
    sink.marker(start, "red", "Start", 30.0)?;
    sink.marker(goal, "green", "Goal", -18.0)?;

    let mut ticks = 0_usize;
    let mut reached_at = None;
    while !rrt.is_budget_exhausted() {
        let growth = rrt.step().context("growth step failed")?;
        ticks += 1;
        if let Growth::GoalConnected { .. } = growth {
            reached_at = Some(ticks);
        }
        for entry in rrt.drain_dirty() {
            sink.draw(&entry)?;
        }
        if args.tick_ms > 0 {
            std::thread::sleep(Duration::from_millis(args.tick_ms));
        }
    }

    tracing::info!(
        ticks,
        nodes = rrt.len(),
        points = sink.points,
        segments = sink.segments,
        goal_reached_at = ?reached_at,
        "run finished"
    );

    let svg = sink.finish(extent);
    match &args.svg {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{svg}"),
    }
    Ok(())
}
