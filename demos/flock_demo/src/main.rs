//! flock_demo — two species sharing one field.
//!
//! Usage: `flock_demo [config.json] [ticks]`
//!
//! Without a config file the built-in defaults are used (500 agents, 16:9
//! field, bounce boundary).  Set `RUST_LOG=debug` for per-run details or
//! `RUST_LOG=trace` for every committed tick.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flock_behavior::{ClassWeights, CoefficientTable};
use flock_core::FlockConfig;
use flock_sim::{SimBuilder, TracingObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS:  u64 = 600;
const LOG_INTERVAL:   u64 = 100;

// ── Species table ─────────────────────────────────────────────────────────────

/// Class 0 flocks tightly; class 1 keeps its own loose group and is avoided
/// by class 0.
fn two_species() -> Result<CoefficientTable> {
    let table = CoefficientTable::from_rows(
        vec![
            vec![ClassWeights::new(1.5, 1.0, 1.0), ClassWeights::new(3.0, -0.5, 0.0)],
            vec![ClassWeights::new(0.5, 0.5, 0.0), ClassWeights::new(1.0, 0.5, 0.8)],
        ],
        vec![0.02, 0.02],
    )?;
    Ok(table)
}

fn load_config(path: Option<&str>) -> Result<FlockConfig> {
    let Some(path) = path else {
        return Ok(FlockConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let ticks = match args.get(1) {
        Some(s) => s.parse().with_context(|| format!("tick count {s:?}"))?,
        None    => DEFAULT_TICKS,
    };
    if config.class_count != 2 {
        bail!("the built-in species table has 2 classes, config asks for {}", config.class_count);
    }

    info!(
        agents = config.agent_count,
        width = config.field_width,
        boundary = %config.boundary,
        ticks,
        "starting flock demo",
    );

    let mut sim = SimBuilder::flocking(config, two_species()?).build()?;

    let t0 = Instant::now();
    sim.run_ticks(ticks, &mut TracingObserver::new(LOG_INTERVAL));
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), ticks);
    println!();
    println!("{:<8} {:<8} {:<22} {:<10}", "Class", "Agents", "Centroid", "Mean speed");
    println!("{}", "-".repeat(50));
    for class in 0..sim.config.class_count {
        let members: Vec<usize> = sim
            .class_ids()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.index() == class)
            .map(|(i, _)| i)
            .collect();
        if members.is_empty() {
            continue;
        }
        let n = members.len() as f64;
        let (mut cx, mut cy, mut speed) = (0.0, 0.0, 0.0);
        for &i in &members {
            cx += sim.agents.positions[i].x;
            cy += sim.agents.positions[i].y;
            speed += sim.agents.velocities[i].length();
        }
        println!(
            "{:<8} {:<8} ({:>8.4}, {:>8.4})   {:<10.5}",
            class,
            members.len(),
            cx / n,
            cy / n,
            speed / n,
        );
    }

    Ok(())
}
