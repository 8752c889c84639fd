//! Record a run as JSON-lines swarm snapshots.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resonance::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::SwarmArgs;
use crate::config::Config;

pub fn run(output: &str, every: u64, args: &SwarmArgs) -> Result<()> {
    if every == 0 {
        bail!("--every must be at least 1");
    }

    let mut config = Config::load()?;
    args.apply(&mut config);
    let ticks = config.swarm.ticks;

    let mut sim = config
        .builder()
        .build()
        .context("Invalid simulation configuration")?;

    let output_path = Path::new(output);
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut recorder = TraceRecorder::new(BufWriter::new(file));

    println!(
        "{} Tracing {} ticks to {}...",
        "→".blue(),
        ticks.to_string().cyan(),
        output.cyan()
    );

    let pb = ProgressBar::new(ticks);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")?
            .progress_chars("#>-"),
    );

    for _ in 0..ticks {
        let report = sim.tick()?;
        if report.tick % every == 0 {
            recorder.record(&sim.snapshot())?;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let records = recorder.records();
    recorder
        .finish()
        .with_context(|| format!("Failed to flush {}", output_path.display()))?;

    println!();
    println!("{} Trace written to {}", "✓".green().bold(), output.cyan());
    println!("  Snapshots: {}", records.to_string().cyan());
    println!("  Organisms: {}", sim.swarm().len().to_string().cyan());

    Ok(())
}
