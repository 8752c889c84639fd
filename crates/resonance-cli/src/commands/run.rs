//! Run the swarm simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resonance::runtime::metrics::{self, SwarmMetrics};

use super::SwarmArgs;
use crate::config::Config;

pub fn run(args: &SwarmArgs, json: bool, verbose: bool) -> Result<()> {
    let mut config = Config::load()?;
    args.apply(&mut config);
    let ticks = config.swarm.ticks;

    let mut sim = config
        .builder()
        .build()
        .context("Invalid simulation configuration")?;

    if !json {
        println!(
            "{} Running {} {} organisms for {} ticks (seed {})...",
            "→".blue(),
            config.swarm.population.to_string().cyan(),
            config.organism.variant.to_string().cyan(),
            ticks.to_string().cyan(),
            config.swarm.seed
        );
    }

    let pb = if json { ProgressBar::hidden() } else { ProgressBar::new(ticks) };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")?
            .progress_chars("#>-"),
    );

    let mut first_flow = None;
    let mut peak_strength = 0.0_f64;
    sim.run_observed(ticks, |report, _| {
        let strength = report.field.field_strength;
        if strength > 0.0 && first_flow.is_none() {
            first_flow = Some(report.tick);
            if verbose {
                pb.println(format!(
                    "  field formed at tick {} (best K {:.4})",
                    report.tick, report.field.best_k
                ));
            }
        }
        peak_strength = peak_strength.max(strength);
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    let summary = metrics::compute(sim.swarm());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    print_metrics(&summary);
    println!();
    match first_flow {
        Some(tick) => println!(
            "  First field:       tick {} (peak strength {:.2})",
            tick.to_string().green(),
            peak_strength
        ),
        None => println!("  First field:       {}", "never formed".yellow()),
    }

    Ok(())
}

fn print_metrics(m: &SwarmMetrics) {
    println!();
    println!("{}", "Field".blue().bold());
    println!(
        "  In flow:           {}/{}",
        m.flow_count.to_string().cyan(),
        m.population
    );
    println!("  Field strength:    {:.3}", m.field_strength);
    println!("  Best K:            {:.4}", m.best_k);
    println!();

    println!("{}", "Organisms".blue().bold());
    println!("  Mean coherence:    {:.3}", m.mean_coherence);
    println!("  Mean need:         {:.3}", m.mean_need);
    println!("  Mean fatigue:      {:.3}", m.mean_fatigue);
    println!("  Mean shield:       {:.3}", m.mean_shield);
    println!("  Nearest neighbor:  {:.3}", m.mean_neighbor_distance);
    println!();

    println!("{}", "Resonance".blue().bold());
    println!("  Mean K:            {:.4}", m.mean_k);
    let spread = format!("{:.4}", m.k_spread);
    let spread = if m.k_spread < 0.05 { spread.green() } else { spread.yellow() };
    println!("  K spread:          {}", spread);
    println!(
        "  Breaches:          {} total, {} on last tick",
        m.total_breaches, m.breaching_now
    );
}
