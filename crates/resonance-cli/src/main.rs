//! Resonance CLI - run and record coherence swarms.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::SwarmArgs;

#[derive(Parser)]
#[command(name = "resonance")]
#[command(author, version, about = "Resonance - self-organizing coherence swarms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default resonance.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run the swarm and print field statistics
    Run {
        /// Print final metrics as JSON instead of a report
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        swarm: SwarmArgs,
    },

    /// Run the swarm and write JSON-lines snapshots
    Trace {
        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Record every Nth tick
        #[arg(short, long, default_value = "1")]
        every: u64,

        #[command(flatten)]
        swarm: SwarmArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run { json, swarm } => commands::run::run(&swarm, json, cli.verbose),
        Commands::Trace { output, every, swarm } => commands::trace::run(&output, every, &swarm),
    }
}
