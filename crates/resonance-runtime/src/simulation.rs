//! Simulation: the host loop.
//!
//! One tick is one world-signal sample plus one swarm step. The simulation
//! owns the swarm, the generator, the tick index fed to the generator, and
//! the random source, so a run is reproducible from its seed alone.

use crate::swarm::{StepReport, Swarm, SwarmConfig};
use resonance_agents::organism::Organism;
use resonance_core::error::Result;
use resonance_core::random::{seeded, RandomSource, SwarmRng};
use resonance_core::signal::WorldSignal;
use resonance_core::types::{SwarmSnapshot, Tick};
use tracing::info;

/// A swarm driven by a world signal and a seeded random source.
pub struct Simulation<R = SwarmRng> {
    swarm: Swarm<Organism>,
    world: WorldSignal,
    rng: R,
    signal_index: Tick,
}

impl Simulation<SwarmRng> {
    /// Build a simulation whose random source is seeded from `config.seed`.
    pub fn new(config: &SwarmConfig, world: WorldSignal) -> Result<Self> {
        Self::with_rng(config, world, seeded(config.seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Build a simulation around an explicit random source.
    pub fn with_rng(config: &SwarmConfig, world: WorldSignal, mut rng: R) -> Result<Self> {
        let swarm = Swarm::new(config, &mut rng)?;
        info!(
            population = config.population,
            seed = config.seed,
            signal_width = world.width(),
            "simulation initialized"
        );
        Ok(Self {
            swarm,
            world,
            rng,
            signal_index: 0,
        })
    }

    /// Run one tick: sample the world signal and step the swarm.
    pub fn tick(&mut self) -> Result<StepReport> {
        let signal = self.world.sample(self.signal_index);
        let report = self.swarm.step(&signal, &mut self.rng)?;
        self.signal_index += 1;
        Ok(report)
    }

    /// Run `ticks` ticks, collecting the step reports.
    pub fn run(&mut self, ticks: u64) -> Result<Vec<StepReport>> {
        let mut reports = Vec::new();
        self.run_observed(ticks, |report, _| reports.push(*report))?;
        Ok(reports)
    }

    /// Run `ticks` ticks, handing each report and the updated swarm to
    /// `observer`. This is the hook a presentation layer reads from.
    pub fn run_observed<F>(&mut self, ticks: u64, mut observer: F) -> Result<()>
    where
        F: FnMut(&StepReport, &Swarm<Organism>),
    {
        for _ in 0..ticks {
            let report = self.tick()?;
            observer(&report, &self.swarm);
        }
        Ok(())
    }

    pub fn swarm(&self) -> &Swarm<Organism> {
        &self.swarm
    }

    pub fn world(&self) -> &WorldSignal {
        &self.world
    }

    /// Index of the next world-signal sample.
    pub fn signal_index(&self) -> Tick {
        self.signal_index
    }

    pub fn snapshot(&self) -> SwarmSnapshot {
        self.swarm.snapshot()
    }
}
