//! Swarm dynamics tests: feedback delay, determinism, invariants.

use resonance_agents::config::{OrganismConfig, Variant};
use resonance_agents::organism::Organism;
use resonance_core::agent::ResonantAgent;
use resonance_core::error::Result;
use resonance_core::random::{seeded, RandomSource};
use resonance_core::signal::WorldSignal;
use resonance_core::types::*;
use resonance_runtime::builder::SimulationBuilder;
use resonance_runtime::export::TraceRecorder;
use resonance_runtime::swarm::{Swarm, DEFAULT_BEST_K};
use std::io::{BufRead, BufReader};

/// Fixed pseudo-random stream (64-bit LCG, top 53 bits as the mantissa).
struct Lcg(u64);

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// An agent that replays a fixed coherence script and records the field it
/// was handed on each tick.
struct ScriptedAgent {
    id: AgentId,
    k: f64,
    script: Vec<f64>,
    history: Vec<HistorySample>,
    seen: Vec<FieldState>,
}

impl ScriptedAgent {
    fn new(id: &str, k: f64, script: &[f64]) -> Self {
        Self {
            id: AgentId::new(id),
            k,
            script: script.to_vec(),
            history: Vec::new(),
            seen: Vec::new(),
        }
    }
}

impl ResonantAgent for ScriptedAgent {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn position(&self) -> Position {
        Position::new(0.5, 0.5)
    }

    fn resonance(&self) -> f64 {
        self.k
    }

    fn last_sample(&self) -> Option<&HistorySample> {
        self.history.last()
    }

    fn update<R: RandomSource + ?Sized>(
        &mut self,
        _signal: &[f64],
        field: FieldState,
        _rng: &mut R,
    ) -> Result<f64> {
        let coherence = self.script[self.history.len()];
        self.seen.push(field);
        self.history.push(HistorySample {
            coherence,
            need: 0.0,
            k: self.k,
        });
        Ok(coherence)
    }

    fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id: self.id.clone(),
            position: self.position(),
            k: self.k,
            need: 0.0,
            fatigue: 0.0,
            shield: 1.0,
            history: self.history.clone(),
        }
    }
}

#[test]
fn field_lags_coherence_by_one_tick() {
    // "A" crosses the flow threshold on tick 2; "B" never does.
    let agents = vec![
        ScriptedAgent::new("A", 2.4, &[0.5, 0.8, 0.8, 0.2, 0.2]),
        ScriptedAgent::new("B", 1.1, &[0.1, 0.1, 0.1, 0.1, 0.1]),
    ];
    let mut swarm = Swarm::from_agents(agents, DEFAULT_BEST_K).unwrap();
    let mut rng = seeded(0);
    let signal = [0.3];

    let r1 = swarm.step(&signal, &mut rng).unwrap();
    assert_eq!(r1.field, FieldState::new(DEFAULT_BEST_K, 0.0));

    // Coherence 0.8 is computed during tick 2 but not yet visible to the field.
    let r2 = swarm.step(&signal, &mut rng).unwrap();
    assert_eq!(r2.flow_count, 0);
    assert_eq!(r2.field.field_strength, 0.0);
    assert_eq!(swarm.field_strength(), 0.0);

    let r3 = swarm.step(&signal, &mut rng).unwrap();
    assert_eq!(r3.flow_count, 1);
    assert_eq!(r3.field, FieldState::new(2.4, 0.5));

    // A was still in flow after tick 3, then drops out during tick 4.
    let r4 = swarm.step(&signal, &mut rng).unwrap();
    assert_eq!(r4.field, FieldState::new(2.4, 0.5));

    // Nobody in flow: field strength drops, best K is kept.
    let r5 = swarm.step(&signal, &mut rng).unwrap();
    assert_eq!(r5.field, FieldState::new(2.4, 0.0));

    // Every agent saw the same field on every tick.
    let a = &swarm.agents()[0].seen;
    let b = &swarm.agents()[1].seen;
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
}

#[test]
fn best_k_is_mean_of_flow_set() {
    let agents = vec![
        ScriptedAgent::new("A", 1.0, &[0.9, 0.9]),
        ScriptedAgent::new("B", 2.0, &[0.9, 0.9]),
        ScriptedAgent::new("C", 3.0, &[0.1, 0.1]),
        ScriptedAgent::new("D", 3.5, &[0.76, 0.76]),
    ];
    let mut swarm = Swarm::from_agents(agents, DEFAULT_BEST_K).unwrap();
    let mut rng = seeded(0);
    swarm.step(&[0.0], &mut rng).unwrap();
    let report = swarm.step(&[0.0], &mut rng).unwrap();
    assert_eq!(report.flow_count, 3);
    assert!((report.field.best_k - 6.5 / 3.0).abs() < 1e-12);
    assert_eq!(report.field.field_strength, 0.75);
}

#[test]
fn golden_trace_seed_42_single_agent() {
    let mut sim = SimulationBuilder::new()
        .population(1)
        .seed(42)
        .build_with_rng(Lcg(42))
        .unwrap();

    let initial = sim.swarm().agents()[0].clone();
    assert_close(initial.k(), 1.8605413101272188);
    assert_close(initial.position().x, 0.5682303266439076);
    assert_close(initial.position().y, 0.2254634289477513);

    sim.run(10).unwrap();

    let agent = &sim.swarm().agents()[0];
    assert_eq!(agent.history().len(), 10);
    assert_close(agent.k(), 1.8581730548545194);
    assert_close(agent.position().x, 0.5829324700807281);
    assert_close(agent.position().y, 0.22737651411539275);
    assert_close(agent.need(), 0.1582242542106363);
    assert_close(agent.shield(), 0.972703611203232);
    assert_close(agent.fatigue(), 0.4012630607616213);

    let last = agent.last_sample().unwrap();
    assert_close(last.coherence, 0.7113676298977891);
    assert_close(last.k, agent.k());

    let coherences: Vec<f64> = agent.history().iter().map(|s| s.coherence).collect();
    let expected = [
        0.5510564663487162,
        0.2242079964975771,
        0.13067872362863855,
        0.3857450923134862,
        0.5701978611433213,
        0.6521832030681916,
        0.5837526453498836,
        0.3302601027553692,
        0.26871082062113677,
        0.7113676298977891,
    ];
    for (got, want) in coherences.iter().zip(expected) {
        assert_close(*got, want);
    }

    // A lone agent never reaches flow in this window.
    assert_eq!(sim.swarm().field_strength(), 0.0);
    assert_eq!(sim.swarm().best_k(), DEFAULT_BEST_K);
}

fn assert_close(got: f64, want: f64) {
    assert!(
        (got - want).abs() < 1e-10,
        "expected {:.17}, got {:.17}",
        want,
        got
    );
}

#[test]
fn identical_agents_stay_identical_without_diversity() {
    let config = OrganismConfig::sovereign().without_diversity();
    let agents: Vec<Organism> = (0..5)
        .map(|i| {
            Organism::new(AgentId::from_index(i), Position::new(0.3, 0.7), 1.9, config.clone())
                .unwrap()
        })
        .collect();
    let mut swarm = Swarm::from_agents(agents, DEFAULT_BEST_K).unwrap();
    let mut rng = seeded(99);
    let world = WorldSignal::standard();

    for i in 0..400 {
        swarm.step(&world.sample(i), &mut rng).unwrap();
    }

    let first = swarm.agents()[0].snapshot();
    for agent in &swarm.agents()[1..] {
        let snap = agent.snapshot();
        assert_eq!(snap.position, first.position);
        assert_eq!(snap.k, first.k);
        assert_eq!(snap.need, first.need);
        assert_eq!(snap.fatigue, first.fatigue);
        assert_eq!(snap.shield, first.shield);
        assert_eq!(snap.history, first.history);
        assert_eq!(agent.memory(), swarm.agents()[0].memory());
    }
}

#[test]
fn empty_signal_fails_without_mutation() {
    let mut sim = SimulationBuilder::new().population(5).seed(3).build().unwrap();
    sim.run(20).unwrap();

    let mut swarm = sim.swarm().clone();
    let before = swarm.snapshot();
    let mut rng = seeded(3);

    let err = swarm.step(&[], &mut rng).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(swarm.snapshot(), before);
    assert_eq!(swarm.tick(), 20);
}

#[test]
fn non_finite_signal_is_rejected_before_the_field_moves() {
    let agents = (0..3)
        .map(|i| {
            Organism::new(
                AgentId::from_index(i),
                Position::new(0.2, 0.2),
                1.2 + 0.4 * i as f64,
                OrganismConfig::minimal().without_diversity(),
            )
            .unwrap()
        })
        .collect();
    let mut swarm = Swarm::from_agents(agents, DEFAULT_BEST_K).unwrap();
    let mut clean = swarm.clone();
    let before = swarm.snapshot();
    let mut rng = seeded(9);

    for bad in [[f64::NAN, 0.2], [0.1, f64::INFINITY]] {
        let err = swarm.step(&bad, &mut rng).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(swarm.snapshot(), before);
    }

    let mut clean_rng = seeded(9);
    for _ in 0..2 {
        let got = swarm.step(&[0.1, 0.2], &mut rng).unwrap();
        let want = clean.step(&[0.1, 0.2], &mut clean_rng).unwrap();
        assert_eq!(got, want);
    }
    assert_eq!(swarm.snapshot(), clean.snapshot());
}

#[test]
fn invariants_hold_across_seeds_and_variants() {
    for variant in [Variant::Sovereign, Variant::Minimal] {
        for seed in [0u64, 1, 7, 42, 2024] {
            let mut sim = SimulationBuilder::new()
                .population(8)
                .seed(seed)
                .variant(variant)
                .build()
                .unwrap();
            let capacity = variant.config().history_capacity;

            sim.run_observed(capacity as u64 + 60, |report, swarm| {
                assert!((0.0..=1.0).contains(&report.field.field_strength));
                for agent in swarm.agents() {
                    let k = agent.k();
                    assert!((K_MIN..=K_MAX).contains(&k), "{} K = {}", agent.id(), k);
                    let p = agent.position();
                    assert!((0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y));
                    assert!(agent.history().len() <= capacity);
                    assert!(agent.estimator().threshold() > 0.0);
                }
            })
            .unwrap();

            for agent in sim.swarm().agents() {
                assert_eq!(agent.history().len(), capacity);
            }
        }
    }
}

#[test]
fn history_evicts_oldest_after_capacity() {
    let capacity = 12;
    let extra = 5;
    let mut sim = SimulationBuilder::new()
        .population(1)
        .history_capacity(capacity)
        .seed(8)
        .build()
        .unwrap();

    let mut recorded = Vec::new();
    sim.run_observed((capacity + extra) as u64, |_, swarm| {
        recorded.push(*swarm.agents()[0].last_sample().unwrap());
    })
    .unwrap();

    let kept = sim.swarm().agents()[0].history().to_vec();
    assert_eq!(kept.len(), capacity);
    assert_eq!(kept, recorded[extra..].to_vec());
}

#[test]
fn trace_file_has_one_line_per_tick() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.jsonl");

    let file = std::fs::File::create(&path).unwrap();
    let mut recorder = TraceRecorder::new(std::io::BufWriter::new(file));
    let mut sim = SimulationBuilder::new().population(4).seed(11).build().unwrap();
    let mut failures = Vec::new();
    sim.run_observed(15, |_, swarm| {
        if let Err(e) = recorder.record(&swarm.snapshot()) {
            failures.push(e);
        }
    })
    .unwrap();
    assert!(failures.is_empty());
    recorder.finish().unwrap();

    let reader = BufReader::new(std::fs::File::open(&path).unwrap());
    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    assert_eq!(lines.len(), 15);
    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["tick"], 1);
    assert_eq!(first["agents"].as_array().unwrap().len(), 4);
}
