use bevy_ecs::resource::Resource;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::IdGenerator;
use crate::model::{Arena, CollisionPolicy, DiseaseParams, HealthCounters, HistorySample, SimConfig};

/// The parts of [`SimConfig`] systems read every tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EcsSimConfig {
    pub arena: Arena,
    pub disease: DiseaseParams,
    pub collision_policy: CollisionPolicy,
}

impl From<&SimConfig> for EcsSimConfig {
    fn from(config: &SimConfig) -> Self {
        Self {
            arena: config.arena,
            disease: config.disease,
            collision_policy: config.collision_policy,
        }
    }
}

/// Deterministic RNG for transmission rolls and random placement.
#[derive(Resource)]
pub struct SimRng {
    pub rng: SmallRng,
    pub seed: u64,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// One transmission roll: an integer in `[0, 100)` below `rate_percent`.
    pub fn roll_percent(&mut self, rate_percent: u32) -> bool {
        self.rng.random_range(0..100u32) < rate_percent
    }
}

/// Particle ID generator.
#[derive(Resource, Debug, Default)]
pub struct EcsIdGenerator(pub IdGenerator);

/// `dt` of the tick being run.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TickDelta(pub f64);

impl Default for TickDelta {
    fn default() -> Self {
        Self(1.0)
    }
}

/// World-level per-status totals, kept in step with particles by reconciliation.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationCounters(pub HealthCounters);

/// Counter time series, one sample per tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct History {
    pub samples: Vec<HistorySample>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: HistorySample) {
        self.samples.push(sample);
    }

    /// `(time, infectious count)` pairs, the curve usually plotted.
    pub fn infectious_series(&self) -> Vec<(f64, u32)> {
        self.samples
            .iter()
            .map(|s| (s.time, s.counters.infectious))
            .collect()
    }

    pub fn last(&self) -> Option<&HistorySample> {
        self.samples.last()
    }
}
