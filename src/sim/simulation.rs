use bevy_app::App;
use bevy_ecs::world::World;

use super::populate::populate;
use crate::ecs::app::build_sim_app;
use crate::ecs::clock::{SimClock, SystemClock, TimeSource};
use crate::ecs::components::{BodyState, HealthState};
use crate::ecs::plugin::SimPlugin;
use crate::ecs::resources::{History, ParticleEntityMap, PopulationCounters, TickDelta};
use crate::ecs::schedule::SimTick;
use crate::ecs::spawn::{reset_population, spawn_particle};
use crate::error::{Error, Result};
use crate::model::{
    Body, HealthCounters, HistorySample, Palette, ParticleSlot, ParticleView, PopulationConfig,
    SimConfig, Snapshot, Status, Vec2,
};

/// A contagion run: particles in an arena, stepped one tick at a time.
///
/// All commands take `&mut self`, so a tick always runs to completion
/// before particles can be added or the population reset.
pub struct Simulation {
    app: App,
    population: PopulationConfig,
    palette: Palette,
}

impl Simulation {
    /// Simulation timed by the wall clock (seconds).
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock::new())
    }

    /// Simulation timed by `clock`; disease times are in its unit.
    pub fn with_clock(config: SimConfig, clock: impl TimeSource) -> Result<Self> {
        config.validate()?;
        let mut app = build_sim_app(&config, clock);
        app.add_plugins(SimPlugin);
        Ok(Self {
            app,
            population: config.population,
            palette: config.palette,
        })
    }

    /// Add one particle and return its ID.
    ///
    /// A non-healthy `status` is back-dated so the disease timer agrees with
    /// it right away; `Infectious` starts its timer now.
    pub fn add_particle(
        &mut self,
        mass: f64,
        radius: f64,
        velocity: Vec2,
        position: Vec2,
        status: Status,
    ) -> Result<u64> {
        let body = Body::new(mass, radius, velocity, position)?;
        spawn_particle(self.app.world_mut(), body, status)
    }

    /// Add the configured random population. Returns the new IDs.
    pub fn populate(&mut self) -> Result<Vec<u64>> {
        populate(self.app.world_mut(), &self.population)
    }

    /// Everyone healthy again except the lowest ID, re-seeded as infectious.
    /// Returns that ID, or `None` if there are no particles.
    pub fn reset(&mut self) -> Option<u64> {
        reset_population(self.app.world_mut())
    }

    /// Run one tick with time step `dt`.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTimeStep(dt));
        }
        let world = self.app.world_mut();
        world.resource_mut::<TickDelta>().0 = dt;
        world.run_schedule(SimTick);
        Ok(())
    }

    /// Run `n` ticks with the same `dt`.
    pub fn run(&mut self, n: u64, dt: f64) -> Result<()> {
        for _ in 0..n {
            self.step(dt)?;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let clock = self.world().resource::<SimClock>();
        Snapshot {
            tick: clock.tick_count,
            time: clock.now(),
            particles: self
                .particles()
                .map(|p| ParticleView {
                    id: p.id,
                    position: p.body.position,
                    radius: p.body.radius,
                    status: p.health.status,
                })
                .collect(),
            counters: self.counters(),
        }
    }

    /// Full state of every particle, in ID order.
    pub fn particles(&self) -> impl Iterator<Item = ParticleSlot> + '_ {
        let world = self.world();
        world
            .resource::<ParticleEntityMap>()
            .iter()
            .filter_map(move |(id, entity)| {
                Some(ParticleSlot {
                    id,
                    body: world.get::<BodyState>(entity)?.0,
                    health: world.get::<HealthState>(entity)?.0,
                })
            })
    }

    pub fn particle(&self, id: u64) -> Option<ParticleSlot> {
        let world = self.world();
        let entity = world.resource::<ParticleEntityMap>().get_bevy(id)?;
        Some(ParticleSlot {
            id,
            body: world.get::<BodyState>(entity)?.0,
            health: world.get::<HealthState>(entity)?.0,
        })
    }

    pub fn counters(&self) -> HealthCounters {
        self.world().resource::<PopulationCounters>().0
    }

    pub fn history(&self) -> &[HistorySample] {
        &self.world().resource::<History>().samples
    }

    /// `(time, infectious)` pairs for plotting the infection curve.
    pub fn infectious_series(&self) -> Vec<(f64, u32)> {
        self.world().resource::<History>().infectious_series()
    }

    pub fn len(&self) -> usize {
        self.world().resource::<ParticleEntityMap>().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tick_count(&self) -> u64 {
        self.world().resource::<SimClock>().tick_count
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn world(&self) -> &World {
        self.app.world()
    }
}
