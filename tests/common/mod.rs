#![allow(dead_code)]

use contagion_sim::ecs::{ManualClock, TickClock};
use contagion_sim::{HealthCounters, SimConfig, Simulation, Status};

/// Simulation on a manual clock starting at 0.
pub fn manual_sim(config: SimConfig) -> (Simulation, ManualClock) {
    let clock = ManualClock::new(0.0);
    let sim = Simulation::with_clock(config, clock.clone()).unwrap();
    (sim, clock)
}

/// Simulation whose clock moves `time_per_tick` per unit of `dt`.
pub fn tick_sim(config: SimConfig, time_per_tick: f64) -> Simulation {
    Simulation::with_clock(config, TickClock::new(time_per_tick)).unwrap()
}

/// Counters rebuilt from the particles' current statuses.
pub fn recount(sim: &Simulation) -> HealthCounters {
    let mut counters = HealthCounters::default();
    for p in sim.particles() {
        counters.add(p.health.status);
    }
    counters
}

pub fn statuses(sim: &Simulation) -> Vec<Status> {
    sim.particles().map(|p| p.health.status).collect()
}
