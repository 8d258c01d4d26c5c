pub mod app;
pub mod clock;
pub mod components;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

#[cfg(test)]
pub mod test_helpers;

pub use app::build_sim_app;
pub use clock::{ManualClock, SimClock, SystemClock, TickClock, TimeSource};
pub use components::{BodyState, HealthState, Particle};
pub use plugin::SimPlugin;
pub use resources::{
    EcsIdGenerator, EcsSimConfig, History, ParticleEntityMap, PopulationCounters, SimRng,
    TickDelta,
};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
pub use spawn::{reset_population, spawn_particle};
