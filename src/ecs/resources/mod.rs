pub mod entity_map;
pub mod sim_resources;

pub use entity_map::ParticleEntityMap;
pub use sim_resources::{
    EcsIdGenerator, EcsSimConfig, History, PopulationCounters, SimRng, TickDelta,
};
