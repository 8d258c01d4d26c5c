pub mod ecs;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod sim;

pub use error::{Error, Result};
pub use id::IdGenerator;
pub use model::{
    Arena, Body, CollisionPolicy, DiseaseParams, Health, HealthCounters, HistorySample, Palette,
    ParticleView, PopulationConfig, SimConfig, Snapshot, Status, Vec2,
};
pub use sim::Simulation;
