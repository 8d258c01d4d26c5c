pub mod body;
pub mod collision;
pub mod config;
pub mod counters;
pub mod health;
pub mod snapshot;
pub mod vec2;

pub use body::{Body, exchange_velocities};
pub use collision::{ParticleSlot, resolve_collisions};
pub use config::{Arena, CollisionPolicy, DiseaseParams, Palette, PopulationConfig, SimConfig, ValueRange};
pub use counters::HealthCounters;
pub use health::{Health, Status, status_of};
pub use snapshot::{HistorySample, ParticleView, Snapshot};
pub use vec2::Vec2;
