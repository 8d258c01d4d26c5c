pub mod particle;

pub use particle::{BodyState, HealthState, Particle};
