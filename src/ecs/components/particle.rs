use bevy_ecs::component::Component;

use crate::model::{Body, Health};

/// Identity component present on every particle entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub id: u64,
}

/// Position, velocity, mass and radius.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodyState(pub Body);

/// Disease status, infection time and counter bookkeeping.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct HealthState(pub Health);
