//! Disease timer (Heal phase).
//!
//! Every particle's status is recomputed from the time since infection;
//! changes clear `counted` so reconciliation picks them up.

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};
use tracing::trace;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{HealthState, Particle};
use crate::ecs::resources::EcsSimConfig;
use crate::ecs::schedule::{SimPhase, SimTick};

pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, progress_disease.in_set(SimPhase::Heal));
    }
}

fn progress_disease(
    mut particles: Query<(&Particle, &mut HealthState)>,
    config: Res<EcsSimConfig>,
    clock: Res<SimClock>,
) {
    let now = clock.now();
    for (particle, mut health) in &mut particles {
        if let Some((from, to)) = health.0.refresh(now, &config.disease) {
            trace!(id = particle.id, %from, %to, now, "status change");
        }
    }
}
