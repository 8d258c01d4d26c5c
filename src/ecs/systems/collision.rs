//! Collision system: one all-pairs pass per tick (Collide phase).
//!
//! Particles are gathered in ascending id order, run through
//! [`resolve_collisions`], and written back. Transmission rolls draw from
//! [`SimRng`] in visit order, which is what makes a seeded run reproducible.

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::debug;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{BodyState, HealthState, Particle};
use crate::ecs::resources::{EcsSimConfig, SimRng};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::model::{ParticleSlot, resolve_collisions};

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, collide_particles.in_set(SimPhase::Collide));
    }
}

fn collide_particles(
    mut particles: Query<(&Particle, &mut BodyState, &mut HealthState)>,
    mut rng: ResMut<SimRng>,
    config: Res<EcsSimConfig>,
    clock: Res<SimClock>,
) {
    let mut rows: Vec<_> = particles.iter_mut().collect();
    if rows.len() < 2 {
        return;
    }
    rows.sort_by_key(|(particle, _, _)| particle.id);

    let mut slots: Vec<ParticleSlot> = rows
        .iter()
        .map(|(particle, body, health)| ParticleSlot {
            id: particle.id,
            body: body.0,
            health: health.0,
        })
        .collect();

    let rate = config.disease.infection_rate;
    let stats = resolve_collisions(&mut slots, config.collision_policy, clock.now(), || {
        rng.roll_percent(rate)
    });

    for ((_, body, health), slot) in rows.iter_mut().zip(&slots) {
        if body.0 != slot.body {
            body.0 = slot.body;
        }
        if health.0 != slot.health {
            health.0 = slot.health;
        }
    }

    if stats.contacts > 0 {
        debug!(
            contacts = stats.contacts,
            infections = stats.infections,
            "collision pass"
        );
    }
}

#[cfg(test)]
mod tests {
    use bevy_app::App;

    use super::*;
    use crate::ecs::spawn::spawn_particle;
    use crate::ecs::test_helpers::{body_of, health_of, test_app, tick};
    use crate::model::{Body, CollisionPolicy, SimConfig, Status, Vec2};

    fn app_with(policy: CollisionPolicy, rate: u32) -> App {
        let mut config = SimConfig::default();
        config.collision_policy = policy;
        config.disease.infection_rate = rate;
        let (mut app, _clock) = test_app(&config);
        app.add_plugins(CollisionPlugin);
        app
    }

    fn spawn(app: &mut App, mass: f64, x: f64, v: Vec2, status: Status) -> u64 {
        let body = Body::new(mass, 10.0, v, Vec2::new(x, 100.0)).unwrap();
        spawn_particle(app.world_mut(), body, status).unwrap()
    }

    #[test]
    fn overlapping_pair_exchanges_velocities() {
        let mut app = app_with(CollisionPolicy::Snapshot, 0);
        let a = spawn(&mut app, 5.0, 100.0, Vec2::new(10.0, 10.0), Status::Healthy);
        let b = spawn(&mut app, 10.0, 110.0, Vec2::new(-10.0, -10.0), Status::Healthy);
        tick(&mut app, 1);
        assert_eq!(body_of(&app, a).velocity, Vec2::new(-20.0, -20.0));
        assert_eq!(body_of(&app, b).velocity, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn certain_transmission_on_contact() {
        let mut app = app_with(CollisionPolicy::Sequential, 100);
        spawn(&mut app, 5.0, 100.0, Vec2::ZERO, Status::Infectious);
        let healthy = spawn(&mut app, 5.0, 110.0, Vec2::ZERO, Status::Healthy);
        tick(&mut app, 1);
        let health = health_of(&app, healthy);
        assert_eq!(health.status, Status::Infectious);
        assert!(!health.counted, "reconciliation is not installed here");
    }

    #[test]
    fn zero_rate_never_transmits() {
        let mut app = app_with(CollisionPolicy::Snapshot, 0);
        spawn(&mut app, 5.0, 100.0, Vec2::ZERO, Status::Infectious);
        let healthy = spawn(&mut app, 5.0, 110.0, Vec2::ZERO, Status::Healthy);
        tick(&mut app, 50);
        assert_eq!(health_of(&app, healthy).status, Status::Healthy);
    }
}
