use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::{info, warn};

use crate::ecs::clock::SimClock;
use crate::ecs::components::{BodyState, HealthState, Particle};
use crate::ecs::resources::{EcsIdGenerator, EcsSimConfig, ParticleEntityMap, PopulationCounters};
use crate::error::Result;
use crate::model::{Body, Health, HealthCounters, Status};

fn register(world: &mut World, id: u64, entity: Entity) -> Result<()> {
    world.resource_mut::<ParticleEntityMap>().insert(id, entity)
}

/// Spawn a particle with the next ID and count it under `status`.
///
/// The clock is sampled fresh so a seeded infection starts now, not at the
/// start of the last tick.
pub fn spawn_particle(world: &mut World, body: Body, status: Status) -> Result<u64> {
    let now = world.resource_mut::<SimClock>().sample();
    let disease = world.resource::<EcsSimConfig>().disease;
    let id = world.resource_mut::<EcsIdGenerator>().0.next_id();
    let health = Health::seeded(status, now, &disease);

    let entity = world
        .spawn((Particle { id }, BodyState(body), HealthState(health)))
        .id();
    if let Err(err) = register(world, id, entity) {
        world.despawn(entity);
        return Err(err);
    }
    world.resource_mut::<PopulationCounters>().0.add(status);
    Ok(id)
}

/// Put every particle back to healthy and re-seed the lowest ID as infectious.
///
/// Counters are rebuilt from scratch. Bodies are left where they are.
/// Returns the re-seeded particle's ID, or `None` for an empty world.
pub fn reset_population(world: &mut World) -> Option<u64> {
    let order: Vec<(u64, Entity)> = world.resource::<ParticleEntityMap>().iter().collect();
    let Some(&(patient_zero, _)) = order.first() else {
        warn!("reset requested on an empty world");
        return None;
    };

    let now = world.resource_mut::<SimClock>().sample();
    let disease = world.resource::<EcsSimConfig>().disease;
    let mut counters = HealthCounters::default();
    for (id, entity) in order {
        let status = if id == patient_zero {
            Status::Infectious
        } else {
            Status::Healthy
        };
        if let Some(mut health) = world.get_mut::<HealthState>(entity) {
            health.0 = Health::seeded(status, now, &disease);
            counters.add(status);
        }
    }
    world.resource_mut::<PopulationCounters>().0 = counters;
    info!(patient_zero, particles = counters.total(), "population reset");
    Some(patient_zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::test_helpers::test_app;
    use crate::error::Error;
    use crate::model::{SimConfig, Vec2};

    fn body() -> Body {
        Body::new(5.0, 10.0, Vec2::new(1.0, 1.0), Vec2::new(100.0, 100.0)).unwrap()
    }

    #[test]
    fn ids_follow_insertion_order() {
        let (mut app, _clock) = test_app(&SimConfig::default());
        let world = app.world_mut();
        assert_eq!(spawn_particle(world, body(), Status::Healthy).unwrap(), 0);
        assert_eq!(spawn_particle(world, body(), Status::Infectious).unwrap(), 1);
        assert_eq!(world.resource::<ParticleEntityMap>().len(), 2);

        let counters = world.resource::<PopulationCounters>().0;
        assert_eq!(counters.healthy, 1);
        assert_eq!(counters.infectious, 1);
    }

    #[test]
    fn seeded_infection_uses_current_time() {
        let (mut app, clock) = test_app(&SimConfig::default());
        clock.set(12.0);
        let world = app.world_mut();
        let id = spawn_particle(world, body(), Status::Infectious).unwrap();
        let entity = world.resource::<ParticleEntityMap>().get_bevy(id).unwrap();
        let health = world.get::<HealthState>(entity).unwrap().0;
        assert_eq!(health.infected_at, Some(12.0));
        assert!(health.counted);
    }

    #[test]
    fn clashing_id_is_rejected_and_rolled_back() {
        let (mut app, _clock) = test_app(&SimConfig::default());
        let world = app.world_mut();
        spawn_particle(world, body(), Status::Healthy).unwrap();
        // Rewind the generator so the next ID collides.
        world.resource_mut::<EcsIdGenerator>().0 = crate::IdGenerator::starting_from(0);
        let err = spawn_particle(world, body(), Status::Healthy).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(0)));
        assert_eq!(world.resource::<PopulationCounters>().0.total(), 1);
        assert_eq!(world.query::<&Particle>().iter(world).count(), 1);
    }

    #[test]
    fn reset_reseeds_lowest_id() {
        let (mut app, clock) = test_app(&SimConfig::default());
        let world = app.world_mut();
        for status in [Status::Immune, Status::Infected, Status::Infectious, Status::Healthy] {
            spawn_particle(world, body(), status).unwrap();
        }
        clock.set(30.0);
        assert_eq!(reset_population(world), Some(0));

        let counters = world.resource::<PopulationCounters>().0;
        assert_eq!(counters.healthy, 3);
        assert_eq!(counters.infectious, 1);
        assert_eq!(counters.infected + counters.immune, 0);

        let map = world.resource::<ParticleEntityMap>().clone();
        for (id, entity) in map.iter() {
            let health = world.get::<HealthState>(entity).unwrap().0;
            if id == 0 {
                assert_eq!(health.status, Status::Infectious);
                assert_eq!(health.infected_at, Some(30.0));
            } else {
                assert_eq!(health, Health::healthy());
            }
        }
    }

    #[test]
    fn reset_on_empty_world_is_noop() {
        let (mut app, _clock) = test_app(&SimConfig::default());
        assert_eq!(reset_population(app.world_mut()), None);
        assert_eq!(app.world().resource::<PopulationCounters>().0.total(), 0);
    }
}
