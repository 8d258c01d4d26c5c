use bevy_ecs::world::World;
use rand::Rng;
use tracing::info;

use crate::ecs::resources::{EcsSimConfig, SimRng};
use crate::ecs::spawn::spawn_particle;
use crate::error::{Error, Result};
use crate::model::{Arena, Body, PopulationConfig, Status, ValueRange, Vec2};

/// Add `population.healthy` healthy then `population.infectious` infectious
/// particles at random places with random velocities. Returns their IDs.
pub fn populate(world: &mut World, population: &PopulationConfig) -> Result<Vec<u64>> {
    let arena = world.resource::<EcsSimConfig>().arena;
    check_fits(population, &arena)?;

    let total = population
        .healthy
        .checked_add(population.infectious)
        .ok_or_else(|| {
            Error::InvalidConfig(format!(
                "population of {} healthy and {} infectious is too large",
                population.healthy, population.infectious
            ))
        })?;
    let mut ids = Vec::with_capacity(total as usize);
    for i in 0..total {
        let status = if i < population.healthy {
            Status::Healthy
        } else {
            Status::Infectious
        };
        let body = {
            let mut rng = world.resource_mut::<SimRng>();
            random_body(&mut rng.rng, population, &arena)?
        };
        ids.push(spawn_particle(world, body, status)?);
    }
    info!(
        healthy = population.healthy,
        infectious = population.infectious,
        "populated arena"
    );
    Ok(ids)
}

fn check_fits(population: &PopulationConfig, arena: &Arena) -> Result<()> {
    let diameter = 2.0 * population.radius.max;
    if diameter > arena.width || diameter > arena.height {
        return Err(Error::InvalidConfig(format!(
            "radius up to {} does not fit a {} x {} arena",
            population.radius.max, arena.width, arena.height
        )));
    }
    Ok(())
}

fn random_body(rng: &mut impl Rng, population: &PopulationConfig, arena: &Arena) -> Result<Body> {
    let mass = population.mass.sample(rng);
    let radius = population.radius.sample(rng);
    let velocity = Vec2::new(
        random_speed(rng, population.max_speed),
        random_speed(rng, population.max_speed),
    );
    let x = ValueRange {
        min: radius,
        max: arena.width - radius,
    }
    .sample(rng);
    let y = ValueRange {
        min: radius,
        max: arena.height - radius,
    }
    .sample(rng);
    Body::new(mass, radius, velocity, Vec2::new(x, y))
}

/// Integer component in `[-max, max]`; a zero draw becomes `max` so nobody
/// starts stalled on an axis.
fn random_speed(rng: &mut impl Rng, max: i32) -> f64 {
    match rng.random_range(-max..=max) {
        0 => max as f64,
        v => v as f64,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::ecs::resources::PopulationCounters;
    use crate::ecs::test_helpers::test_app;
    use crate::model::SimConfig;

    #[test]
    fn speeds_are_nonzero_integers_in_range() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..500 {
            let v = random_speed(&mut rng, 10);
            assert!(v != 0.0);
            assert_eq!(v.fract(), 0.0);
            assert!((-10.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn bodies_spawn_inside_the_arena() {
        let mut rng = SmallRng::seed_from_u64(11);
        let population = PopulationConfig {
            radius: ValueRange { min: 5.0, max: 20.0 },
            mass: ValueRange { min: 1.0, max: 9.0 },
            ..PopulationConfig::default()
        };
        let arena = Arena::default();
        for _ in 0..500 {
            let b = random_body(&mut rng, &population, &arena).unwrap();
            assert!((1.0..=9.0).contains(&b.mass));
            assert!((5.0..=20.0).contains(&b.radius));
            assert!(b.position.x >= b.radius && b.position.x <= arena.width - b.radius);
            assert!(b.position.y >= b.radius && b.position.y <= arena.height - b.radius);
        }
    }

    #[test]
    fn populate_counts_every_particle() {
        let config = SimConfig::default();
        let (mut app, _clock) = test_app(&config);
        let ids = populate(app.world_mut(), &config.population).unwrap();
        assert_eq!(ids, (0..51).collect::<Vec<u64>>());
        let c = app.world().resource::<PopulationCounters>().0;
        assert_eq!((c.healthy, c.infectious, c.total()), (50, 1, 51));
    }

    #[test]
    fn overflowing_headcount_rejected() {
        let mut config = SimConfig::default();
        config.population.healthy = u32::MAX;
        config.population.infectious = 1;
        let (mut app, _clock) = test_app(&config);
        let err = populate(app.world_mut(), &config.population).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert_eq!(app.world().resource::<PopulationCounters>().0.total(), 0);
    }

    #[test]
    fn oversized_radius_rejected() {
        let mut config = SimConfig::default();
        config.population.radius = ValueRange::fixed(400.0);
        let (mut app, _clock) = test_app(&config);
        let err = populate(app.world_mut(), &config.population).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
