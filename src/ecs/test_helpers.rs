use bevy_app::App;

use crate::ecs::app::build_sim_app;
use crate::ecs::clock::ManualClock;
use crate::ecs::components::{BodyState, HealthState};
use crate::ecs::resources::ParticleEntityMap;
use crate::ecs::schedule::SimTick;
use crate::model::{Body, Health, SimConfig};

/// Bare app driven by a manual clock starting at 0. The returned handle
/// shares time with the app's clock.
pub fn test_app(config: &SimConfig) -> (App, ManualClock) {
    let clock = ManualClock::new(0.0);
    (build_sim_app(config, clock.clone()), clock)
}

/// Run `n` ticks.
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

pub fn body_of(app: &App, id: u64) -> Body {
    let world = app.world();
    let entity = world
        .resource::<ParticleEntityMap>()
        .get_bevy(id)
        .unwrap_or_else(|| panic!("no particle {id}"));
    world.get::<BodyState>(entity).unwrap().0
}

pub fn health_of(app: &App, id: u64) -> Health {
    let world = app.world();
    let entity = world
        .resource::<ParticleEntityMap>()
        .get_bevy(id)
        .unwrap_or_else(|| panic!("no particle {id}"));
    world.get::<HealthState>(entity).unwrap().0
}
