use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::ecs::components::BodyState;
use crate::ecs::resources::{EcsSimConfig, TickDelta};
use crate::ecs::schedule::{SimPhase, SimTick};

pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, advance_bodies.in_set(SimPhase::Advance));
    }
}

/// Wall bounce then position integration, per particle.
fn advance_bodies(
    mut bodies: Query<&mut BodyState>,
    config: Res<EcsSimConfig>,
    dt: Res<TickDelta>,
) {
    for mut body in &mut bodies {
        body.0.advance(&config.arena, dt.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::spawn::spawn_particle;
    use crate::ecs::test_helpers::{body_of, test_app, tick};
    use crate::model::{Body, SimConfig, Status, Vec2};

    #[test]
    fn bodies_move_and_bounce() {
        let (mut app, _clock) = test_app(&SimConfig::default());
        app.add_plugins(KinematicsPlugin);
        let world = app.world_mut();
        let free = spawn_particle(
            world,
            Body::new(5.0, 10.0, Vec2::new(2.0, 3.0), Vec2::new(400.0, 300.0)).unwrap(),
            Status::Healthy,
        )
        .unwrap();
        let walled = spawn_particle(
            world,
            Body::new(5.0, 10.0, Vec2::new(-4.0, 0.0), Vec2::new(10.0, 300.0)).unwrap(),
            Status::Healthy,
        )
        .unwrap();
        world.resource_mut::<TickDelta>().0 = 2.0;

        tick(&mut app, 1);

        let free = body_of(&app, free);
        assert_eq!(free.position, Vec2::new(404.0, 306.0));
        let walled = body_of(&app, walled);
        assert_eq!(walled.velocity, Vec2::new(4.0, 0.0));
        assert_eq!(walled.position, Vec2::new(18.0, 300.0));
    }
}
