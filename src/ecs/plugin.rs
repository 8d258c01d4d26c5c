use bevy_app::{App, Plugin};

use super::systems::collision::CollisionPlugin;
use super::systems::counters::CountersPlugin;
use super::systems::health::HealthPlugin;
use super::systems::kinematics::KinematicsPlugin;

/// Aggregate plugin that installs every per-tick domain plugin.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CollisionPlugin,
            KinematicsPlugin,
            HealthPlugin,
            CountersPlugin,
        ));
    }
}
