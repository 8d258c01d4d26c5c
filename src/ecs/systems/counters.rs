//! Counter reconciliation and history sampling (Reconcile phase).
//!
//! Reconciliation is the only place particles move between the world's four
//! counters during a tick: each particle with `counted == false` is moved
//! from the status it was last counted under to its current status.

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::clock::SimClock;
use crate::ecs::components::HealthState;
use crate::ecs::resources::{History, PopulationCounters};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::model::HistorySample;

pub struct CountersPlugin;

impl Plugin for CountersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (reconcile_counters, record_history)
                .chain()
                .in_set(SimPhase::Reconcile),
        );
    }
}

fn reconcile_counters(
    mut particles: Query<&mut HealthState>,
    mut counters: ResMut<PopulationCounters>,
) {
    for mut health in &mut particles {
        if health.0.counted {
            continue;
        }
        let health = &mut health.0;
        counters.0.shift(health.tallied, health.status);
        health.tallied = health.status;
        health.counted = true;
    }
}

fn record_history(
    clock: Res<SimClock>,
    counters: Res<PopulationCounters>,
    mut history: ResMut<History>,
) {
    // Numbered like the snapshot taken once this tick has finished.
    history.push(HistorySample {
        tick: clock.tick_count + 1,
        time: clock.now(),
        counters: counters.0,
    });
}
