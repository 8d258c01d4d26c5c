use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::{advance_clock, sample_clock};

/// Schedule label for one simulation tick.
/// Run via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each tick.
///
/// ```text
/// PreUpdate → Collide → Advance → Heal → Reconcile → Last
/// ```
///
/// - `Collide`: all-pairs velocity exchange and transmission rolls
/// - `Advance`: wall bounce and position integration
/// - `Heal`: status recomputed from the clock
/// - `Reconcile`: world counters caught up with status changes, then sampled
/// - `Last`: the clock moves on
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Collide,
    Advance,
    Heal,
    Reconcile,
    Last,
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Collide,
            SimPhase::Advance,
            SimPhase::Heal,
            SimPhase::Reconcile,
            SimPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(sample_clock.in_set(SimPhase::PreUpdate));
    schedule.add_systems(advance_clock.in_set(SimPhase::Last));
    schedule
}
