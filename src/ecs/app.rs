use bevy_app::App;
use bevy_ecs::schedule::ExecutorKind;

use super::clock::{SimClock, TimeSource};
use super::resources::{
    EcsIdGenerator, EcsSimConfig, History, ParticleEntityMap, PopulationCounters, SimRng,
    TickDelta,
};
use super::schedule::configure_sim_schedule;
use crate::model::SimConfig;

/// Build a headless Bevy app with the clock, core resources and the tick
/// schedule, but no domain systems. Add [`super::plugin::SimPlugin`] (or
/// individual domain plugins) on top.
///
/// The schedule runs single-threaded: transmission rolls must draw from the
/// RNG in particle order for a seed to reproduce a run.
///
/// ```no_run
/// # use contagion_sim::ecs::{build_sim_app, ManualClock, SimPlugin, SimTick};
/// # use contagion_sim::model::SimConfig;
/// let mut app = build_sim_app(&SimConfig::default(), ManualClock::new(0.0));
/// app.add_plugins(SimPlugin);
/// app.world_mut().run_schedule(SimTick);
/// ```
pub fn build_sim_app(config: &SimConfig, clock: impl TimeSource) -> App {
    let mut app = App::empty();

    app.insert_resource(SimClock::new(clock));
    app.insert_resource(EcsSimConfig::from(config));
    app.insert_resource(SimRng::seeded(config.seed));
    app.init_resource::<EcsIdGenerator>();
    app.init_resource::<ParticleEntityMap>();
    app.init_resource::<PopulationCounters>();
    app.init_resource::<History>();
    app.init_resource::<TickDelta>();

    app.add_schedule(configure_sim_schedule(ExecutorKind::SingleThreaded));
    app
}
