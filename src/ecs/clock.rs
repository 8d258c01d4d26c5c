use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};

use super::resources::TickDelta;

/// Where the simulation reads time from.
///
/// The disease timer compares differences of `now()` readings against
/// `time_infectious`/`time_to_heal`, so those must be in this source's unit.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> f64;

    /// Called once at the end of every tick with that tick's `dt`.
    fn on_tick(&mut self, _dt: f64) {}
}

/// Monotonic wall time in seconds since construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Externally driven time. Clones share the same reading, so a test can keep
/// one handle and move the other into the simulation.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(start.to_bits())),
        }
    }

    pub fn set(&self, time: f64) {
        self.bits.store(time.to_bits(), Ordering::Relaxed);
    }

    pub fn advance(&self, by: f64) {
        // fetch_update only fails if the closure returns None.
        let _ = self
            .bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |b| {
                Some((f64::from_bits(b) + by).to_bits())
            });
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.get()
    }
}

/// Simulated time that moves `dt * time_per_tick` after every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickClock {
    now: f64,
    time_per_tick: f64,
}

impl TickClock {
    pub fn new(time_per_tick: f64) -> Self {
        Self {
            now: 0.0,
            time_per_tick,
        }
    }
}

impl TimeSource for TickClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn on_tick(&mut self, dt: f64) {
        self.now += dt * self.time_per_tick;
    }
}

/// Simulation clock resource: the injected time source, the reading taken
/// at the start of the current tick, and the number of completed ticks.
#[derive(Resource)]
pub struct SimClock {
    source: Box<dyn TimeSource>,
    now: f64,
    pub tick_count: u64,
}

impl SimClock {
    pub fn new(source: impl TimeSource) -> Self {
        let now = source.now();
        Self {
            source: Box::new(source),
            now,
            tick_count: 0,
        }
    }

    /// Reading cached by the last [`SimClock::sample`].
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Take a fresh reading from the source.
    pub fn sample(&mut self) -> f64 {
        self.now = self.source.now();
        self.now
    }

    pub fn advance(&mut self, dt: f64) {
        self.source.on_tick(dt);
        self.tick_count += 1;
    }
}

/// Reads the time source once so every system in the tick sees the same time.
/// Registered in `SimPhase::PreUpdate`.
pub fn sample_clock(mut clock: ResMut<SimClock>) {
    clock.sample();
}

/// Counts the tick and lets the source move on. Registered in `SimPhase::Last`.
pub fn advance_clock(mut clock: ResMut<SimClock>, dt: Res<TickDelta>) {
    clock.advance(dt.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_handles_share_time() {
        let handle = ManualClock::new(1.5);
        let mut clock = SimClock::new(handle.clone());
        assert_eq!(clock.now(), 1.5);

        handle.advance(2.0);
        assert_eq!(clock.now(), 1.5, "reading is cached until sampled");
        assert_eq!(clock.sample(), 3.5);

        handle.set(10.0);
        assert_eq!(clock.sample(), 10.0);
    }

    #[test]
    fn tick_clock_moves_on_advance() {
        let mut clock = SimClock::new(TickClock::new(0.5));
        assert_eq!(clock.sample(), 0.0);
        clock.advance(1.0);
        clock.advance(2.0);
        assert_eq!(clock.sample(), 1.5);
        assert_eq!(clock.tick_count, 2);
    }

    #[test]
    fn manual_clock_ignores_ticks() {
        let mut clock = SimClock::new(ManualClock::new(4.0));
        clock.advance(1.0);
        assert_eq!(clock.sample(), 4.0);
        assert_eq!(clock.tick_count, 1);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
