use serde::{Deserialize, Serialize};

use super::counters::HealthCounters;
use super::health::Status;
use super::vec2::Vec2;

/// What a renderer needs to draw one particle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u64,
    pub position: Vec2,
    pub radius: f64,
    pub status: Status,
}

/// State of the whole world after a tick, particles in id order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub time: f64,
    pub particles: Vec<ParticleView>,
    pub counters: HealthCounters,
}

/// One point of the counter time series.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub tick: u64,
    pub time: f64,
    pub counters: HealthCounters,
}
