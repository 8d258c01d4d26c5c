use serde::{Deserialize, Serialize};

use super::health::Status;

/// Per-status population totals.
///
/// The four fields always sum to the number of particles in the world.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCounters {
    pub healthy: u32,
    pub infectious: u32,
    pub infected: u32,
    pub immune: u32,
}

impl HealthCounters {
    pub fn get(&self, status: Status) -> u32 {
        match status {
            Status::Healthy => self.healthy,
            Status::Infectious => self.infectious,
            Status::Infected => self.infected,
            Status::Immune => self.immune,
        }
    }

    fn slot(&mut self, status: Status) -> &mut u32 {
        match status {
            Status::Healthy => &mut self.healthy,
            Status::Infectious => &mut self.infectious,
            Status::Infected => &mut self.infected,
            Status::Immune => &mut self.immune,
        }
    }

    /// Count a newly added particle.
    pub fn add(&mut self, status: Status) {
        *self.slot(status) += 1;
    }

    /// Move one particle from `from` to `to`: one decrement, one increment.
    pub fn shift(&mut self, from: Status, to: Status) {
        let src = self.slot(from);
        debug_assert!(*src > 0, "counter for {from} would go negative");
        *src = src.saturating_sub(1);
        *self.slot(to) += 1;
    }

    pub fn total(&self) -> u32 {
        self.healthy + self.infectious + self.infected + self.immune
    }
}
