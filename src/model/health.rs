use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::DiseaseParams;

/// Health category of a particle.
///
/// `Infected` is the recovering stage: no longer infectious, not yet immune.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Healthy,
    Infectious,
    Infected,
    Immune,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Healthy,
        Status::Infectious,
        Status::Infected,
        Status::Immune,
    ];

    /// Position along the one-way disease path.
    pub fn stage(self) -> u8 {
        match self {
            Status::Healthy => 0,
            Status::Infectious => 1,
            Status::Infected => 2,
            Status::Immune => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Healthy => "healthy",
            Status::Infectious => "infectious",
            Status::Infected => "infected",
            Status::Immune => "immune",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status implied by the time since infection.
///
/// Level-triggered: evaluated every tick from scratch, so the result only
/// depends on `infected_at` and `now`.
pub fn status_of(infected_at: Option<f64>, now: f64, disease: &DiseaseParams) -> Status {
    let Some(t0) = infected_at else {
        return Status::Healthy;
    };
    let elapsed = now - t0;
    if elapsed >= disease.time_to_heal {
        Status::Immune
    } else if elapsed >= disease.time_infectious {
        Status::Infected
    } else {
        Status::Infectious
    }
}

/// Health state of one particle.
///
/// `counted` is cleared on every status change and set again once the world
/// counters have moved this particle from `tallied` to `status`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: Status,
    pub infected_at: Option<f64>,
    pub counted: bool,
    /// Status the world counters currently attribute to this particle.
    pub tallied: Status,
}

impl Health {
    /// Never infected, already reflected in the counters.
    pub fn healthy() -> Self {
        Self {
            status: Status::Healthy,
            infected_at: None,
            counted: true,
            tallied: Status::Healthy,
        }
    }

    /// Start in `status` at time `now`, already reflected in the counters.
    ///
    /// Non-healthy statuses get an `infected_at` back-dated so that
    /// [`status_of`] reproduces `status` at `now`.
    pub fn seeded(status: Status, now: f64, disease: &DiseaseParams) -> Self {
        let infected_at = match status {
            Status::Healthy => None,
            Status::Infectious => Some(now),
            Status::Infected => Some(now - disease.time_infectious),
            Status::Immune => Some(now - disease.time_to_heal),
        };
        Self {
            status,
            infected_at,
            counted: true,
            tallied: status,
        }
    }

    /// Transmission onto this particle. Only a healthy particle can catch it.
    pub fn infect(&mut self, now: f64) -> bool {
        if self.status != Status::Healthy {
            return false;
        }
        self.infected_at = Some(now);
        self.status = Status::Infectious;
        self.counted = false;
        true
    }

    /// Recompute the status from the clock. Returns the transition if any.
    ///
    /// The path only moves forward: a reading earlier than the last one
    /// never takes a particle back to an earlier stage.
    pub fn refresh(&mut self, now: f64, disease: &DiseaseParams) -> Option<(Status, Status)> {
        let next = status_of(self.infected_at, now, disease);
        if next.stage() <= self.status.stage() {
            return None;
        }
        let prev = self.status;
        self.status = next;
        self.counted = false;
        Some((prev, next))
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::healthy()
    }
}
