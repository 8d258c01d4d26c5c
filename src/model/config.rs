//! Run configuration.
//!
//! Every field has a default, so a JSON config only needs to name what it
//! changes:
//!
//! ```json
//! {
//!   "arena": { "width": 1024, "height": 768 },
//!   "disease": { "infection_rate": 30 },
//!   "collision_policy": "sequential",
//!   "seed": 7
//! }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::health::Status;
use crate::error::{Error, Result};

/// Bounded rectangle `[0, width] × [0, height]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Transmission and recovery parameters.
///
/// Times are in the unit of the injected clock.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseParams {
    /// Chance in percent (0–100) that one contact roll transmits.
    pub infection_rate: u32,
    /// Time after infection at which a particle stops being infectious.
    pub time_infectious: f64,
    /// Time after infection at which a particle becomes immune.
    pub time_to_heal: f64,
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            infection_rate: 50,
            time_infectious: 7.0,
            time_to_heal: 10.0,
        }
    }
}

/// Inclusive range a random value is drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        if self.min >= self.max {
            self.min
        } else {
            rng.random_range(self.min..=self.max)
        }
    }
}

/// Parameters for [`crate::sim::Simulation::populate`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub healthy: u32,
    pub infectious: u32,
    pub mass: ValueRange,
    pub radius: ValueRange,
    /// Largest absolute velocity component, in units per tick.
    pub max_speed: i32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            healthy: 50,
            infectious: 1,
            mass: ValueRange::fixed(5.0),
            radius: ValueRange::fixed(10.0),
            max_speed: 10,
        }
    }
}

/// How the all-pairs collision pass reads velocities.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Each visit sees velocities already rewritten by earlier visits this tick.
    Sequential,
    /// Every visit reads pre-tick velocities; results are applied after the pass.
    #[default]
    Snapshot,
}

/// RGB colour per status for renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub healthy: [u8; 3],
    pub infectious: [u8; 3],
    pub infected: [u8; 3],
    pub immune: [u8; 3],
}

impl Palette {
    pub fn colour(&self, status: Status) -> [u8; 3] {
        match status {
            Status::Healthy => self.healthy,
            Status::Infectious => self.infectious,
            Status::Infected => self.infected,
            Status::Immune => self.immune,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            healthy: [0, 102, 204],
            infectious: [255, 0, 0],
            infected: [255, 153, 51],
            immune: [255, 51, 153],
        }
    }
}

/// Everything a simulation run is configured with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arena: Arena,
    pub disease: DiseaseParams,
    pub population: PopulationConfig,
    pub collision_policy: CollisionPolicy,
    pub palette: Palette,
    /// RNG seed for transmission rolls and random placement.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            disease: DiseaseParams::default(),
            population: PopulationConfig::default(),
            collision_policy: CollisionPolicy::default(),
            palette: Palette::default(),
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let Arena { width, height } = self.arena;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "arena must be finite and positive, got {width} x {height}"
            )));
        }

        let d = &self.disease;
        if d.infection_rate > 100 {
            return Err(Error::InvalidConfig(format!(
                "infection_rate is a percentage, got {}",
                d.infection_rate
            )));
        }
        if !(d.time_infectious.is_finite() && d.time_to_heal.is_finite())
            || d.time_infectious < 0.0
            || d.time_infectious >= d.time_to_heal
        {
            return Err(Error::InvalidConfig(format!(
                "need 0 <= time_infectious < time_to_heal, got {} and {}",
                d.time_infectious, d.time_to_heal
            )));
        }

        let p = &self.population;
        for (name, range) in [("mass", p.mass), ("radius", p.radius)] {
            if !(range.min.is_finite() && range.max.is_finite())
                || range.min <= 0.0
                || range.min > range.max
            {
                return Err(Error::InvalidConfig(format!(
                    "population {name} range must satisfy 0 < min <= max, got {}..={}",
                    range.min, range.max
                )));
            }
        }
        if p.max_speed < 0 {
            return Err(Error::InvalidConfig(format!(
                "max_speed must be >= 0, got {}",
                p.max_speed
            )));
        }
        Ok(())
    }
}
