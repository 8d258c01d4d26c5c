use serde::{Deserialize, Serialize};

use super::config::Arena;
use super::vec2::Vec2;
use crate::error::{Error, Result};

/// Physical state of one particle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    /// Units per tick.
    pub velocity: Vec2,
    pub mass: f64,
    pub radius: f64,
}

impl Body {
    /// Build a body, rejecting anything the collision response can't divide by.
    pub fn new(mass: f64, radius: f64, velocity: Vec2, position: Vec2) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidMass(mass));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius(radius));
        }
        if !velocity.is_finite() {
            return Err(Error::NonFinite("velocity"));
        }
        if !position.is_finite() {
            return Err(Error::NonFinite("position"));
        }
        Ok(Self {
            position,
            velocity,
            mass,
            radius,
        })
    }

    /// Overlap test: centre distance no greater than the sum of radii.
    pub fn touches(&self, other: &Body) -> bool {
        self.position.distance(other.position) <= self.radius + other.radius
    }

    /// Reflect velocity on every axis whose wall the disc touches or crosses.
    ///
    /// Level-triggered: a disc still outside after last tick's flip is flipped
    /// again, and a disc in a corner flips on both axes. Returns true if any
    /// axis flipped.
    pub fn bounce_off_walls(&mut self, arena: &Arena) -> bool {
        let mut bounced = false;
        let r = self.radius;
        if self.position.x + r >= arena.width || self.position.x - r <= 0.0 {
            self.velocity.x = -self.velocity.x;
            bounced = true;
        }
        if self.position.y + r >= arena.height || self.position.y - r <= 0.0 {
            self.velocity.y = -self.velocity.y;
            bounced = true;
        }
        bounced
    }

    /// Wall check, then `position += velocity * dt`.
    pub fn advance(&mut self, arena: &Arena, dt: f64) {
        self.bounce_off_walls(arena);
        self.position += self.velocity * dt;
    }
}

/// Mass-ratio velocity swap for a touching pair `(a, b)`.
///
/// Returns `(new_a, new_b)` = `(m_b/m_a · v_b, m_a/m_b · v_a)`. This neither
/// conserves momentum nor energy in general; trajectories depend on it exactly.
pub fn exchange_velocities(a: &Body, b: &Body) -> (Vec2, Vec2) {
    let new_a = (b.mass / a.mass) * b.velocity;
    let new_b = (a.mass / b.mass) * a.velocity;
    (new_a, new_b)
}
