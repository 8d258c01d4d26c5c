//! All-pairs collision pass.
//!
//! Every ordered pair `(i, j)` with `i != j` is visited, outer and inner loop
//! both in ascending id order, so each touching pair is handled twice per
//! tick. Which velocities the second visit reads is decided by
//! [`CollisionPolicy`].
//!
//! Transmission rides on the same visits: when the acting particle `i` is
//! infectious and `j` is healthy, `roll` is asked whether the contact
//! transmits. Infections take effect immediately, so a particle infected
//! earlier in the pass can spread to particles visited after it.

use super::body::{Body, exchange_velocities};
use super::config::CollisionPolicy;
use super::health::{Health, Status};
use super::vec2::Vec2;

/// A particle as seen by the collision pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleSlot {
    pub id: u64,
    pub body: Body,
    pub health: Health,
}

/// Tallies from one pass, for logging.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Ordered-pair visits that found an overlap.
    pub contacts: u32,
    pub infections: u32,
}

/// Run one collision pass over `slots`, which must be sorted by id.
pub fn resolve_collisions(
    slots: &mut [ParticleSlot],
    policy: CollisionPolicy,
    now: f64,
    mut roll: impl FnMut() -> bool,
) -> PassStats {
    debug_assert!(slots.windows(2).all(|w| w[0].id < w[1].id));
    match policy {
        CollisionPolicy::Sequential => sequential_pass(slots, now, &mut roll),
        CollisionPolicy::Snapshot => snapshot_pass(slots, now, &mut roll),
    }
}

fn sequential_pass(
    slots: &mut [ParticleSlot],
    now: f64,
    roll: &mut impl FnMut() -> bool,
) -> PassStats {
    let mut stats = PassStats::default();
    let n = slots.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(slots, i, j);
            if !a.body.touches(&b.body) {
                continue;
            }
            stats.contacts += 1;
            let (va, vb) = exchange_velocities(&a.body, &b.body);
            b.body.velocity = vb;
            a.body.velocity = va;
            if transmit(&a.health, &mut b.health, now, roll) {
                stats.infections += 1;
            }
        }
    }
    stats
}

fn snapshot_pass(
    slots: &mut [ParticleSlot],
    now: f64,
    roll: &mut impl FnMut() -> bool,
) -> PassStats {
    let mut stats = PassStats::default();
    let frozen: Vec<Vec2> = slots.iter().map(|s| s.body.velocity).collect();
    let mut pending = frozen.clone();
    let n = slots.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(slots, i, j);
            if !a.body.touches(&b.body) {
                continue;
            }
            stats.contacts += 1;
            let before_a = Body {
                velocity: frozen[i],
                ..a.body
            };
            let before_b = Body {
                velocity: frozen[j],
                ..b.body
            };
            let (va, vb) = exchange_velocities(&before_a, &before_b);
            pending[i] = va;
            pending[j] = vb;
            if transmit(&a.health, &mut b.health, now, roll) {
                stats.infections += 1;
            }
        }
    }
    for (slot, velocity) in slots.iter_mut().zip(pending) {
        slot.body.velocity = velocity;
    }
    stats
}

fn transmit(
    source: &Health,
    target: &mut Health,
    now: f64,
    roll: &mut impl FnMut() -> bool,
) -> bool {
    if source.status != Status::Infectious || target.status != Status::Healthy {
        return false;
    }
    roll() && target.infect(now)
}

fn pair_mut(
    slots: &mut [ParticleSlot],
    i: usize,
    j: usize,
) -> (&mut ParticleSlot, &mut ParticleSlot) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = slots.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = slots.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
