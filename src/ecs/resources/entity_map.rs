use std::collections::{BTreeMap, BTreeSet};

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::error::{Error, Result};

/// Particle ID to Bevy entity lookup. Each ID and each entity can be
/// registered once.
///
/// Iteration follows ascending particle ID, i.e. insertion order.
#[derive(Resource, Debug, Clone, Default)]
pub struct ParticleEntityMap {
    to_bevy: BTreeMap<u64, Entity>,
    entities: BTreeSet<Entity>,
}

impl ParticleEntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Fails if either side is already registered.
    pub fn insert(&mut self, id: u64, entity: Entity) -> Result<()> {
        if self.to_bevy.contains_key(&id) || self.entities.contains(&entity) {
            return Err(Error::DuplicateId(id));
        }
        self.to_bevy.insert(id, entity);
        self.entities.insert(entity);
        Ok(())
    }

    pub fn get_bevy(&self, id: u64) -> Option<Entity> {
        self.to_bevy.get(&id).copied()
    }

    /// `(id, entity)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, Entity)> + '_ {
        self.to_bevy.iter().map(|(&id, &e)| (id, e))
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}
