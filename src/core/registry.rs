// In memory registry of constructed cups.
//
// Purpose
// - Back the type-owned instance set of `Cup`.
//
// Responsibilities
// - Keep one strong reference per cup, keyed by identity.
// - Never hold the same identity twice.
// - Empty itself on request, whatever its current state.

use crate::core::cup::{Cup, CupId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Empty,
    Populated(usize),
}

#[derive(Debug, Default)]
pub struct CupRegistry {
    instances: HashMap<CupId, Arc<Cup>>,
}

impl CupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the cup to the set. Returns `false` when its identity is already present.
    pub fn register(&mut self, cup: Arc<Cup>) -> bool {
        match self.instances.entry(cup.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                tracing::trace!(
                    cup_id = %cup.id(),
                    name = ?cup.name(),
                    size = ?cup.size(),
                    "cup registered"
                );
                slot.insert(cup);
                true
            }
        }
    }

    pub fn contains(&self, id: CupId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn state(&self) -> RegistryState {
        match self.instances.len() {
            0 => RegistryState::Empty,
            n => RegistryState::Populated(n),
        }
    }

    pub fn snapshot(&self) -> Vec<Arc<Cup>> {
        self.instances.values().cloned().collect()
    }

    /// Drops every registered cup and returns how many were evicted.
    pub fn clear(&mut self) -> usize {
        let evicted = self.instances.len();
        self.instances.clear();
        tracing::debug!(evicted, "cup registry cleared");
        evicted
    }
}
