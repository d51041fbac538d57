// Cup is the value type whose instances are tracked by a registry owned by the type itself.
//
// Responsibilities
// - Hold an optional name and an optional size, both fixed at construction.
// - Register every new instance in the type-owned registry.
// - Expose an explicit reset of that registry for test harnesses.
//
// Boundaries
// - The registry is one process-wide static. Every thread sees the same set of cups.

use crate::core::cup_size::CupSize;
use crate::core::registry::{CupRegistry, RegistryState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

static INSTANCES: LazyLock<Mutex<CupRegistry>> = LazyLock::new(|| Mutex::new(CupRegistry::new()));

fn registry() -> MutexGuard<'static, CupRegistry> {
    INSTANCES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Identity of a cup. Registry membership is keyed on it, never on the cup's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CupId(Uuid);

impl CupId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug)]
pub struct Cup {
    id: CupId,
    name: Option<String>,
    size: Option<CupSize>,
}

impl Cup {
    pub fn new(name: Option<String>, size: Option<CupSize>) -> Arc<Self> {
        let cup = Arc::new(Self {
            id: CupId::new(),
            name,
            size,
        });
        registry().register(Arc::clone(&cup));
        cup
    }

    pub fn builder() -> CupBuilder {
        CupBuilder::default()
    }

    pub fn id(&self) -> CupId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn size(&self) -> Option<CupSize> {
        self.size
    }

    pub fn is_registered(&self) -> bool {
        registry().contains(self.id)
    }

    pub fn registry_len() -> usize {
        registry().len()
    }

    pub fn registry_state() -> RegistryState {
        registry().state()
    }

    pub fn instances() -> Vec<Arc<Cup>> {
        registry().snapshot()
    }

    /// Empties the type-owned registry. Safe to call on an empty registry.
    pub fn clear_registry() {
        registry().clear();
    }
}

#[derive(Debug, Default)]
pub struct CupBuilder {
    name: Option<String>,
    size: Option<CupSize>,
}

impl CupBuilder {
    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn size(mut self, v: CupSize) -> Self {
        self.size = Some(v);
        self
    }

    pub fn build(self) -> Arc<Cup> {
        Cup::new(self.name, self.size)
    }
}
