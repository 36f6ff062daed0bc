//! In-memory property store.
//!
//! `Entity` is the reference implementation of [`PropertyStore`]: a map of
//! property names to values plus an optional set of read-only names. Drivers
//! and tests build entities with it; the command layer only sees the trait.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::PropertyError;
use crate::property::{PropertySnapshot, PropertyStore, PropertyValue, Restorable};
use crate::types::EntityId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    /// Properties that reject writes.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub read_only: BTreeSet<String>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Make `name` read-only; later writes fail with [`PropertyError::ReadOnly`].
    pub fn lock(mut self, name: &str) -> Self {
        self.read_only.insert(name.to_string());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.properties.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }
}

impl PropertyStore for Entity {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn get_property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        self.properties
            .get(name)
            .copied()
            .ok_or_else(|| PropertyError::NotFound {
                entity: self.id,
                property: name.to_string(),
            })
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        if self.read_only.contains(name) {
            return Err(PropertyError::ReadOnly {
                entity: self.id,
                property: name.to_string(),
            });
        }
        self.properties.insert(name.to_string(), value);
        Ok(())
    }

    fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

impl Restorable for Entity {
    fn snapshot(&self) -> PropertySnapshot {
        PropertySnapshot {
            properties: self.properties.clone(),
        }
    }

    /// Restores values directly, bypassing read-only checks.
    fn restore(&mut self, snapshot: PropertySnapshot) {
        self.properties = snapshot.properties;
    }
}
