//! Scenario files: initial entities plus a script replayed every tick.

use std::path::Path;

use serde::{Deserialize, Serialize};

use thruster_core::constants::ALL_PROPERTIES;
use thruster_core::entity::Entity;
use thruster_core::types::EntityId;

use crate::errors::DriverError;
use crate::orders::Order;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub entities: Vec<Entity>,
    /// Orders queued at the start of every tick, in this order.
    #[serde(default)]
    pub script: Vec<Order>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, DriverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DriverError> {
        let json = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// `(entity, property)` pairs no command reads or writes. Usually typos.
    pub fn unknown_properties(&self) -> Vec<(EntityId, String)> {
        self.entities
            .iter()
            .flat_map(|entity| {
                entity
                    .properties
                    .keys()
                    .filter(|name| !ALL_PROPERTIES.contains(&name.as_str()))
                    .map(move |name| (entity.id, name.clone()))
            })
            .collect()
    }
}
