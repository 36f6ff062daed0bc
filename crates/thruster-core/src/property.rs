//! The property-store boundary.
//!
//! The command layer never owns entity state. It reads and writes named
//! properties through [`PropertyStore`], and every failure the store reports
//! is handed back to the caller unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::PropertyError;
use crate::types::{EntityId, Vector};

/// A single property value.
///
/// Serialized untagged: JSON `3` is an integer, `3.5` a number and
/// `[1.0, 2.0]` a vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Number(f64),
    Vector(Vector),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Number(_) => "number",
            PropertyValue::Vector(_) => "vector",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value. Integers widen to f64.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Integer(v) => Some(*v as f64),
            PropertyValue::Number(v) => Some(*v),
            PropertyValue::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector> {
        match self {
            PropertyValue::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<Vector> for PropertyValue {
    fn from(value: Vector) -> Self {
        PropertyValue::Vector(value)
    }
}

/// A keyed container the command layer reads and writes by name.
pub trait PropertyStore {
    fn entity_id(&self) -> EntityId;

    fn get_property(&self, name: &str) -> Result<PropertyValue, PropertyError>;

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError>;

    fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_ok()
    }

    fn get_integer(&self, name: &str) -> Result<i64, PropertyError> {
        let value = self.get_property(name)?;
        value
            .as_integer()
            .ok_or_else(|| wrong_type(self, name, "integer", &value))
    }

    fn get_number(&self, name: &str) -> Result<f64, PropertyError> {
        let value = self.get_property(name)?;
        value
            .as_number()
            .ok_or_else(|| wrong_type(self, name, "number", &value))
    }

    fn get_vector(&self, name: &str) -> Result<Vector, PropertyError> {
        let value = self.get_property(name)?;
        value
            .as_vector()
            .ok_or_else(|| wrong_type(self, name, "vector", &value))
    }
}

fn wrong_type<S: PropertyStore + ?Sized>(
    store: &S,
    name: &str,
    expected: &'static str,
    found: &PropertyValue,
) -> PropertyError {
    PropertyError::WrongType {
        entity: store.entity_id(),
        property: name.to_string(),
        expected,
        found: found.type_name(),
    }
}

impl<S: PropertyStore + ?Sized> PropertyStore for &mut S {
    fn entity_id(&self) -> EntityId {
        (**self).entity_id()
    }

    fn get_property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        (**self).get_property(name)
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        (**self).set_property(name, value)
    }

    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }
}

/// Saved property values of one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub properties: BTreeMap<String, PropertyValue>,
}

/// A store whose state can be captured and put back wholesale.
///
/// Only the opt-in atomic composite needs this; the plain command layer
/// never rolls anything back.
pub trait Restorable {
    fn snapshot(&self) -> PropertySnapshot;

    fn restore(&mut self, snapshot: PropertySnapshot);
}

impl<S: Restorable + ?Sized> Restorable for &mut S {
    fn snapshot(&self) -> PropertySnapshot {
        (**self).snapshot()
    }

    fn restore(&mut self, snapshot: PropertySnapshot) {
        (**self).restore(snapshot)
    }
}
