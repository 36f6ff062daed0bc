//! Core types and definitions for the thruster command layer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! property values, the property-store boundary, the reference entity store,
//! and the error taxonomy. It has no dependency on any runtime or driver.

pub mod constants;
pub mod entity;
pub mod errors;
pub mod property;
pub mod types;

pub use entity::Entity;
pub use errors::{CommandError, CommandResult, ErrorKind, PropertyError};
pub use property::{PropertySnapshot, PropertyStore, PropertyValue, Restorable};
pub use types::{EntityId, SimTime, Vector};

#[cfg(test)]
mod tests;
