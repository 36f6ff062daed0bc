//! Commands that mutate an entity's kinematic and fuel state.
//!
//! Control flows strictly downward: macro command → single commands →
//! capability trait → adapter → property store. Each command depends only on
//! the narrowest capability it needs, never on the entity directly.

pub mod adapters;
pub mod capabilities;
pub mod commands;
pub mod macros;

pub use thruster_core as core;

pub use commands::Command;
