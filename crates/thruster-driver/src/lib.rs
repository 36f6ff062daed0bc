//! Reference driver for the thruster command layer.
//!
//! Owns a hecs world of property-store entities, turns queued orders into
//! commands each tick, and reports what happened as snapshots. Failed orders
//! are logged and reported, never retried.

pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod orders;
pub mod scenario;
pub mod state;

pub use thruster_commands as commands;
pub use thruster_core as core;

pub use config::DriverConfig;
pub use engine::Driver;

#[cfg(test)]
mod tests;
