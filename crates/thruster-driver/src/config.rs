//! Driver configuration, read from the environment.

use std::path::PathBuf;

use crate::errors::DriverError;

pub const TICKS_VAR: &str = "THRUSTER_TICKS";
pub const ATOMIC_MOVES_VAR: &str = "THRUSTER_ATOMIC_MOVES";
pub const SCENARIO_VAR: &str = "THRUSTER_SCENARIO";

/// Configuration for a driver run.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Number of ticks `Driver::run` executes.
    pub ticks: u64,
    /// Restore the entity when a `MoveWithFuel` order fails part-way.
    pub atomic_fuel_moves: bool,
    /// Scenario file loaded by the binary.
    pub scenario_path: PathBuf,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ticks: 10,
            atomic_fuel_moves: false,
            scenario_path: PathBuf::from("demos/scenario.json"),
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Result<Self, DriverError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DriverError> {
        let mut config = Self::default();

        if let Some(value) = lookup(TICKS_VAR) {
            config.ticks = value.trim().parse().map_err(|_| DriverError::InvalidConfig {
                var: TICKS_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ATOMIC_MOVES_VAR) {
            config.atomic_fuel_moves = parse_flag(&value).ok_or_else(|| DriverError::InvalidConfig {
                var: ATOMIC_MOVES_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(SCENARIO_VAR) {
            config.scenario_path = PathBuf::from(value);
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
