//! Names of the entity properties the command layer reads and writes.
//!
//! Adapters are the only code that addresses properties by name; everything
//! above them works through capability traits.

/// Current location (vector).
pub const POSITION: &str = "position";
/// Un-rotated speed components (vector).
pub const VELOCITY: &str = "velocity";
/// Current discrete heading index (integer in `[0, direction_number)`).
pub const DIRECTION: &str = "direction";
/// Number of discrete headings (positive integer).
pub const DIRECTION_NUMBER: &str = "direction_number";
/// Heading delta applied per rotation (integer, may be negative).
pub const ANGULAR_VELOCITY: &str = "angular_velocity";
/// Heading used to project velocity into world space.
pub const VELOCITY_DIRECTION: &str = "velocity_direction";
/// Remaining fuel.
pub const FUEL_IN_TANK: &str = "fuel_in_tank";
/// Fuel reserved by the last fuel check, consumed by the next burn.
pub const FUEL_FOR_NEXT_MOVE: &str = "fuel_for_next_move";
/// Fuel units per unit of velocity magnitude.
pub const FUEL_CONSUMPTION: &str = "fuel_consumption";

/// Every property the command layer knows about.
pub const ALL_PROPERTIES: [&str; 9] = [
    POSITION,
    VELOCITY,
    DIRECTION,
    DIRECTION_NUMBER,
    ANGULAR_VELOCITY,
    VELOCITY_DIRECTION,
    FUEL_IN_TANK,
    FUEL_FOR_NEXT_MOVE,
    FUEL_CONSUMPTION,
];
