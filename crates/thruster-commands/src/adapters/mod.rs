//! Adapters from a property store to capability traits.
//!
//! Adapters borrow the entity through a `RefCell` so several of them (and
//! so the commands of one composite) can address the same entity. Each
//! property access takes its own short borrow. Store errors pass through
//! unchanged.

pub mod fuel;
pub mod movement;
pub mod rotation;
pub mod velocity_direction;

pub use fuel::FuelAdapter;
pub use movement::MoveAdapter;
pub use rotation::RotatableAdapter;
pub use velocity_direction::VelocityDirectionAdapter;
