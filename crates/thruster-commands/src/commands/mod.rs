//! Single-responsibility commands.
//!
//! A command is constructed around one capability, executed once, and
//! discarded. `execute()` either applies its whole effect or returns an
//! error having written nothing.

pub mod fuel;
pub mod movement;
pub mod rotation;
pub mod velocity_direction;

pub use fuel::{BurnFuel, CheckFuel};
pub use movement::Move;
pub use rotation::Rotate;
pub use velocity_direction::ChangeVelocityDirection;

use thruster_core::errors::CommandResult;

/// A single executable operation.
pub trait Command {
    /// Stable name used in logs and macro failure reports.
    fn name(&self) -> &'static str;

    fn execute(&mut self) -> CommandResult;
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn execute(&mut self) -> CommandResult {
        (**self).execute()
    }
}
