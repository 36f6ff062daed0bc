use std::cell::RefCell;

use thruster_core::errors::CommandResult;
use thruster_core::property::{PropertyStore, Restorable};

use super::{AtomicMacroCommand, SimpleMacroCommand};
use crate::adapters::{FuelAdapter, MoveAdapter};
use crate::commands::{BurnFuel, CheckFuel, Command, Move};

/// `[CheckFuel, Move, BurnFuel]`: reserve, move, then debit the reservation.
///
/// If the check fails nothing changes. If the move fails after a successful
/// check, the reservation is written but never burned.
pub struct MoveWithFuel<'a> {
    inner: SimpleMacroCommand<'a>,
}

impl<'a> MoveWithFuel<'a> {
    pub const NAME: &'static str = "MoveWithFuel";

    pub fn new(
        check_fuel: impl Command + 'a,
        movement: impl Command + 'a,
        burn_fuel: impl Command + 'a,
    ) -> Self {
        Self {
            inner: SimpleMacroCommand::new(Self::NAME)
                .with(check_fuel)
                .with(movement)
                .with(burn_fuel),
        }
    }

    /// The full sequence over one entity, through its adapters.
    pub fn for_subject<S: PropertyStore + 'a>(subject: &'a RefCell<S>) -> Self {
        Self::new(
            CheckFuel::new(FuelAdapter::new(subject)),
            Move::new(MoveAdapter::new(subject)),
            BurnFuel::new(FuelAdapter::new(subject)),
        )
    }

    /// Like [`for_subject`](Self::for_subject), but restores the entity if any step fails.
    pub fn atomic<S: PropertyStore + Restorable + 'a>(
        subject: &'a RefCell<S>,
    ) -> AtomicMacroCommand<'a, S> {
        AtomicMacroCommand::new(subject, Self::for_subject(subject))
    }
}

impl Command for MoveWithFuel<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&mut self) -> CommandResult {
        self.inner.execute()
    }
}
