//! Error taxonomy for property access and command execution.
//!
//! Property-access errors are raised by the store and surface unchanged
//! through adapters and single commands. Everything else is a command
//! exception: a capability-contract violation, the fuel check refusing a
//! move, or a macro command reporting the sub-command that stopped it.

use thiserror::Error;

use crate::types::EntityId;

/// Result type alias for command execution.
pub type CommandResult<T = ()> = std::result::Result<T, CommandError>;

/// Failure reading or writing a named property on an entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("entity {entity}: property `{property}` not found")]
    NotFound { entity: EntityId, property: String },

    #[error("entity {entity}: property `{property}` is {found}, expected {expected}")]
    WrongType {
        entity: EntityId,
        property: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("entity {entity}: property `{property}` is read-only")]
    ReadOnly { entity: EntityId, property: String },
}

/// Failure of a command's `execute()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Passed through verbatim from the property store.
    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(
        "entity {entity}: not enough fuel for move (in tank {fuel_in_tank}, needed {fuel_needed})"
    )]
    NotEnoughFuelForMove {
        entity: EntityId,
        fuel_in_tank: f64,
        fuel_needed: f64,
    },

    #[error("entity {entity}: invalid use of {capability}: {reason}")]
    InvalidCapabilityUse {
        entity: EntityId,
        capability: &'static str,
        reason: String,
    },

    /// A macro command stopped at `step` because the sub-command `failed` errored.
    #[error("{command} failed at step {step} ({failed})")]
    MacroFailed {
        command: &'static str,
        step: usize,
        failed: &'static str,
        #[source]
        source: Box<CommandError>,
    },
}

/// Stable classification of command errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PropertyAccess,
    NotEnoughFuel,
    InvalidCapabilityUse,
    CommandFailed,
}

impl ErrorKind {
    /// Stable error code, suitable for logs and driver reports.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::PropertyAccess => "ERR_PROPERTY_ACCESS",
            ErrorKind::NotEnoughFuel => "ERR_NOT_ENOUGH_FUEL",
            ErrorKind::InvalidCapabilityUse => "ERR_INVALID_CAPABILITY_USE",
            ErrorKind::CommandFailed => "ERR_COMMAND_FAILED",
        }
    }
}

impl PropertyError {
    pub fn property(&self) -> &str {
        match self {
            PropertyError::NotFound { property, .. }
            | PropertyError::WrongType { property, .. }
            | PropertyError::ReadOnly { property, .. } => property,
        }
    }
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Property(_) => ErrorKind::PropertyAccess,
            CommandError::NotEnoughFuelForMove { .. } => ErrorKind::NotEnoughFuel,
            CommandError::InvalidCapabilityUse { .. } => ErrorKind::InvalidCapabilityUse,
            CommandError::MacroFailed { .. } => ErrorKind::CommandFailed,
        }
    }

    /// True for every domain error; false for store errors passed through unchanged.
    ///
    /// Running out of fuel is a command exception like any other, only more specific.
    pub fn is_command_exception(&self) -> bool {
        !matches!(self, CommandError::Property(_))
    }

    /// The innermost error, following nested macro failures.
    pub fn root_cause(&self) -> &CommandError {
        let mut current = self;
        while let CommandError::MacroFailed { source, .. } = current {
            current = source;
        }
        current
    }

    /// Wrap `self` as the cause of a macro command failure.
    pub fn in_macro(self, command: &'static str, step: usize, failed: &'static str) -> Self {
        CommandError::MacroFailed {
            command,
            step,
            failed,
            source: Box::new(self),
        }
    }
}
