use std::path::PathBuf;

use thiserror::Error;

use thruster_core::errors::CommandError;
use thruster_core::types::EntityId;

/// Failure setting up or running the driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entity {0} already exists")]
    DuplicateEntity(EntityId),

    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },
}

/// Failure of a single order. Reported in the tick snapshot.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl OrderError {
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::UnknownEntity(_) => "ERR_UNKNOWN_ENTITY",
            OrderError::Command(err) => err.kind().code(),
        }
    }

    pub fn cause_code(&self) -> &'static str {
        match self {
            OrderError::UnknownEntity(_) => self.code(),
            OrderError::Command(err) => err.root_cause().kind().code(),
        }
    }
}
