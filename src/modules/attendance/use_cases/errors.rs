use crate::modules::attendance::core::gate::GateError;
use crate::modules::attendance::core::justification::JustificationError;
use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

/// The one error a use case hands back to its caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Justification(#[from] JustificationError),

    #[error("attendance record not found")]
    NotFound,

    #[error("attendance store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("attendance record kept changing, gave up after {attempts} attempts")]
    Contention { attempts: u32 },
}

impl From<RecordStoreError> for ApplicationError {
    fn from(error: RecordStoreError) -> Self {
        match error {
            RecordStoreError::Backend(reason) => ApplicationError::StoreUnavailable(reason),
            RecordStoreError::VersionMismatch { .. } => {
                ApplicationError::Contention { attempts: 1 }
            }
        }
    }
}
