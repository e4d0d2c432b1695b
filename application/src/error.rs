//! Application error type

use crate::ports::roster_source::RosterSourceError;
use crate::ports::storage::StorageError;
use podium_domain::DomainError;
use thiserror::Error;

/// Errors surfaced to the user by [`PickerController`](crate::PickerController).
///
/// None are fatal. Storage write failures are reported after the in-memory
/// state has already been updated.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Source(#[from] RosterSourceError),
}

impl PickerError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PickerError::Domain(e) if e.is_exhausted())
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            PickerError::Domain(e) => Some(e),
            _ => None,
        }
    }
}
