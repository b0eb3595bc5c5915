//! Store error types

use thiserror::Error;

/// Errors that can occur in the in-memory store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A weekly report with this id is already in the collection
    #[error("Duplicate report id: {0}")]
    DuplicateId(String),

    /// Status label is not one of the known review states
    #[error("Unknown report status: {0}")]
    UnknownStatus(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
