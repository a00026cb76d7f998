//! Error types for the store layer

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id exists
    #[error("Record not found: {id}")]
    NotFound { id: String },

    /// A record was submitted with an empty id
    #[error("Record id must not be empty")]
    EmptyId,

    /// A record with the same id is already stored
    #[error("Record already exists: {id}")]
    DuplicateId { id: String },
}
