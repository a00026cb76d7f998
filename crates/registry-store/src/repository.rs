//! Repository trait for record storage
//!
//! Defines the five CRUD operations every backend must provide. Reads are
//! plain lookups and are never retried; mutations are expected to run under
//! the backend's retry policy.

use crate::StoreResult;
use async_trait::async_trait;
use registry_core::{FilterCriteria, Record};

/// Record storage facade
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` for use across async tasks. At most
/// one mutation may be in flight at a time; reads may run concurrently with
/// each other but are excluded during a mutation.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Return all records matching the criteria, in insertion order
    ///
    /// An empty result is a valid result, never an error.
    async fn query(&self, criteria: &FilterCriteria) -> StoreResult<Vec<Record>>;

    /// Return the first record with the given id, if any
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>>;

    /// Append a record, returning the stored record unchanged
    ///
    /// The caller supplies the id; it must be non-empty and not already in
    /// use ([`StoreError::EmptyId`](crate::StoreError::EmptyId),
    /// [`StoreError::DuplicateId`](crate::StoreError::DuplicateId)).
    async fn create(&self, record: Record) -> StoreResult<Record>;

    /// Replace the record with the matching id
    ///
    /// A missing id is a silent no-op, not an error.
    async fn update(&self, record: Record) -> StoreResult<()>;

    /// Remove the record with the given id
    ///
    /// A missing id is a silent no-op, not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
