//! Repository facade for the record registry
//!
//! This crate composes the pieces from `registry-core` into the five CRUD
//! operations behind the [`RecordRepository`] trait:
//!
//! - reads go straight to the store under a shared lock, never retried
//! - mutations run through the [`RetryPolicy`](registry_core::RetryPolicy)
//!   while holding the exclusive lock, so the mutual-exclusion boundary
//!   covers the whole retry span
//!
//! [`InMemoryRepository`] is the only backend: an ordered, lock-guarded
//! collection that owns its records exclusively.

pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRepository;
pub use repository::RecordRepository;
