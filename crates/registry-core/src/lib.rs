//! Core domain types for the record registry
//!
//! This crate holds the pieces with actual decision logic and no I/O:
//!
//! - [`model`]: the stored record and its nested value types
//! - [`filter`]: the query filter engine ([`FilterCriteria`])
//! - [`retry`]: the exponential-backoff retry policy ([`RetryPolicy`])
//!
//! Everything here is transport-agnostic; the HTTP surface lives in
//! `registry-server` and the storage facade in `registry-store`.

pub mod filter;
pub mod model;
pub mod retry;

pub use filter::FilterCriteria;
pub use model::{Address, Name, Record, RecordDate};
pub use retry::RetryPolicy;
