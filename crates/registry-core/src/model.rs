//! Record model
//!
//! A [`Record`] is an identity-like entity: a caller-supplied unique id plus
//! zero or more names, addresses and dated events. Optional fields are
//! modeled as `Option` so the filter engine can pattern-match presence
//! instead of testing sentinel values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored record
///
/// The `id` is supplied by the caller, must be non-empty and unique across
/// the store, and is immutable once the record has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,

    /// Zero or more names, in the order supplied
    #[serde(default)]
    pub names: Vec<Name>,

    /// Zero or more addresses, in the order supplied
    #[serde(default)]
    pub addresses: Vec<Address>,

    /// Zero or more dated events (birth, death, ...)
    #[serde(default)]
    pub dates: Vec<RecordDate>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub deceased: bool,
}

/// A single name attached to a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

/// A single address attached to a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// A dated event attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDate {
    /// What the date represents, e.g. "Birth"
    pub date_type: String,
    pub date: NaiveDate,
}
