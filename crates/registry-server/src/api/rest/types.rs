//! REST API type definitions
//!
//! Application state, response types and the query-string form of the
//! filter criteria.

use crate::error::ServerError;
use chrono::NaiveDate;
use registry_core::FilterCriteria;
use registry_store::RecordRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn RecordRepository>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query-string parameters for `GET /entity`
///
/// Dates arrive as `YYYY-MM-DD` strings and `countries` as a comma-separated
/// list; both are converted explicitly so that blank parameters behave like
/// absent ones instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityQueryParams {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub countries: Option<String>,
}

impl EntityQueryParams {
    /// Convert the raw query parameters into filter criteria
    pub fn into_criteria(self) -> Result<FilterCriteria, ServerError> {
        let countries = self.countries.as_deref().map(parse_countries);

        Ok(FilterCriteria {
            search: self.search,
            gender: self.gender,
            start_date: parse_date("startDate", self.start_date.as_deref())?,
            end_date: parse_date("endDate", self.end_date.as_deref())?,
            countries,
        })
    }
}

fn parse_countries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_date(param: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            ServerError::InvalidRequest(format!(
                "Invalid {} '{}', expected YYYY-MM-DD",
                param, value
            ))
        }),
    }
}
