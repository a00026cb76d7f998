//! Query filter engine
//!
//! [`FilterCriteria`] carries the optional query predicates; applying it to a
//! slice of records is a pure, stable filter: matching records come back in
//! their original relative order, nothing is mutated, and criteria with no
//! active predicate are the identity transform.

use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional query predicates, combined with logical AND when active
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring match over name and address fields
    #[serde(default)]
    pub search: Option<String>,

    /// Exact, case-sensitive gender match
    #[serde(default)]
    pub gender: Option<String>,

    /// Inclusive lower bound for the date predicate
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound for the date predicate
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Set of countries; a record matches if any address is in the set
    #[serde(default)]
    pub countries: Option<Vec<String>>,
}

impl FilterCriteria {
    /// Apply the criteria to a slice of records, preserving input order
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Test a single record against every active predicate
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(term) = active(&self.search) {
            if !matches_search(record, term) {
                return false;
            }
        }

        if let Some(gender) = active(&self.gender) {
            // Exact match, case-sensitive; absent gender never matches
            if record.gender.as_deref() != Some(gender) {
                return false;
            }
        }

        // The date predicate activates only when both bounds are supplied;
        // a single bound disables it entirely.
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            let in_range = record
                .dates
                .iter()
                .any(|d| d.date >= start && d.date <= end);
            if !in_range {
                return false;
            }
        }

        if let Some(countries) = self.countries.as_deref() {
            if !countries.is_empty() {
                let any_country = record.addresses.iter().any(|a| {
                    a.country
                        .as_deref()
                        .is_some_and(|c| countries.iter().any(|wanted| wanted == c))
                });
                if !any_country {
                    return false;
                }
            }
        }

        true
    }
}

/// Filter an owned collection, cloning the matches in order
pub fn filter_records(criteria: &FilterCriteria, records: &[Record]) -> Vec<Record> {
    criteria.apply(records).into_iter().cloned().collect()
}

/// Treat absent and blank/whitespace-only criteria as "predicate disabled"
///
/// An active criterion is matched as supplied, surrounding whitespace
/// included; blankness only decides whether the predicate runs at all.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.trim().is_empty())
}

fn matches_search(record: &Record, term: &str) -> bool {
    let term = term.to_lowercase();

    let name_hit = record.names.iter().any(|n| {
        contains_folded(&n.first_name, &term)
            || contains_folded(&n.middle_name, &term)
            || contains_folded(&n.surname, &term)
    });

    name_hit
        || record
            .addresses
            .iter()
            .any(|a| contains_folded(&a.address_line, &term) || contains_folded(&a.country, &term))
}

fn contains_folded(field: &Option<String>, lowered_term: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|v| v.to_lowercase().contains(lowered_term))
}
