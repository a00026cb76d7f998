//! Development fixtures
//!
//! Sample records for local development and tests.

use chrono::NaiveDate;
use registry_core::{Address, Name, Record, RecordDate};

/// The two sample records used when seeding is enabled
pub fn sample_records() -> Vec<Record> {
    vec![
        Record {
            id: "1".to_string(),
            names: vec![Name {
                first_name: Some("John".to_string()),
                middle_name: Some("Michael".to_string()),
                surname: Some("Doe".to_string()),
            }],
            addresses: vec![Address {
                address_line: Some("123 Main St".to_string()),
                city: Some("New York".to_string()),
                country: Some("USA".to_string()),
            }],
            dates: vec![RecordDate {
                date_type: "Birth".to_string(),
                date: NaiveDate::from_ymd_opt(1990, 5, 15).expect("valid date"),
            }],
            gender: Some("Male".to_string()),
            deceased: false,
        },
        Record {
            id: "2".to_string(),
            names: vec![Name {
                first_name: Some("Alice".to_string()),
                middle_name: Some("Elizabeth".to_string()),
                surname: Some("Smith".to_string()),
            }],
            addresses: vec![Address {
                address_line: Some("456 Elm St".to_string()),
                city: Some("Los Angeles".to_string()),
                country: Some("USA".to_string()),
            }],
            dates: vec![RecordDate {
                date_type: "Birth".to_string(),
                date: NaiveDate::from_ymd_opt(1985, 10, 20).expect("valid date"),
            }],
            gender: Some("Female".to_string()),
            deceased: false,
        },
    ]
}
