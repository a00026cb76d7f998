//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use chrono::NaiveDate;

#[test]
fn test_query_params_empty_gives_empty_criteria() {
    let criteria = EntityQueryParams::default().into_criteria().unwrap();
    assert!(criteria.search.is_none());
    assert!(criteria.gender.is_none());
    assert!(criteria.start_date.is_none());
    assert!(criteria.end_date.is_none());
    assert!(criteria.countries.is_none());
}

#[test]
fn test_query_params_parse_dates() {
    let params = EntityQueryParams {
        start_date: Some("1988-01-01".to_string()),
        end_date: Some("2000-01-01".to_string()),
        ..Default::default()
    };

    let criteria = params.into_criteria().unwrap();
    assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(1988, 1, 1));
    assert_eq!(criteria.end_date, NaiveDate::from_ymd_opt(2000, 1, 1));
}

#[test]
fn test_query_params_blank_date_is_absent() {
    let params = EntityQueryParams {
        start_date: Some(String::new()),
        end_date: Some("  ".to_string()),
        ..Default::default()
    };

    let criteria = params.into_criteria().unwrap();
    assert!(criteria.start_date.is_none());
    assert!(criteria.end_date.is_none());
}

#[test]
fn test_query_params_invalid_date_is_rejected() {
    let params = EntityQueryParams {
        start_date: Some("15/05/1990".to_string()),
        ..Default::default()
    };

    let err = params.into_criteria().unwrap_err();
    assert!(err.to_string().contains("startDate"));
}

#[test]
fn test_query_params_split_countries() {
    let params = EntityQueryParams {
        countries: Some("USA, Sweden ,,Norway".to_string()),
        ..Default::default()
    };

    let criteria = params.into_criteria().unwrap();
    assert_eq!(
        criteria.countries,
        Some(vec![
            "USA".to_string(),
            "Sweden".to_string(),
            "Norway".to_string()
        ])
    );
}

#[test]
fn test_query_params_empty_countries_string() {
    let params = EntityQueryParams {
        countries: Some(String::new()),
        ..Default::default()
    };

    // An empty list disables the predicate downstream
    let criteria = params.into_criteria().unwrap();
    assert_eq!(criteria.countries, Some(vec![]));
}

#[test]
fn test_health_response_fields() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: "1.0.0".to_string(),
    };

    assert_eq!(response.status, "healthy");
    assert_eq!(response.version, "1.0.0");
}
