//! Tests for the Request Validator
//!
//! These tests verify:
//! - Type check strictly precedes city check
//! - Case-insensitive exact city matching
//! - Every request maps to exactly one outcome

use meteowire::protocol::{MetricType, WeatherRequest};
use meteowire::validator::{is_supported_city, validate, Outcome, SUPPORTED_CITIES};

#[test]
fn test_accepts_every_supported_city_and_type() {
    for city in SUPPORTED_CITIES {
        for metric in MetricType::ALL {
            let request = WeatherRequest::for_metric(metric, city);
            assert_eq!(validate(&request), Outcome::Accepted(metric));
        }
    }
}

#[test]
fn test_city_match_ignores_case() {
    for city in ["roma", "ROMA", "Roma", "rOmA"] {
        assert!(is_supported_city(city), "{}", city);
    }
}

#[test]
fn test_city_match_is_exact() {
    for city in ["Rom", "Roma Nord", " Roma", "Bari ", "", "Atlantide"] {
        assert!(!is_supported_city(city), "{:?}", city);
    }
}

#[test]
fn test_parsed_city_with_padding_matches() {
    let request = WeatherRequest::parse("t   Bari \t").unwrap();
    assert_eq!(validate(&request), Outcome::Accepted(MetricType::Temperature));
}

#[test]
fn test_invalid_type_with_supported_city() {
    let request = WeatherRequest::new(b'x', "Roma");
    assert_eq!(validate(&request), Outcome::RejectedInvalidType);
}

#[test]
fn test_invalid_type_wins_over_unsupported_city() {
    let request = WeatherRequest::new(b'z', "Atlantide");
    assert_eq!(validate(&request), Outcome::RejectedInvalidType);
}

#[test]
fn test_wire_type_is_case_sensitive() {
    // Only request text is lower-cased; a raw uppercase code is invalid
    let request = WeatherRequest::new(b'T', "Roma");
    assert_eq!(validate(&request), Outcome::RejectedInvalidType);
}

#[test]
fn test_unsupported_city() {
    let request = WeatherRequest::for_metric(MetricType::Temperature, "Atlantide");
    assert_eq!(validate(&request), Outcome::RejectedCityUnsupported);
}

#[test]
fn test_empty_city_is_unsupported() {
    let request = WeatherRequest::new(b'h', "");
    assert_eq!(validate(&request), Outcome::RejectedCityUnsupported);
}

#[test]
fn test_validate_is_total_over_type_bytes() {
    for kind in 0u8..=255 {
        let outcome = validate(&WeatherRequest::new(kind, "Genova"));
        match MetricType::from_code(kind) {
            Some(metric) => assert_eq!(outcome, Outcome::Accepted(metric)),
            None => assert_eq!(outcome, Outcome::RejectedInvalidType),
        }
    }
}
