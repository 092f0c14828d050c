//! Request Validator
//!
//! Classifies a decoded request before the server answers it. The type
//! check always runs first: an unknown type is an invalid request even
//! when the city is unsupported too.

use crate::protocol::{MetricType, WeatherRequest};

/// Cities the server has readings for
pub const SUPPORTED_CITIES: [&str; 10] = [
    "Bari",
    "Roma",
    "Milano",
    "Napoli",
    "Torino",
    "Palermo",
    "Genova",
    "Bologna",
    "Firenze",
    "Venezia",
];

/// Validator classification of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Known type and supported city
    Accepted(MetricType),

    /// Type code is not one of `t h w p`
    RejectedInvalidType,

    /// Type is fine but the city is not in the table
    RejectedCityUnsupported,
}

/// Case-insensitive exact match against the supported city table
pub fn is_supported_city(city: &str) -> bool {
    SUPPORTED_CITIES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(city))
}

/// Validate a request
pub fn validate(request: &WeatherRequest) -> Outcome {
    let Some(metric) = request.metric() else {
        return Outcome::RejectedInvalidType;
    };

    if !is_supported_city(request.city()) {
        return Outcome::RejectedCityUnsupported;
    }

    Outcome::Accepted(metric)
}
