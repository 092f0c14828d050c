//! Server Response Builder
//!
//! Turns a validator outcome into the response record. Only accepted
//! requests reach the metric source.

use crate::metrics::MetricSource;
use crate::protocol::{WeatherRequest, WeatherResponse};
use crate::validator::{validate, Outcome};

/// Build the response for a validator outcome
pub fn build_response<S>(outcome: Outcome, source: &mut S) -> WeatherResponse
where
    S: MetricSource + ?Sized,
{
    match outcome {
        Outcome::Accepted(metric) => WeatherResponse::success(metric, source.query(metric)),
        Outcome::RejectedInvalidType => WeatherResponse::invalid_request(),
        Outcome::RejectedCityUnsupported => WeatherResponse::city_not_available(),
    }
}

/// Validate a request and build its response
pub fn respond<S>(request: &WeatherRequest, source: &mut S) -> WeatherResponse
where
    S: MetricSource + ?Sized,
{
    let outcome = validate(request);
    tracing::trace!("Request {:?} classified as {:?}", request, outcome);
    build_response(outcome, source)
}
