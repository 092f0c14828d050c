//! Client Response Formatter
//!
//! Renders a decoded response as the line shown to the user:
//!
//! ```text
//! Received result from server ip 127.0.0.1. Bari: Temperatura = 23.5°C
//! ```
//!
//! Output is bounded: a line that would not fit the given capacity (one
//! byte is reserved for a terminator) is an error, never a truncation.

use crate::config::DEFAULT_MESSAGE_CAPACITY;
use crate::error::{Result, WeatherError};
use crate::protocol::{MetricType, Status, WeatherRequest, WeatherResponse};

/// City label used when the request carried an empty city
pub const CITY_PLACEHOLDER: &str = "Città";

/// Payload for `Status::CityNotAvailable`
pub const CITY_NOT_AVAILABLE_TEXT: &str = "Città non disponibile";

/// Payload for `Status::InvalidRequest`
pub const INVALID_REQUEST_TEXT: &str = "Richiesta non valida";

/// Payload for any status outside the protocol
pub const INVALID_RESPONSE_TEXT: &str = "Risposta non valida";

/// Display name and unit for a metric
pub fn metric_label(metric: MetricType) -> (&'static str, &'static str) {
    match metric {
        MetricType::Temperature => ("Temperatura", "°C"),
        MetricType::Humidity => ("Umidità", "%"),
        MetricType::Wind => ("Vento", "km/h"),
        MetricType::Pressure => ("Pressione", "hPa"),
    }
}

/// Capitalized city name: first char upper-case, the rest lower-case
pub fn city_label(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => CITY_PLACEHOLDER.to_string(),
    }
}

/// Format a response with the default message capacity
pub fn format_response(
    response: &WeatherResponse,
    request: &WeatherRequest,
    server_ip: &str,
) -> Result<String> {
    format_response_bounded(response, request, server_ip, DEFAULT_MESSAGE_CAPACITY)
}

/// Format a response into at most `capacity - 1` bytes
pub fn format_response_bounded(
    response: &WeatherResponse,
    request: &WeatherRequest,
    server_ip: &str,
    capacity: usize,
) -> Result<String> {
    let payload = render_payload(response, request)?;
    let line = format!("Received result from server ip {}. {}", server_ip, payload);

    if line.len() >= capacity {
        return Err(WeatherError::Format(format!(
            "message needs {} bytes, capacity is {}",
            line.len() + 1,
            capacity
        )));
    }

    Ok(line)
}

fn render_payload(response: &WeatherResponse, request: &WeatherRequest) -> Result<String> {
    match response.status {
        Status::Success => {
            let metric = response.metric().ok_or_else(|| {
                WeatherError::Format(format!(
                    "success response carries unknown type 0x{:02x}",
                    response.kind
                ))
            })?;
            let (label, unit) = metric_label(metric);
            Ok(format!(
                "{}: {} = {:.1}{}",
                city_label(request.city()),
                label,
                response.value,
                unit
            ))
        }
        Status::CityNotAvailable => Ok(CITY_NOT_AVAILABLE_TEXT.to_string()),
        Status::InvalidRequest => Ok(INVALID_REQUEST_TEXT.to_string()),
        Status::Unknown(code) => {
            tracing::debug!("Unexpected response status {}", code);
            Ok(INVALID_RESPONSE_TEXT.to_string())
        }
    }
}
