//! Request definitions
//!
//! Represents a weather query from a client.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WeatherError};

/// Size of the city field on the wire, terminator included
pub const CITY_FIELD_SIZE: usize = 64;

/// Longest city name (in bytes) that fits in the city field
pub const MAX_CITY_LEN: usize = CITY_FIELD_SIZE - 1;

/// Separators skipped before the type and between type and city
const BLANKS: &[char] = &[' ', '\t'];

/// Trailing characters trimmed from the city
const TRAILING: &[char] = &[' ', '\t', '\r', '\n'];

/// Metric types a client can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    Temperature,
    Humidity,
    Wind,
    Pressure,
}

impl MetricType {
    /// Every metric type, in wire-code order `t h w p`
    pub const ALL: [MetricType; 4] = [
        MetricType::Temperature,
        MetricType::Humidity,
        MetricType::Wind,
        MetricType::Pressure,
    ];

    /// Map a wire code to a metric type (codes are lowercase)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b't' => Some(MetricType::Temperature),
            b'h' => Some(MetricType::Humidity),
            b'w' => Some(MetricType::Wind),
            b'p' => Some(MetricType::Pressure),
            _ => None,
        }
    }

    /// The single-byte wire code
    pub fn code(self) -> u8 {
        match self {
            MetricType::Temperature => b't',
            MetricType::Humidity => b'h',
            MetricType::Wind => b'w',
            MetricType::Pressure => b'p',
        }
    }
}

/// A weather request: metric type code plus city name
///
/// The type is kept as the raw wire byte so that unknown codes survive
/// decoding and can be rejected by the validator. The city is always
/// bounded to [`MAX_CITY_LEN`] bytes and never contains NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    kind: u8,
    city: String,
}

impl WeatherRequest {
    /// Build a request, bounding the city to what the wire can carry
    pub fn new(kind: u8, city: &str) -> Self {
        Self {
            kind,
            city: bound_city(city).to_string(),
        }
    }

    /// Build a request for a known metric
    pub fn for_metric(metric: MetricType, city: &str) -> Self {
        Self::new(metric.code(), city)
    }

    /// Parse request text of the form `"<type> <city>"`
    ///
    /// Leading blanks are skipped, the type is lower-cased, blanks between
    /// type and city are skipped, and the city is truncated to
    /// [`MAX_CITY_LEN`] bytes before trailing whitespace is trimmed.
    pub fn parse(text: &str) -> Result<Self> {
        let rest = text.trim_start_matches(BLANKS);

        let mut chars = rest.chars();
        let first = chars
            .next()
            .ok_or_else(|| WeatherError::Parse("empty request".to_string()))?;
        if !first.is_ascii() {
            return Err(WeatherError::Parse(format!(
                "metric type '{}' is not a single-byte code",
                first
            )));
        }

        let city = chars.as_str().trim_start_matches(BLANKS);
        if city.is_empty() {
            return Err(WeatherError::Parse("missing city name".to_string()));
        }

        let city = bound_city(city).trim_end_matches(TRAILING);

        Ok(Self {
            kind: first.to_ascii_lowercase() as u8,
            city: city.to_string(),
        })
    }

    /// Raw metric type byte
    pub fn kind(&self) -> u8 {
        self.kind
    }

    /// Metric type, if the code is one of `t h w p`
    pub fn metric(&self) -> Option<MetricType> {
        MetricType::from_code(self.kind)
    }

    /// City name as sent by the client
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl FromStr for WeatherRequest {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for WeatherRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.escape_ascii(), self.city)
    }
}

/// Cut at the first NUL, then truncate to `MAX_CITY_LEN` bytes on a char boundary
fn bound_city(city: &str) -> &str {
    let city = city.find('\0').map_or(city, |end| &city[..end]);
    if city.len() <= MAX_CITY_LEN {
        return city;
    }

    let mut end = MAX_CITY_LEN;
    while !city.is_char_boundary(end) {
        end -= 1;
    }
    &city[..end]
}
