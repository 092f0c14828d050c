//! Response definitions
//!
//! Represents responses to clients.

use super::MetricType;

/// Type byte carried by every response whose status is not `Success`
pub const NO_TYPE: u8 = 0x00;

/// Response status codes
///
/// `Unknown` keeps any code outside the protocol so the client can report
/// protocol drift instead of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    CityNotAvailable,
    InvalidRequest,
    Unknown(u32),
}

impl Status {
    /// Numeric code on the wire
    pub fn code(self) -> u32 {
        match self {
            Status::Success => 0,
            Status::CityNotAvailable => 1,
            Status::InvalidRequest => 2,
            Status::Unknown(code) => code,
        }
    }
}

impl From<u32> for Status {
    fn from(code: u32) -> Self {
        match code {
            0 => Status::Success,
            1 => Status::CityNotAvailable,
            2 => Status::InvalidRequest,
            other => Status::Unknown(other),
        }
    }
}

/// A response to send to client
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherResponse {
    /// Status code
    pub status: Status,

    /// Echo of the request type on success, `NO_TYPE` otherwise
    pub kind: u8,

    /// Metric reading; only meaningful when status is `Success`
    pub value: f32,
}

impl WeatherResponse {
    /// Create a SUCCESS response carrying a reading
    pub fn success(metric: MetricType, value: f32) -> Self {
        Self {
            status: Status::Success,
            kind: metric.code(),
            value,
        }
    }

    /// Create a CITY_NOT_AVAILABLE response
    pub fn city_not_available() -> Self {
        Self {
            status: Status::CityNotAvailable,
            kind: NO_TYPE,
            value: 0.0,
        }
    }

    /// Create an INVALID_REQUEST response
    pub fn invalid_request() -> Self {
        Self {
            status: Status::InvalidRequest,
            kind: NO_TYPE,
            value: 0.0,
        }
    }

    /// Metric type echoed by the server, if recognized
    pub fn metric(&self) -> Option<MetricType> {
        MetricType::from_code(self.kind)
    }
}
