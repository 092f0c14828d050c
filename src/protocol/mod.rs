//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (fixed-size records)
//!
//! Exactly one request and one response travel per connection. Neither
//! carries a length prefix or a delimiter: both ends know the record size.
//!
//! ### Request Format (65 bytes)
//! ```text
//! ┌──────────┬──────────────────────────────────────────┐
//! │ Type (1) │ City (64, NUL-padded, last byte is NUL)  │
//! └──────────┴──────────────────────────────────────────┘
//! ```
//!
//! ### Metric Types
//! - `t`: temperature (°C)
//! - `h`: humidity (%)
//! - `w`: wind (km/h)
//! - `p`: pressure (hPa)
//!
//! ### Response Format (9 bytes, big-endian)
//! ```text
//! ┌────────────┬──────────┬───────────────────┐
//! │ Status (4) │ Type (1) │ Value (4, f32)    │
//! └────────────┴──────────┴───────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0: SUCCESS
//! - 1: CITY_NOT_AVAILABLE
//! - 2: INVALID_REQUEST

mod request;
mod response;
mod codec;

pub use request::{MetricType, WeatherRequest, CITY_FIELD_SIZE, MAX_CITY_LEN};
pub use response::{Status, WeatherResponse, NO_TYPE};
pub use codec::{
    encode_request, decode_request, encode_response, decode_response,
    read_request, write_request, read_response, write_response,
    REQUEST_SIZE, RESPONSE_SIZE,
};
