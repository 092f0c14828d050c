//! # meteowire
//!
//! A minimal weather query protocol over TCP:
//! - Fixed-size binary records, no length prefix or delimiter
//! - One request, one response, then the connection closes
//! - Case-insensitive city matching against a fixed table
//! - Pluggable metric source with a per-type range contract
//!
//! ## Architecture Overview
//!
//! ```text
//!   Client                                    Server
//!   ──────                                    ──────
//!   "t Roma" ─► WeatherRequest::parse
//!               encode_request ──── 65 B ───► read_request
//!                                             validate ─► Outcome
//!                                             build_response ◄─ MetricSource
//!               read_response ◄──── 9 B ───── write_response
//!               format_response
//!   "Received result from server ip ... Roma: Temperatura = 12.3°C"
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod validator;
pub mod metrics;
pub mod responder;
pub mod format;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{WeatherError, Result};
pub use config::Config;
pub use protocol::{MetricType, Status, WeatherRequest, WeatherResponse};
pub use metrics::{MetricSource, RandomMetricSource};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of meteowire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
