//! Error types for meteowire
//!
//! Provides a unified error type for all operations.

use std::io::ErrorKind;

use thiserror::Error;

/// Result type alias using WeatherError
pub type Result<T> = std::result::Result<T, WeatherError>;

/// Unified error type for meteowire operations
#[derive(Debug, Error)]
pub enum WeatherError {
    // -------------------------------------------------------------------------
    // Request Text Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Wire Errors
    // -------------------------------------------------------------------------
    #[error("Truncated message: expected {expected} bytes, got {received}")]
    TruncatedMessage { expected: usize, received: usize },

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Output Errors
    // -------------------------------------------------------------------------
    #[error("Format error: {0}")]
    Format(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeatherError {
    /// True when the peer hung up while a response was being sent
    pub fn is_peer_disconnect(&self) -> bool {
        match self {
            WeatherError::Transport(e) => matches!(
                e.kind(),
                ErrorKind::BrokenPipe | ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted
            ),
            _ => false,
        }
    }
}
