//! Configuration for meteowire
//!
//! Centralized configuration with sensible defaults, shared by the
//! client and the server binaries.

use std::time::Duration;

use crate::error::{Result, WeatherError};

/// Default TCP port for both ends
pub const DEFAULT_PORT: u16 = 56700;

/// Default server host the client connects to
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Byte capacity of a rendered client message, terminator included
pub const DEFAULT_MESSAGE_CAPACITY: usize = 256;

/// Main configuration for a meteowire client or server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host the client connects to (IP literal or resolvable name)
    pub server_host: String,

    /// TCP port (client target / server listen port)
    pub port: u16,

    /// Host the server binds to
    pub listen_host: String,

    /// Connection read timeout (milliseconds, 0 = none)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = none)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Metric Source Configuration
    // -------------------------------------------------------------------------
    /// Fixed seed for the metric generator; `None` seeds from the OS
    pub rng_seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Client Output Configuration
    // -------------------------------------------------------------------------
    /// Maximum size of the rendered response line
    pub message_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_PORT,
            listen_host: "0.0.0.0".to_string(),
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            rng_seed: None,
            message_capacity: DEFAULT_MESSAGE_CAPACITY,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` the server listens on
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }

    /// Read timeout as a socket option value
    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_ms > 0).then(|| Duration::from_millis(self.read_timeout_ms))
    }

    /// Write timeout as a socket option value
    pub fn write_timeout(&self) -> Option<Duration> {
        (self.write_timeout_ms > 0).then(|| Duration::from_millis(self.write_timeout_ms))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host the client connects to
    pub fn server_host(mut self, host: impl Into<String>) -> Self {
        self.config.server_host = host.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the host the server binds to
    pub fn listen_host(mut self, host: impl Into<String>) -> Self {
        self.config.listen_host = host.into();
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Seed the metric generator for reproducible values
    pub fn rng_seed(mut self, seed: Option<u64>) -> Self {
        self.config.rng_seed = seed;
        self
    }

    /// Set the rendered message capacity (in bytes)
    pub fn message_capacity(mut self, capacity: usize) -> Self {
        self.config.message_capacity = capacity;
        self
    }

    /// Finish the builder, rejecting values no endpoint can use
    pub fn build(self) -> Result<Config> {
        if self.config.server_host.trim().is_empty() {
            return Err(WeatherError::Config("server host must not be empty".to_string()));
        }
        if self.config.listen_host.trim().is_empty() {
            return Err(WeatherError::Config("listen host must not be empty".to_string()));
        }
        if self.config.message_capacity == 0 {
            return Err(WeatherError::Config("message capacity must be positive".to_string()));
        }
        Ok(self.config)
    }
}
