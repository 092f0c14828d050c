//! TCP Server
//!
//! Accepts connections one at a time and runs a single exchange on each.

use std::net::{SocketAddr, TcpListener};

use crate::config::Config;
use crate::error::Result;
use crate::metrics::MetricSource;
use crate::protocol::WeatherResponse;

use super::Connection;

/// TCP server for the weather protocol
pub struct Server<S> {
    config: Config,
    listener: TcpListener,
    source: S,
}

impl<S: MetricSource> Server<S> {
    /// Bind the listening socket on `config.listen_addr()`
    pub fn bind(config: Config, source: S) -> Result<Self> {
        let listener = TcpListener::bind(config.listen_addr())?;
        tracing::info!("Weather server listening on {}", listener.local_addr()?);

        Ok(Self {
            config,
            listener,
            source,
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept the next connection and serve it
    pub fn serve_one(&mut self) -> Result<WeatherResponse> {
        let (stream, addr) = self.listener.accept()?;
        tracing::debug!("Connection established from {}", addr);

        let mut connection = Connection::new(stream)?;
        connection.set_timeouts(self.config.read_timeout_ms, self.config.write_timeout_ms)?;
        connection.handle(&mut self.source)
    }

    /// Serve connections sequentially until the process is killed
    ///
    /// A failed exchange only affects its own connection. A client that
    /// hangs up before its response is written is not a server fault.
    pub fn run(&mut self) -> ! {
        loop {
            match self.serve_one() {
                Ok(_) => {}
                Err(e) if e.is_peer_disconnect() => {
                    tracing::debug!("Client left early: {}", e);
                }
                Err(e) => {
                    tracing::warn!("Client exchange failed: {}", e);
                }
            }
        }
    }
}
