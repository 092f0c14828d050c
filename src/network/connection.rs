//! Connection Handler
//!
//! Handles one client connection: one request in, one response out.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::error::{Result, WeatherError};
use crate::metrics::MetricSource;
use crate::protocol::{read_request, write_response, WeatherResponse};
use crate::responder::respond;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader
    reader: BufReader<TcpStream>,

    /// TCP stream writer
    writer: BufWriter<TcpStream>,

    /// Peer IP for logging
    peer_ip: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream) -> Result<Self> {
        let peer_ip = stream
            .peer_addr()
            .map(|a| a.ip().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_ip,
        })
    }

    /// Configure connection timeouts (0 leaves a direction unbounded)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.reader
                .get_ref()
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.writer
                .get_ref()
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }
        Ok(())
    }

    /// Run the single exchange for this connection, then close it
    ///
    /// Returns the response that was sent.
    pub fn handle<S>(&mut self, source: &mut S) -> Result<WeatherResponse>
    where
        S: MetricSource + ?Sized,
    {
        let request = match read_request(&mut self.reader) {
            Ok(request) => request,
            Err(e) => {
                if let WeatherError::TruncatedMessage { received, .. } = &e {
                    tracing::debug!(
                        "Client {} closed after {} bytes of a request",
                        self.peer_ip,
                        received
                    );
                }
                self.close();
                return Err(e);
            }
        };

        tracing::info!("Request '{}' from client ip {}", request, self.peer_ip);

        let response = respond(&request, source);

        if let Err(e) = write_response(&mut self.writer, &response) {
            if e.is_peer_disconnect() {
                tracing::debug!(
                    "Client {} disconnected before response could be sent",
                    self.peer_ip
                );
            }
            self.close();
            return Err(e);
        }

        tracing::debug!("Sent {:?} to {}", response.status, self.peer_ip);
        self.close();
        Ok(response)
    }

    fn close(&mut self) {
        let _ = self.writer.get_ref().shutdown(Shutdown::Both);
    }

    /// Get the peer IP string
    pub fn peer_ip(&self) -> &str {
        &self.peer_ip
    }
}
