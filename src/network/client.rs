//! TCP Client
//!
//! Connects to a weather server and performs the single exchange a
//! connection allows.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, TcpStream};

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{read_response, write_request, WeatherRequest, WeatherResponse};

/// A connected client, good for exactly one request
pub struct WeatherClient {
    stream: TcpStream,
    server_ip: String,
}

impl WeatherClient {
    /// Connect to `config.server_host:config.port`
    ///
    /// The host may be an IP literal or a name to resolve.
    pub fn connect(config: &Config) -> Result<Self> {
        tracing::debug!("Connecting to {}:{}...", config.server_host, config.port);
        let stream = TcpStream::connect((config.server_host.as_str(), config.port))?;

        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        let server_ip = stream.peer_addr()?.ip().to_string();
        tracing::debug!("Connected to {}", server_ip);

        Ok(Self { stream, server_ip })
    }

    /// IP address of the server this client is connected to
    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    /// Send the request, wait for the response, close the connection
    pub fn exchange(self, request: &WeatherRequest) -> Result<WeatherResponse> {
        let mut writer = BufWriter::new(&self.stream);
        write_request(&mut writer, request)?;
        drop(writer);

        let mut reader = BufReader::new(&self.stream);
        let response = read_response(&mut reader)?;

        let _ = self.stream.shutdown(Shutdown::Both);
        tracing::debug!("Response {:?} from {}", response, self.server_ip);

        Ok(response)
    }
}
