//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Blocking std sockets, one exchange per connection
//! - Server accepts sequentially; a failed exchange never stops the loop
//! - Client connects, sends one request, reads one response, closes

mod server;
mod connection;
mod client;

pub use server::Server;
pub use connection::Connection;
pub use client::WeatherClient;
