//! meteowire Client Binary
//!
//! Sends one weather request and prints the server's answer.

use clap::Parser;
use meteowire::config::{DEFAULT_PORT, DEFAULT_SERVER_HOST};
use meteowire::format::format_response_bounded;
use meteowire::network::WeatherClient;
use meteowire::{Config, Result, WeatherRequest};
use tracing_subscriber::{fmt, EnvFilter};

/// meteowire Client
#[derive(Parser, Debug)]
#[command(name = "meteowire-client")]
#[command(about = "Query a meteowire server for a city's weather")]
#[command(version)]
struct Args {
    /// Server address (IP or host name)
    #[arg(short, long, default_value = DEFAULT_SERVER_HOST)]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Request as "<type> <city>", type one of t, h, w, p
    #[arg(short, long)]
    request: String,
}

fn main() {
    // Diagnostics go to stderr; stdout only carries the result line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String> {
    let request = WeatherRequest::parse(&args.request)?;

    let config = Config::builder()
        .server_host(args.server)
        .port(args.port)
        .build()?;

    let client = WeatherClient::connect(&config)?;
    let server_ip = client.server_ip().to_string();
    let response = client.exchange(&request)?;

    format_response_bounded(&response, &request, &server_ip, config.message_capacity)
}
