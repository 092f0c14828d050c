//! meteowire Server Binary
//!
//! Starts the TCP weather server. Runs until killed.

use clap::Parser;
use meteowire::config::DEFAULT_PORT;
use meteowire::network::Server;
use meteowire::{Config, RandomMetricSource};
use tracing_subscriber::{fmt, EnvFilter};

/// meteowire Server
#[derive(Parser, Debug)]
#[command(name = "meteowire-server")]
#[command(about = "Weather server answering one fixed-size request per connection")]
#[command(version)]
struct Args {
    /// Listen port
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Seed for the metric generator (OS-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("meteowire server v{}", meteowire::VERSION);

    let config = match Config::builder().port(args.port).rng_seed(args.seed).build() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(seed) = config.rng_seed {
        tracing::info!("Metric source seeded with {}", seed);
    }
    let source = RandomMetricSource::from_seed_option(config.rng_seed);

    let mut server = match Server::bind(config, source) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    server.run()
}
