//! Portfolio API server.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use portfolio_api::config::load_config;
use portfolio_api::http::server::{HEALTH_PATH, PROJECTS_PATH};
use portfolio_api::observability::{logging, metrics};
use portfolio_api::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Serves repository listings for the portfolio page", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("portfolio-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        owner = %config.upstream.owner,
        token_present = config.upstream.token.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        upstream_timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        projects = %format!("http://{}{}", local_addr, PROJECTS_PATH),
        health = %format!("http://{}{}", local_addr, HEALTH_PATH),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
