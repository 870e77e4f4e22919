use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use apps_gateway::config::loader::load_config;
use apps_gateway::config::GatewayConfig;
use apps_gateway::http::HttpServer;
use apps_gateway::lifecycle::Shutdown;
use apps_gateway::observability;

/// App-search API gateway.
#[derive(Debug, Parser)]
#[command(name = "apps-gateway", version)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    observability::logging::init_logging(&config.observability.log_level);

    tracing::info!("apps-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
