//! BORIS gateway
//!
//! ```text
//!   Client ──▶ listener ──▶ middleware ──▶ route table
//!                           (request id,     │
//!                            trace, timeout) ├─ "" ─────────────▶ registration routes
//!                                            │                     ├─ path echo
//!                                            │                     └─ websocket echo
//!                                            └─ "secret-backend/" ▶ admin interface
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use boris_gateway::config::{load_config, validation::validate_config, ConfigError, GatewayConfig};
use boris_gateway::observability::{logging, metrics};
use boris_gateway::{GatewayServer, Shutdown};

#[derive(Parser)]
#[command(name = "boris-gateway")]
#[command(about = "Echo gateway with a prefix route table", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<GatewayConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("boris-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        admin_enabled = config.admin.enabled,
        admin_prefix = %config.admin.prefix,
        registration_routes = config.registration.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = GatewayServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
