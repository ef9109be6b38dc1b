//! header-lab server.
//!
//! A small todo/list API that explains and grades the HTTP headers of every
//! exchange it serves.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────────┐
//!     ────────────────────┼─▶ request id ─▶ trace ─▶ timeout                  │
//!                         │                            │                     │
//!                         │                            ▼                     │
//!                         │                  ┌───────────────────┐           │
//!                         │                  │ header analysis   │ request   │
//!                         │                  │   middleware      │ report    │
//!                         │                  └─────────┬─────────┘           │
//!                         │                            ▼                     │
//!                         │          secure headers ─▶ handlers ─▶ storage   │
//!                         │                            │          (SQLite)   │
//!                         │                            ▼                     │
//!                         │                  ┌───────────────────┐           │
//!     Client Response     │                  │ finalize: response│ response  │
//!     ◀───────────────────┼──────────────────│ report + body     │ report    │
//!                         │                  └───────────────────┘           │
//!                         └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use header_lab::config::resolve_config;
use header_lab::lifecycle::{shutdown_on_signal, Shutdown};
use header_lab::observability::{logging, metrics};
use header_lab::storage;
use header_lab::HttpServer;

#[derive(Parser)]
#[command(name = "header-lab")]
#[command(about = "Todo/list API with HTTP header analysis", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "HEADER_LAB_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!("header-lab v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        database = %config.database.url,
        request_timeout_secs = config.timeouts.request_secs,
        secure_headers = config.security.enable_headers,
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

    let pool = storage::init_pool(&config.database).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(config, pool.clone());
    server.run(listener, shutdown.subscribe()).await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
