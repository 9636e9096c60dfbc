//! Quickstart server - health checks and gateway event handlers.

use anyhow::{Context, Result};
use clap::Parser;
use quickstart_server::{app, config, logging, state};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use config::Config;
use logging::{LogConfig, LogFormat};
use state::AppState;

/// Quickstart server - health checks and WebSocket gateway event handlers.
#[derive(Parser, Debug)]
#[command(name = "quickstart-server")]
#[command(about = "HTTP server for health checks and gateway event handlers")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override host from config
    #[arg(long)]
    host: Option<String>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging (INFO level for all targets)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging (DEBUG level)
    #[arg(short, long)]
    debug: bool,

    /// Enable trace logging (TRACE level for everything)
    #[arg(long)]
    trace: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "auth=debug" or "ws=trace")
    /// Can be specified multiple times. Targets are prefixed with "quickstart::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

fn load_config(cli: &Cli) -> Result<Config> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let mut config = Config::load(cli.config.as_deref())?;

    // Apply CLI overrides
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli)?;

    // Initialize logging
    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
        config.log_level.preset(),
    )
    .with_colors(config.log_use_colors)
    .with_datetime_format(config.datetime_format.clone());
    logging::init(&log_config);

    tracing::info!(
        target: "quickstart::startup",
        "Loaded configuration (port: {}, workers: {})",
        config.port,
        config.workers_count
    );
    if config.should_show_settings() {
        tracing::info!(target: "quickstart::startup", "Settings: {:#?}", config);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers_count)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    // Initialize application state
    let state = Arc::new(AppState::new(config));
    tracing::info!(target: "quickstart::startup", "Initialized application state");

    if state.config.enable_openapi {
        tracing::info!(target: "quickstart::startup", "OpenAPI document enabled at /openapi.json");
    }

    let app = app::build_router(state)?;

    // Start server
    tracing::info!(target: "quickstart::startup", "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!(target: "quickstart::startup", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "quickstart::startup", "Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!(target: "quickstart::startup", "Shutdown signal received");
}
