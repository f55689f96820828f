//! Mega Calculator - Web Entry Point
//!
//! Sets up logging, resolves configuration and serves the calculator API
//! until interrupted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use mega_calculator::config::ServerConfig;
use mega_calculator::logging::{init_tracing, parse_log_level};
use mega_calculator::web;

/// JSON-over-HTTP integer calculator.
#[derive(Parser, Debug)]
#[command(name = "calculator-web")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host or IP address to bind (overrides the config file).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file).
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Layers defaults, the config file and CLI flags into one config.
    fn server_config(&self) -> Result<ServerConfig> {
        let base = match &self.config {
            Some(path) => ServerConfig::from_file(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?,
            None => ServerConfig::default(),
        };
        Ok(base.with_overrides(self.host.clone(), self.port))
    }
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Main entry point.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = parse_log_level(&args.log_level)?;
    init_tracing(log_level, args.log_json)?;

    // Defaults, then config file, then CLI flags
    let config = args.server_config()?;
    info!(host = %config.host, port = config.port, "starting calculator web service");

    // Serve until Ctrl-C
    web::serve(&config, shutdown_signal())
        .await
        .context("calculator web service failed")?;

    Ok(())
}
