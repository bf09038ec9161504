//! LeadPulse — lead-analytics dashboard backend.
//!
//! Main entry point: loads configuration, connects the lead store, and
//! starts the API server.

use clap::Parser;
use leadpulse_api::ApiServer;
use leadpulse_core::config::AppConfig;
use leadpulse_store::PostgrestLeadStore;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "leadpulse")]
#[command(about = "Lead-analytics dashboard backend")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "LEADPULSE__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Lead store base URL (overrides config)
    #[arg(long, env = "LEADPULSE__STORE__URL")]
    store_url: Option<String>,

    /// Lead store API key (overrides config)
    #[arg(long, env = "LEADPULSE__STORE__API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadpulse=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("LeadPulse starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(url) = cli.store_url {
        config.store.url = url;
    }
    if let Some(key) = cli.api_key {
        config.store.api_key = key;
    }

    info!(
        http_port = config.api.http_port,
        store_url = %config.store.url,
        table = %config.store.table,
        "Configuration loaded"
    );

    // Connect the lead store
    let store = Arc::new(PostgrestLeadStore::new(&config.store)?);

    // Start API server
    let api_server = ApiServer::new(config.clone(), store);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("LeadPulse is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
