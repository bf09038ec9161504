//! HTTP server wiring for the dashboard API.

use crate::rest::{self, AppState};
use axum::routing::get;
use axum::Router;
use leadpulse_core::config::AppConfig;
use leadpulse_store::LeadStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// REST server serving the KPI dashboard and CRM list.
pub struct ApiServer {
    config: AppConfig,
    store: Arc<dyn LeadStore>,
}

impl ApiServer {
    pub fn new(config: AppConfig, store: Arc<dyn LeadStore>) -> Self {
        Self { config, store }
    }

    /// Start the HTTP server. Blocks until shutdown.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let state = AppState {
            store: self.store.clone(),
            start_time: Instant::now(),
        };

        let app = Router::new()
            // Dashboard endpoints
            .route("/v1/dashboard", get(rest::get_dashboard))
            .route("/v1/leads", get(rest::list_leads))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the Prometheus metrics exporter on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
