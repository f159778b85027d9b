//! Study Strategy API - HTTP Service
//!
//! Stateless HTTP/JSON service exposing three planning endpoints:
//!
//! - `POST /allocate_hours` - proportional study-hour allocation
//! - `POST /calculate_ocean_scores` - OCEAN quiz-response averaging
//! - `POST /suggest_techniques` - threshold-based technique suggestion
//!
//! Plus `GET /` (HTML help), `GET /planners` (JSON catalog), and
//! `GET /health` / `GET /ready` probes. Handlers are deterministic and
//! share no mutable state; each request completes or fails atomically.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_strategy_server::{config, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = config::Config::load();

    // Initialize tracing; RUST_LOG wins over the configured fallback
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        platform_env = ?config.platform_env,
        "Starting Study Strategy API"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = routes::router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
