//! Quote Server
//!
//! Serves random motivational quotes over HTTP. Quotes come from a remote
//! Supabase table when one is configured, otherwise from a compiled-in
//! fallback list.

mod config;
mod error;
mod handlers;
mod routes;
mod services;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::Config;
use routes::create_router;
use state::AppState;

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Quote Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, variant={}, remote={}",
        config.bind_address,
        config.variant,
        config.remote.is_some()
    );

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let variant = config.variant;

    let state = AppState::from_config(config)?;
    let app = create_router(state)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Quote API listening on http://{}", addr);
    info!("Endpoints:");
    info!("   GET  /api/quote (random quote)");
    if variant == config::ServiceVariant::Persistent {
        info!("   GET  /api/quotes (all quotes)");
        info!("   POST /api/quotes (create quote)");
    }
    info!("   GET  /health");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
