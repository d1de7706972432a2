//! Reputation Hub - Main Entry Point
//!
//! Starts the HTTP server for the reputation hub.

use actix_web::{web, App, HttpServer, middleware};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reputation_hub::api::{configure_routes, AppState, ApiState};
use reputation_hub::config::Settings;
use reputation_hub::metrics::{init_metrics, metrics_endpoint};
use reputation_hub::store::EngineStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with RUST_LOG environment variable support
    // Default: info level for reputation_hub, warn for everything else
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,reputation_hub=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true))
        .init();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Settings::default()
    });

    info!(
        "Starting {} v{} ({})",
        settings.service.name,
        env!("CARGO_PKG_VERSION"),
        settings.service.instance_id
    );
    info!("HTTP: {}:{}", settings.server.host, settings.server.http_port);
    info!(
        "Trust depth: default {}, max {}",
        settings.trust.default_depth, settings.trust.max_depth
    );

    if settings.metrics.enabled {
        init_metrics();
    }

    // All state lives in memory for the lifetime of the process
    let store = Arc::new(EngineStore::new());

    // Create application state for HTTP server
    let app_state = AppState::new(&settings.service.name, &settings.service.instance_id);
    let api_state = ApiState::new(Arc::clone(&store), &settings);
    let metrics_settings = settings.metrics.clone();

    let http_addr = format!("{}:{}", settings.server.host, settings.server.http_port);
    info!("Starting HTTP server on {}", http_addr);

    HttpServer::new(move || {
        let app = App::new()
            // Add shared state
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(api_state.clone()))
            // Add middleware
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            // Add routes
            .configure(configure_routes);

        if metrics_settings.enabled {
            app.route(&metrics_settings.path, web::get().to(metrics_endpoint))
        } else {
            app
        }
    })
    .workers(settings.server.workers)
    .bind(&http_addr)
    .with_context(|| format!("failed to bind {}", http_addr))?
    .run()
    .await
    .context("HTTP server terminated")?;

    Ok(())
}
