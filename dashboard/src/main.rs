mod clock;
mod dashboard;
mod errors;
mod ingest;
mod metrics;
mod model;
mod pagination;
mod state;
mod store;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::env;
use std::sync::Arc;
use tracing::{error, info};

use crate::clock::SystemClock;
use crate::state::AppState;
use crate::store::FileStore;

#[tokio::main]
async fn main() {
    let http_addr = env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let data_file = env::var("DATA_FILE").unwrap_or_else(|_| "sensor_data.json".to_string());

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting sensor dashboard");
    info!("HTTP server: {}", http_addr);
    info!("History file: {}", data_file);

    // Initialize metrics
    metrics::init_metrics();

    let state = AppState::new(Arc::new(FileStore::new(data_file)), Arc::new(SystemClock));

    let app = Router::new()
        .route("/", get(dashboard::dashboard_page))
        .route("/api/update", post(ingest::update_sensor))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {}: {}", http_addr, e);
            std::process::exit(1);
        });

    info!("HTTP server listening on {}", http_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap_or_else(|e| {
            error!("HTTP server error: {}", e);
        });
    });

    tokio::select! {
        _ = server_handle => {
            error!("HTTP server terminated");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down");
}

async fn metrics_handler() -> String {
    metrics::gather_metrics()
}

#[derive(Serialize)]
struct Health {
    status: String,
}

async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}
