//! Stand-in for the external health service.
//!
//! Serves `GET /api/v1/health` with the status payload the core's
//! health slice expects. The response DTO is defined independently of
//! the core crate; integration tests catch schema drift.

use std::{sync::Arc, time::Instant};

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tokio::net::TcpListener;

/// Health payload reported by the mock service.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Seconds since the service started.
    pub uptime: f64,
    pub version: String,
    /// RFC 3339 instant the response was produced.
    pub timestamp: String,
}

struct AppState {
    started: Instant,
}

pub fn app() -> Router {
    let state = Arc::new(AppState {
        started: Instant::now(),
    });
    Router::new()
        .route("/api/v1/health", get(health))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "mock-server".to_string(),
        uptime: state.started.elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
