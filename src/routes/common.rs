//! Operational routes: liveness, store readiness, and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness of the plant store; `store_latency_ms` is the ping round trip.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    store_latency_ms: u64,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let outcome = state.store.ping().await;
    let store_latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match outcome {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                database: "ok",
                store_latency_ms,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, store_latency_ms, "plant store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "unavailable",
                    store_latency_ms,
                }),
            )
        }
    }
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
    })
}

/// GET /health, GET /ready (pings the plant store), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
