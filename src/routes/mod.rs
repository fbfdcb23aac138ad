//! Router assembly.

pub mod common;
pub mod plants;

pub use common::common_routes_with_ready;
pub use plants::plant_routes;

use crate::config::AppConfig;
use crate::handlers::landing_page;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// API path prefix for plant routes.
pub const API_PREFIX: &str = "/api/v1";

/// The whole application: landing page, common routes, and `/api/v1` plant routes behind
/// CORS, a request body cap and per-request tracing.
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(landing_page))
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_PREFIX, plant_routes(state))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
