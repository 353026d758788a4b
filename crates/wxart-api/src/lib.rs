//! # wxart-api — HTTP Service
//!
//! Thin Axum layer over the weather-art system:
//!
//! | Route                | Module               | Purpose                      |
//! |----------------------|----------------------|------------------------------|
//! | `POST /api/generate` | [`routes::generate`] | Agent-driven scene generation |
//! | `GET /api/geocode`   | [`routes::geocode`]  | City name resolution         |
//! | `POST /api/validate` | [`routes::scene`]    | Scene validation             |
//! | `GET /api/schema`    | [`routes::scene`]    | Scene JSON Schema            |
//! | `GET /openapi.json`  | [`openapi`]          | OpenAPI spec                 |
//!
//! Health probes (`/health/*`) are mounted separately so they stay
//! reachable regardless of application state.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::generate::router())
        .merge(routes::geocode::router())
        .merge(routes::scene::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
