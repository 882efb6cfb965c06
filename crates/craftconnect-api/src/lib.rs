//! CraftConnect HTTP surface.
//!
//! Each endpoint turns a request into one user action, dispatches it to
//! the owning controller and answers with the resulting view model.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
#[must_use]
pub fn build_app(state: AppState) -> Router {
    // TODO: restrict CORS to the web client's origin once it is deployed.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/marketplace", routes::marketplace::router())
        .nest("/api/v1/booking", routes::booking::router())
        .nest("/api/v1/hearts", routes::hearts::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
