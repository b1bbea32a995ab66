//! Axum router construction for the dataset API.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /datasets/` -- list datasets
/// - `POST /datasets/` -- create a dataset
///
/// Both are also served without the trailing slash. CORS allows any
/// origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/datasets/",
            get(handlers::list_datasets).post(handlers::create_dataset),
        )
        .route(
            "/datasets",
            get(handlers::list_datasets).post(handlers::create_dataset),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
