pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form UI
        .route("/", get(handlers::handle_form))
        .route("/recommend", post(handlers::handle_recommend))
        // JSON API
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_api_recommend),
        )
        .with_state(state)
}
