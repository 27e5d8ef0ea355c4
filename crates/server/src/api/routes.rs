use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, plan, simplify};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Release search plans
        .route("/plan", post(plan::build_plan))
        .route("/books/{catalog_id}/plan", get(plan::build_plan_for_book))
        // Search-term simplification
        .route("/simplify/title", post(simplify::simplify_title))
        .route("/simplify/author", post(simplify::simplify_author))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
