use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use bookseek_core::{SearchConfig, SimplifierConfig};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub search: SearchConfig,
    pub simplifier: SimplifierConfig,
    pub metadata_provider: String,
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        search: state.search_config().clone(),
        simplifier: state.simplifier_config().clone(),
        metadata_provider: state.metadata().name().to_string(),
    })
}
