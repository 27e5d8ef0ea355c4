//! Search-term simplification handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SimplifyTitleRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub series_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SimplifyAuthorRequest {
    pub author: String,
}

/// `simplified` is `null` when the input should be searched unmodified.
#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub simplified: Option<String>,
}

/// POST /api/v1/simplify/title
pub async fn simplify_title(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SimplifyTitleRequest>,
) -> Json<SimplifyResponse> {
    let simplified = state
        .simplifier()
        .simplify_title(
            &body.title,
            body.subtitle.as_deref(),
            body.series_name.as_deref(),
        )
        .into_option();
    Json(SimplifyResponse { simplified })
}

/// POST /api/v1/simplify/author
pub async fn simplify_author(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SimplifyAuthorRequest>,
) -> Json<SimplifyResponse> {
    let simplified = state.simplifier().simplify_author(&body.author).into_option();
    Json(SimplifyResponse { simplified })
}
