//! Release search plan handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

use bookseek_core::{BookMetadata, LanguageSelection, MetadataError, ReleaseSearchPlan};

use super::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub book: BookMetadata,
    /// Preference order; omitted for the configured defaults, `["all"]` for
    /// unrestricted search.
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub manual_query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookPlanParams {
    /// Comma-separated language codes, e.g. `en,hu` or `all`.
    #[serde(default)]
    pub languages: Option<String>,
    #[serde(default)]
    pub manual_query: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/plan
///
/// Build a plan from metadata supplied in the request body.
pub async fn build_plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlanRequest>,
) -> Json<ReleaseSearchPlan> {
    let book = state.prepare(body.book);
    let selection = LanguageSelection::from_request(body.languages);

    let plan = state
        .planner()
        .build_plan(&book, selection, body.manual_query.as_deref());
    Json(plan)
}

/// GET /api/v1/books/{catalog_id}/plan
///
/// Look the book up through the metadata provider and build its plan.
pub async fn build_plan_for_book(
    State(state): State<Arc<AppState>>,
    Path(catalog_id): Path<String>,
    Query(params): Query<BookPlanParams>,
) -> Result<Json<ReleaseSearchPlan>, (StatusCode, Json<ErrorResponse>)> {
    let book = match state.metadata().lookup(&catalog_id).await {
        Ok(book) => state.prepare(book),
        Err(e) => {
            let status = match e {
                MetadataError::NotFound(_) => StatusCode::NOT_FOUND,
                MetadataError::Unavailable(_) => StatusCode::BAD_GATEWAY,
                MetadataError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            warn!(catalog_id = %catalog_id, error = %e, "Metadata lookup failed");
            return Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    let selection = params
        .languages
        .as_deref()
        .map(LanguageSelection::from_csv)
        .unwrap_or_default();
    debug!(catalog_id = %catalog_id, selection = ?selection, "Planning release search");

    let plan = state
        .planner()
        .build_plan(&book, selection, params.manual_query.as_deref());
    Ok(Json(plan))
}
