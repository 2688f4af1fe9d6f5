//! Axum route handlers for the SEO analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::SeoAnalysisRow;
use crate::seo::analysis::{analyze, SeoInput, SeoReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// When set, the persisted advisory record for this post (if any) is
    /// merged into the report. Unsaved drafts analyze without one.
    #[serde(default)]
    pub post_id: Option<Uuid>,
    #[serde(flatten)]
    pub input: SeoInput,
}

/// POST /api/v1/seo/analyze
///
/// Computes the advisory report for the editor's current field values.
/// Pure over its inputs plus the optional persisted record — safe to call
/// on every keystroke.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SeoReport>, AppError> {
    let record = match request.post_id {
        Some(post_id) => {
            sqlx::query_as::<_, SeoAnalysisRow>(
                "SELECT * FROM seo_analysis WHERE post_id = $1",
            )
            .bind(post_id)
            .fetch_optional(&state.db)
            .await?
        }
        None => None,
    };

    Ok(Json(analyze(&request.input, record.as_ref())))
}
