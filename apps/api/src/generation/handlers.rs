//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_draft, GenerateDraftRequest, GeneratedDraft};
use crate::state::AppState;

/// POST /api/v1/posts/generate
///
/// Runs the two-stage AI pipeline and returns an assembled draft. The draft
/// is caller-owned: nothing is written to the database until the admin saves
/// it as a post.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateDraftRequest>,
) -> Result<Json<GeneratedDraft>, AppError> {
    let draft = generate_draft(
        state.text_gen.as_ref(),
        state.image_gen.as_ref(),
        request,
    )
    .await?;

    Ok(Json(draft))
}
