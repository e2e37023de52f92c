//! Deep-research prompt handlers

use super::types::{ErrorResponse, PromptRequest, PromptResponse};
use crate::{AppState, WebError};
use axum::{extract::State, response::Json, Json as JsonExtractor};
use jurisintel_analysis::build_research_prompt;

/// Generate a deep-research prompt for external research tools
#[utoipa::path(
    post,
    path = "/api/prompt",
    tag = "Prompt",
    summary = "Generate a deep-research prompt",
    description = "Build the copy-paste research prompt for the given theme (or the current analysis theme)",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Generated prompt", body = PromptResponse),
        (status = 422, description = "No theme available", body = ErrorResponse)
    )
)]
pub async fn generate_research_prompt(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<PromptRequest>,
) -> Result<Json<PromptResponse>, WebError> {
    let theme = match request
        .theme
        .as_deref()
        .map(str::trim)
        .filter(|theme| !theme.is_empty())
    {
        Some(theme) => theme.to_string(),
        None => state
            .current_analysis()
            .await
            .map(|snapshot| snapshot.theme)
            .unwrap_or_default(),
    };

    let prompt = build_research_prompt(&theme, request.prioritized_courts.as_deref())?;
    Ok(Json(PromptResponse { prompt }))
}
