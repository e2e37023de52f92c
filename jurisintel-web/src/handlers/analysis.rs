//! Analysis handlers
//!
//! `run_analysis` drives the full pipeline and replaces the session
//! snapshot atomically; the previous snapshot is kept untouched when the
//! operation fails.

use super::types::{AnalysisResponse, AnalyzeRequest, ErrorResponse};
use crate::state::CurrentAnalysis;
use crate::{AppState, WebError};
use axum::{extract::State, response::Json, Json as JsonExtractor};
use jurisintel_core::{DashboardData, GuidanceData};
use tracing::{info, warn};

/// Run a legal analysis for a theme
#[utoipa::path(
    post,
    path = "/api/analysis",
    tag = "Analysis",
    summary = "Run a legal analysis",
    description = "Send the research theme to the AI service and store the normalized result as the current analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResponse),
        (status = 422, description = "Blank theme", body = ErrorResponse),
        (status = 401, description = "Invalid AI service credentials", body = ErrorResponse),
        (status = 502, description = "AI service or response failure", body = ErrorResponse)
    )
)]
pub async fn run_analysis(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, WebError> {
    info!(theme = %request.theme, "Received analysis request");

    let result = state.service.analyze(&request.theme).await?;

    // Call-site substitution of full empty defaults for a section missing
    // from an otherwise usable result.
    let dashboard = result.dashboard.unwrap_or_else(|| {
        warn!("Dashboard data missing from AI response; substituting empty sections");
        DashboardData::default()
    });
    let guidance = result.guidance.unwrap_or_else(|| {
        warn!("Guidance data missing from AI response; substituting empty guidance");
        GuidanceData::default()
    });

    let snapshot = CurrentAnalysis {
        theme: request.theme.trim().to_string(),
        dashboard,
        guidance,
        fetched_at: chrono::Utc::now(),
    };
    state.store_analysis(snapshot.clone()).await;

    Ok(Json(snapshot.into()))
}

/// Get the current analysis snapshot
#[utoipa::path(
    get,
    path = "/api/analysis",
    tag = "Analysis",
    summary = "Get the current analysis",
    responses(
        (status = 200, description = "Current analysis snapshot", body = AnalysisResponse),
        (status = 404, description = "No analysis has been run yet", body = ErrorResponse)
    )
)]
pub async fn get_analysis(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResponse>, WebError> {
    let snapshot = state.current_analysis().await.ok_or(WebError::NoAnalysis)?;
    Ok(Json(snapshot.into()))
}
