//! Report export handlers

use super::types::ErrorResponse;
use crate::{AppState, WebError};
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Local;
use jurisintel_core::{ErrorContext, JurisError};
use jurisintel_report::{build_report, ExportFormat};
use tracing::info;

/// Download the current analysis as a report document
#[utoipa::path(
    get,
    path = "/api/report/{format}",
    tag = "Report",
    summary = "Export the current analysis",
    description = "Serialize the current analysis into a downloadable document (html or markdown)",
    params(
        ("format" = String, Path, description = "Report format: html or markdown")
    ),
    responses(
        (status = 200, description = "Report document", body = String, content_type = "text/html"),
        (status = 400, description = "Unknown format", body = ErrorResponse),
        (status = 409, description = "No data to export", body = ErrorResponse)
    )
)]
pub async fn export_report(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, WebError> {
    let format =
        ExportFormat::from_name(&format).ok_or_else(|| WebError::UnknownFormat(format.clone()))?;

    // Export is blocked while no analysis data exists.
    let current = state.current_analysis().await.ok_or_else(|| {
        WebError::Juris(JurisError::Export {
            message: "Não há dados para gerar o relatório.".to_string(),
            context: ErrorContext::new("web").with_operation("export_report"),
        })
    })?;

    let document = build_report(
        format,
        &current.theme,
        Some(&current.dashboard),
        Some(&current.guidance),
        Local::now(),
    )?;

    info!(
        filename = %document.filename,
        bytes = document.content.len(),
        "Serving report download"
    );

    let headers = [
        (header::CONTENT_TYPE, document.mime_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ),
    ];
    Ok((headers, document.content).into_response())
}
