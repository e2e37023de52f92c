//! OpenAPI documentation for the web API

use crate::handlers;
use axum::response::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JurisIntel API",
        description = "AI-assisted legal research analysis and report export",
        version = "0.1.0"
    ),
    paths(
        handlers::health::health_check,
        handlers::analysis::run_analysis,
        handlers::analysis::get_analysis,
        handlers::report::export_report,
        handlers::prompt::generate_research_prompt,
    ),
    components(schemas(
        handlers::types::HealthResponse,
        handlers::types::AnalyzeRequest,
        handlers::types::AnalysisResponse,
        handlers::types::PromptRequest,
        handlers::types::PromptResponse,
        handlers::types::ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Server status"),
        (name = "Analysis", description = "Legal analysis pipeline"),
        (name = "Report", description = "Report export"),
        (name = "Prompt", description = "Deep-research prompt generation")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI specification as JSON
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
