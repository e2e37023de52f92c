//! Request and response types for the web API

use crate::state::CurrentAnalysis;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Analysis request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Free-text legal research theme
    #[schema(example = "Responsabilidade civil do Estado")]
    pub theme: String,
}

/// Current analysis snapshot returned to the dashboard
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub theme: String,
    #[schema(value_type = Object)]
    pub dashboard: jurisintel_core::DashboardData,
    #[schema(value_type = Object)]
    pub guidance: jurisintel_core::GuidanceData,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

impl From<CurrentAnalysis> for AnalysisResponse {
    fn from(snapshot: CurrentAnalysis) -> Self {
        Self {
            theme: snapshot.theme,
            dashboard: snapshot.dashboard,
            guidance: snapshot.guidance,
            fetched_at: snapshot.fetched_at,
        }
    }
}

/// Deep-research prompt request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    /// Theme override; falls back to the current analysis theme
    pub theme: Option<String>,
    /// Comma-separated state court acronyms to prioritize
    #[schema(example = "TJSP, TJRJ")]
    pub prioritized_courts: Option<String>,
}

/// Generated deep-research prompt
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Error envelope carrying the single user-facing message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Por favor, insira um tema para pesquisa.")]
    pub error: String,
}
