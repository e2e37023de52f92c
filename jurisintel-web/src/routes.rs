//! Route definitions for the JurisIntel web server

use crate::{handlers, openapi, AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Analysis pipeline
        .route(
            "/analysis",
            post(handlers::run_analysis).get(handlers::get_analysis),
        )
        // Report export
        .route("/report/{format}", get(handlers::export_report))
        // Deep-research prompt generation
        .route("/prompt", post(handlers::generate_research_prompt))
        // API documentation
        .route("/openapi.json", get(openapi::openapi_spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebConfig;
    use axum::http::StatusCode;
    use jurisintel_analysis::{AnalysisService, PromptTemplate};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct SilentBackend;

    #[async_trait::async_trait]
    impl jurisintel_analysis::AnalysisBackend for SilentBackend {
        async fn generate(&self, _prompt: &str) -> jurisintel_core::JurisResult<String> {
            unreachable!("routes tests never reach the backend")
        }
    }

    fn test_state() -> AppState {
        let service = AnalysisService::new(
            Box::new(SilentBackend),
            PromptTemplate::from_template("Tema: ${theme}"),
        );
        AppState::new(WebConfig::default(), Arc::new(service))
    }

    #[tokio::test]
    async fn health_route_responds_ok() {
        let app = api_routes().with_state(test_state());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn analysis_route_is_empty_before_any_search() {
        let app = api_routes().with_state(test_state());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/analysis")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
