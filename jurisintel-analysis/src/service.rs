//! Analysis service
//!
//! Orchestrates one search operation: theme validation, prompt rendering,
//! the AI call and response normalization. Failures terminate the operation
//! and surface a single user message; nothing is retried.

use crate::client::{AnalysisBackend, JurisLlmClient};
use crate::normalizer::normalize_response;
use crate::prompt::PromptTemplate;
use jurisintel_core::{validation_error, AnalysisResult, JurisIntelConfig, JurisResult};
use tracing::info;

pub struct AnalysisService {
    backend: Box<dyn AnalysisBackend>,
    template: PromptTemplate,
}

impl AnalysisService {
    pub fn new(backend: Box<dyn AnalysisBackend>, template: PromptTemplate) -> Self {
        Self { backend, template }
    }

    /// Build the service from configuration: externalized template file plus
    /// a siumai client for the configured provider.
    pub async fn from_config(config: &JurisIntelConfig) -> JurisResult<Self> {
        let template = PromptTemplate::load(&config.prompt.template_path).await?;
        let client = JurisLlmClient::new(config.llm.clone()).await?;
        Ok(Self::new(Box::new(client), template))
    }

    /// Run a full analysis for a research theme.
    ///
    /// A blank theme is rejected before any network call. The returned
    /// result keeps `dashboard`/`guidance` as options so the caller owns
    /// the empty-default substitution for incomplete-but-usable responses.
    pub async fn analyze(&self, theme: &str) -> JurisResult<AnalysisResult> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(validation_error!(
                "Por favor, insira um tema para pesquisa.",
                "theme",
                "analysis_service"
            ));
        }

        info!(theme, "Starting legal analysis");

        let prompt = self.template.render(theme);
        let raw = self.backend.generate(&prompt).await?;
        let result = normalize_response(&raw)?;

        info!(theme, "Legal analysis completed");
        Ok(result)
    }
}
