//! LLM client integration using siumai
//!
//! Provides a unified interface for the AI text-generation call across
//! providers, behind the [`AnalysisBackend`] seam so the pipeline can be
//! exercised without a network.

use async_trait::async_trait;
use jurisintel_core::{ErrorContext, JurisError, JurisResult, LlmConfig};
use siumai::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Backend seam for the AI text-generation call.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Send a fully rendered prompt and return the raw response text.
    async fn generate(&self, prompt: &str) -> JurisResult<String>;
}

/// Unified LLM client that supports multiple providers
pub struct JurisLlmClient {
    client: Box<dyn LlmClient>,
    config: LlmConfig,
}

impl std::fmt::Debug for JurisLlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JurisLlmClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JurisLlmClient {
    /// Create a new LLM client
    pub async fn new(config: LlmConfig) -> JurisResult<Self> {
        let client = Self::build_client(&config).await?;

        info!(
            "Created LLM client for provider: {} with model: {}",
            config.provider, config.model
        );

        Ok(Self { client, config })
    }

    /// Build the appropriate siumai client based on configuration
    async fn build_client(config: &LlmConfig) -> JurisResult<Box<dyn LlmClient>> {
        match config.provider.as_str() {
            "openai" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .ok_or_else(|| missing_key_error("OpenAI", "OPENAI_API_KEY"))?;

                let mut builder = LlmBuilder::new()
                    .openai()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                if let Some(base_url) = &config.base_url {
                    builder = builder.base_url(base_url);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| build_error("OpenAI", config, e))?;

                Ok(Box::new(client))
            }
            "anthropic" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
                    .ok_or_else(|| missing_key_error("Anthropic", "ANTHROPIC_API_KEY"))?;

                let mut builder = LlmBuilder::new()
                    .anthropic()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| build_error("Anthropic", config, e))?;

                Ok(Box::new(client))
            }
            "ollama" => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "http://localhost:11434".to_string());

                let mut builder = LlmBuilder::new()
                    .ollama()
                    .model(&config.model)
                    .base_url(&base_url)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| build_error("Ollama", config, e))?;

                Ok(Box::new(client))
            }
            "groq" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("GROQ_API_KEY").ok())
                    .ok_or_else(|| missing_key_error("Groq", "GROQ_API_KEY"))?;

                let mut builder = LlmBuilder::new()
                    .groq()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| build_error("Groq", config, e))?;

                Ok(Box::new(client))
            }
            provider => Err(JurisError::Config {
                message: format!("Unsupported LLM provider: {}", provider),
                source: None,
                context: ErrorContext::new("llm_client")
                    .with_suggestion("Use openai, anthropic, ollama or groq"),
            }),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[async_trait]
impl AnalysisBackend for JurisLlmClient {
    async fn generate(&self, prompt: &str) -> JurisResult<String> {
        let start_time = Instant::now();

        debug!("Sending analysis prompt ({} chars)", prompt.len());

        let messages = vec![user!(prompt)];
        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| chat_error(&self.config, e))?;

        let generation_time = start_time.elapsed();

        if let Some(content) = response.content_text() {
            info!(
                "Received AI response in {:?} ({} chars)",
                generation_time,
                content.len()
            );
            Ok(content.to_string())
        } else {
            Err(JurisError::Llm {
                message: "No text content in LLM response".to_string(),
                provider: Some(self.config.provider.clone()),
                model: Some(self.config.model.clone()),
                context: ErrorContext::new("llm_client").with_operation("chat"),
            })
        }
    }
}

fn missing_key_error(provider: &str, env_var: &str) -> JurisError {
    JurisError::Config {
        message: format!("{} API key not found", provider),
        source: None,
        context: ErrorContext::new("llm_client")
            .with_suggestion(&format!("Set the {} environment variable", env_var)),
    }
}

fn build_error(
    provider: &str,
    config: &LlmConfig,
    error: impl std::fmt::Display,
) -> JurisError {
    JurisError::Llm {
        message: format!("Failed to build {} client: {}", provider, error),
        provider: Some(config.provider.clone()),
        model: Some(config.model.clone()),
        context: ErrorContext::new("llm_client").with_operation("build_client"),
    }
}

/// Wrap a chat failure, special-casing invalid-credential responses.
fn chat_error(config: &LlmConfig, error: impl std::fmt::Display) -> JurisError {
    let message = error.to_string();

    if is_invalid_credentials(&message) {
        return JurisError::Authentication {
            message,
            context: ErrorContext::new("llm_client")
                .with_operation("chat")
                .with_suggestion("Check the configured API key"),
        };
    }

    JurisError::Llm {
        message,
        provider: Some(config.provider.clone()),
        model: Some(config.model.clone()),
        context: ErrorContext::new("llm_client").with_operation("chat"),
    }
}

/// Heuristic credential-failure detection on provider error text.
fn is_invalid_credentials(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("api key not valid")
        || lower.contains("invalid api key")
        || lower.contains("invalid x-api-key")
        || lower.contains("incorrect api key")
        || lower.contains("unauthorized")
        || lower.contains("401")
}

/// Helper functions for creating common LLM configurations
pub mod configs {
    use super::*;

    /// OpenAI configuration tuned for factual legal analysis
    pub fn openai_default() -> LlmConfig {
        LlmConfig {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.2,
            max_tokens: Some(4000),
        }
    }

    /// Anthropic configuration tuned for factual legal analysis
    pub fn anthropic_default() -> LlmConfig {
        LlmConfig {
            provider: "anthropic".to_string(),
            model: "claude-3-5-haiku-latest".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.2,
            max_tokens: Some(4000),
        }
    }

    /// Ollama configuration for local models
    pub fn ollama_default(base_url: Option<String>) -> LlmConfig {
        LlmConfig {
            provider: "ollama".to_string(),
            model: "llama3.2".to_string(),
            api_key: None,
            base_url: base_url.or_else(|| Some("http://localhost:11434".to_string())),
            temperature: 0.2,
            max_tokens: Some(4000),
        }
    }

    /// Groq configuration
    pub fn groq_default() -> LlmConfig {
        LlmConfig {
            provider: "groq".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.2,
            max_tokens: Some(4000),
        }
    }
}

/// Create a client with automatic provider detection from the environment.
pub async fn create_auto_client() -> JurisResult<JurisLlmClient> {
    let providers = vec![
        ("openai", "OPENAI_API_KEY", configs::openai_default()),
        ("anthropic", "ANTHROPIC_API_KEY", configs::anthropic_default()),
        ("groq", "GROQ_API_KEY", configs::groq_default()),
    ];

    for (provider_name, env_var, config) in providers {
        if std::env::var(env_var).is_ok() {
            info!("Auto-detected {} provider", provider_name);
            match JurisLlmClient::new(config).await {
                Ok(client) => return Ok(client),
                Err(e) => {
                    warn!("Failed to create {} client: {}", provider_name, e);
                    continue;
                }
            }
        }
    }

    // Ollama needs no API key and serves as the fallback
    info!("Trying Ollama as fallback");
    JurisLlmClient::new(configs::ollama_default(None)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_invalid_credential_messages() {
        assert!(is_invalid_credentials("API key not valid. Please pass a valid key."));
        assert!(is_invalid_credentials("Error 401: Unauthorized"));
        assert!(is_invalid_credentials("Incorrect API key provided"));
        assert!(!is_invalid_credentials("connection reset by peer"));
        assert!(!is_invalid_credentials("model overloaded, try again"));
    }

    #[tokio::test]
    async fn unsupported_provider_is_a_config_error() {
        let config = LlmConfig {
            provider: "palantir".to_string(),
            model: "m".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.2,
            max_tokens: None,
        };
        let err = JurisLlmClient::new(config).await.unwrap_err();
        assert!(matches!(err, JurisError::Config { .. }));
    }
}
