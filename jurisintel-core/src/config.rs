//! Configuration management

use crate::error::{ErrorContext, JurisError, JurisResult};
use crate::types::{JurisIntelConfig, LlmConfig, PromptConfig, ReportConfig};

use std::path::Path;

impl Default for JurisIntelConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                provider: "openai".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key: None,
                base_url: None,
                // Low temperature for factual, less creative output
                temperature: 0.2,
                max_tokens: Some(4000),
            },
            prompt: PromptConfig {
                template_path: "prompts/legal_analysis.md".to_string(),
            },
            report: ReportConfig {
                output_dir: "reports".to_string(),
            },
        }
    }
}

impl JurisIntelConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> JurisResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| JurisError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: JurisIntelConfig =
            toml::from_str(&content).map_err(|e| JurisError::Config {
                message: format!("Failed to parse config: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("config")
                    .with_operation("parse_toml")
                    .with_suggestion("Check TOML syntax in config file"),
            })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> JurisResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| JurisError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| JurisError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> JurisResult<()> {
        if self.llm.provider.is_empty() {
            return Err(JurisError::Config {
                message: "LLM provider must not be empty".to_string(),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set llm.provider to openai, anthropic, ollama or groq"),
            });
        }

        if self.llm.model.is_empty() {
            return Err(JurisError::Config {
                message: "LLM model must not be empty".to_string(),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set llm.model to a model supported by the provider"),
            });
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(JurisError::Config {
                message: "LLM temperature must be between 0.0 and 2.0".to_string(),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set llm.temperature to a value in [0.0, 2.0]"),
            });
        }

        if self.prompt.template_path.is_empty() {
            return Err(JurisError::Config {
                message: "Prompt template path must not be empty".to_string(),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set prompt.template_path to the analysis template file"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = JurisIntelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.prompt.template_path, "prompts/legal_analysis.md");
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let mut config = JurisIntelConfig::default();
        config.llm.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jurisintel.toml");

        let mut config = JurisIntelConfig::default();
        config.llm.provider = "anthropic".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = JurisIntelConfig::from_file(&path).unwrap();
        assert_eq!(loaded.llm.provider, "anthropic");
        assert_eq!(loaded.report.output_dir, config.report.output_dir);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = JurisIntelConfig::from_file("/nonexistent/jurisintel.toml").unwrap_err();
        assert!(matches!(err, JurisError::Config { .. }));
    }
}
