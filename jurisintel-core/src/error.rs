//! Unified error handling system
//!
//! Provides structured error types with context and a single user-facing
//! message per failure category. No error in this system is retried
//! automatically; each one terminates the in-flight operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub type JurisResult<T> = Result<T, JurisError>;

/// Error context providing additional information for debugging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for the JurisIntel system
#[derive(Error, Debug)]
pub enum JurisError {
    #[error("Prompt template error: {message}")]
    Template {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
        model: Option<String>,
        context: ErrorContext,
    },

    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        context: ErrorContext,
    },

    #[error("Response parse error: {message}")]
    Parse {
        message: String,
        context: ErrorContext,
    },

    #[error("Invalid response format: {message}")]
    InvalidResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("Export error: {message}")]
    Export {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl JurisError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            JurisError::Template { context, .. } => Some(context),
            JurisError::Llm { context, .. } => Some(context),
            JurisError::Authentication { context, .. } => Some(context),
            JurisError::Parse { context, .. } => Some(context),
            JurisError::InvalidResponse { context, .. } => Some(context),
            JurisError::Validation { context, .. } => Some(context),
            JurisError::Export { context, .. } => Some(context),
            JurisError::Config { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The single human-readable message surfaced to the user.
    ///
    /// User-facing text is Portuguese; log output stays English.
    pub fn user_message(&self) -> String {
        match self {
            JurisError::Template { .. } => {
                "Não foi possível carregar o modelo de prompt para a análise jurídica.".to_string()
            }
            JurisError::Llm { message, .. } => {
                format!("Erro de comunicação com o serviço de IA: {}", message)
            }
            JurisError::Authentication { .. } => {
                "Chave de API inválida. Verifique suas credenciais.".to_string()
            }
            JurisError::Parse { message, .. } => {
                format!(
                    "Falha ao interpretar a resposta do servidor. Detalhes: {}",
                    message
                )
            }
            JurisError::InvalidResponse { .. } => {
                "Formato de resposta da API inválido. Faltam chaves principais.".to_string()
            }
            JurisError::Validation { message, .. } => message.clone(),
            JurisError::Export { message, .. } => message.clone(),
            JurisError::Config { message, .. } => {
                format!("Erro de configuração: {}", message)
            }
            JurisError::Io(e) => format!("Erro de E/S: {}", e),
            JurisError::Serialization(e) => format!("Erro de serialização: {}", e),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            JurisError::Validation { .. } => {
                warn!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Validation error"
                );
            }
            JurisError::Authentication { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Authentication error"
                );
            }
            _ => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Error occurred"
                );
            }
        }
    }
}

/// Convenience macros for creating errors with context
#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $component:expr) => {
        $crate::JurisError::Validation {
            message: $msg.to_string(),
            field: None,
            context: $crate::ErrorContext::new($component),
        }
    };
    ($msg:expr, $field:expr, $component:expr) => {
        $crate::JurisError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: $crate::ErrorContext::new($component),
        }
    };
}
