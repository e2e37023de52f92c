//! JurisIntel Web API
//!
//! HTTP interface for the analysis pipeline: runs searches, exposes the
//! session-scoped analysis snapshot and streams report downloads. The
//! browser dashboard consuming this API lives outside this repository.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use server::JurisIntelServer;
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Json, Response},
    Router,
};
use jurisintel_core::JurisError;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    // Configure CORS for the dashboard frontend
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_origin("http://127.0.0.1:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let mut router = Router::new().nest("/api", routes::api_routes());

    // Optional static file serving for a bundled frontend
    if let Some(static_dir) = &state.config.static_dir {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    router
        .fallback(handlers::spa_fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
    /// Static files directory
    pub static_dir: Option<String>,
    /// JurisIntel configuration file (TOML)
    pub config_path: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
            static_dir: None,
            config_path: None,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("JURISINTEL_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("JURISINTEL_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            dev_mode: std::env::var("JURISINTEL_DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            static_dir: std::env::var("JURISINTEL_STATIC_DIR").ok(),
            config_path: std::env::var("JURISINTEL_CONFIG").ok(),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Juris(#[from] JurisError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("No analysis available")]
    NoAnalysis,

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::Juris(e) => {
                e.log();
                let status = match e {
                    JurisError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    JurisError::Authentication { .. } => StatusCode::UNAUTHORIZED,
                    JurisError::Export { .. } => StatusCode::CONFLICT,
                    JurisError::Template { .. }
                    | JurisError::Llm { .. }
                    | JurisError::Parse { .. }
                    | JurisError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.user_message())
            }
            WebError::Server(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erro interno do servidor: {}", e),
            ),
            WebError::NoAnalysis => (
                StatusCode::NOT_FOUND,
                "Nenhuma análise disponível. Realize uma pesquisa primeiro.".to_string(),
            ),
            WebError::UnknownFormat(format) => (
                StatusCode::BAD_REQUEST,
                format!("Formato de relatório desconhecido: {}", format),
            ),
        };

        (
            status,
            Json(handlers::types::ErrorResponse { error: message }),
        )
            .into_response()
    }
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jurisintel_web=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
