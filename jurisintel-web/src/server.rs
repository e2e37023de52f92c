//! JurisIntel Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main JurisIntel web server
pub struct JurisIntelServer {
    config: WebConfig,
    state: AppState,
}

impl JurisIntelServer {
    /// Create a new JurisIntel server
    pub async fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::from_config(config.clone()).await?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting JurisIntel Web Server");
        info!("📍 Server address: http://{}", address);
        info!("🔧 Development mode: {}", self.config.dev_mode);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("✅ Server listening on http://{}", address);

        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for JurisIntelServer
pub struct JurisIntelServerBuilder {
    config: WebConfig,
}

impl JurisIntelServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Set static files directory
    pub fn static_dir<S: Into<String>>(mut self, static_dir: S) -> Self {
        self.config.static_dir = Some(static_dir.into());
        self
    }

    /// Set the JurisIntel configuration file path
    pub fn config_path<S: Into<String>>(mut self, config_path: S) -> Self {
        self.config.config_path = Some(config_path.into());
        self
    }

    /// Build the server
    pub async fn build(self) -> WebResult<JurisIntelServer> {
        JurisIntelServer::new(self.config).await
    }
}

impl Default for JurisIntelServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
