//! Application state management
//!
//! The "current analysis" is an explicit session-scoped value replaced
//! wholesale on every successful search, never merged or mutated in place.

use crate::{WebConfig, WebResult};
use chrono::{DateTime, Utc};
use jurisintel_analysis::AnalysisService;
use jurisintel_core::{DashboardData, GuidanceData, JurisIntelConfig};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Snapshot of one completed search.
#[derive(Debug, Clone)]
pub struct CurrentAnalysis {
    pub theme: String,
    pub dashboard: DashboardData,
    pub guidance: GuidanceData,
    pub fetched_at: DateTime<Utc>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Analysis pipeline service
    pub service: Arc<AnalysisService>,
    /// Session-scoped current analysis snapshot
    pub current: Arc<RwLock<Option<CurrentAnalysis>>>,
}

impl AppState {
    /// Create application state around an existing service.
    pub fn new(config: WebConfig, service: Arc<AnalysisService>) -> Self {
        Self {
            config,
            service,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Build the state from configuration: load the JurisIntel config file
    /// (or defaults) and construct the analysis service from it.
    pub async fn from_config(config: WebConfig) -> WebResult<Self> {
        let juris_config = match &config.config_path {
            Some(path) => JurisIntelConfig::from_file(path)?,
            None => JurisIntelConfig::default(),
        };
        juris_config.validate()?;

        let service = AnalysisService::from_config(&juris_config).await?;
        info!(
            provider = %juris_config.llm.provider,
            model = %juris_config.llm.model,
            "Analysis service initialized"
        );

        Ok(Self::new(config, Arc::new(service)))
    }

    /// Replace the current analysis snapshot atomically.
    pub async fn store_analysis(&self, snapshot: CurrentAnalysis) {
        *self.current.write().await = Some(snapshot);
    }

    /// Clone of the current analysis snapshot, if any.
    pub async fn current_analysis(&self) -> Option<CurrentAnalysis> {
        self.current.read().await.clone()
    }
}
