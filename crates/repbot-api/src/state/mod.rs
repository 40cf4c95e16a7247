//! Application state
//!
//! Holds the shared state for the Axum application: the reputation store
//! and the configuration.

use std::sync::Arc;

use repbot_common::AppConfig;
use repbot_core::traits::ReputationRepository;
use repbot_service::LedgerService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    reputation_repo: Arc<dyn ReputationRepository>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(reputation_repo: Arc<dyn ReputationRepository>, config: AppConfig) -> Self {
        Self {
            reputation_repo,
            config: Arc::new(config),
        }
    }

    /// Get the reputation repository
    pub fn reputation_repo(&self) -> &dyn ReputationRepository {
        self.reputation_repo.as_ref()
    }

    /// Ledger service over the shared repository
    pub fn ledger(&self) -> LedgerService<'_> {
        LedgerService::new(self.reputation_repo())
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("reputation_repo", &"ReputationRepository")
            .field("config", &"AppConfig")
            .finish()
    }
}
