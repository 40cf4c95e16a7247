//! Service context - dependency container for services
//!
//! Holds the reputation store, the chat transport and the bot settings
//! needed by the engine and its services.

use std::sync::Arc;

use repbot_common::TelegramConfig;
use repbot_core::traits::{ChatTransport, ReputationRepository};

use super::error::{ServiceError, ServiceResult};

/// Default target of the "chat statistics" button
pub const DEFAULT_DASHBOARD_URL: &str = "https://skill-bot-client.vercel.app";

/// Bot-specific settings consumed by the classifier and the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSettings {
    /// The bot's own username, without `@`
    pub bot_username: String,
    pub dashboard_url: String,
}

impl BotSettings {
    pub fn new(bot_username: impl Into<String>, dashboard_url: impl Into<String>) -> Self {
        Self {
            bot_username: bot_username.into(),
            dashboard_url: dashboard_url.into(),
        }
    }

    /// Build settings from config once the bot username is known
    pub fn from_config(config: &TelegramConfig, bot_username: impl Into<String>) -> Self {
        Self::new(bot_username, config.dashboard_url.clone())
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self::new("", DEFAULT_DASHBOARD_URL)
    }
}

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    reputation_repo: Arc<dyn ReputationRepository>,
    transport: Arc<dyn ChatTransport>,
    settings: Arc<BotSettings>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reputation_repo: Arc<dyn ReputationRepository>,
        transport: Arc<dyn ChatTransport>,
        settings: BotSettings,
    ) -> Self {
        Self {
            reputation_repo,
            transport,
            settings: Arc::new(settings),
        }
    }

    /// Get the reputation repository
    pub fn reputation_repo(&self) -> &dyn ReputationRepository {
        self.reputation_repo.as_ref()
    }

    /// Get the chat transport
    pub fn transport(&self) -> &dyn ChatTransport {
        self.transport.as_ref()
    }

    pub fn settings(&self) -> &BotSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("reputation_repo", &"ReputationRepository")
            .field("transport", &"ChatTransport")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    reputation_repo: Option<Arc<dyn ReputationRepository>>,
    transport: Option<Arc<dyn ChatTransport>>,
    settings: BotSettings,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reputation_repo: None,
            transport: None,
            settings: BotSettings::default(),
        }
    }

    pub fn reputation_repo(mut self, repo: Arc<dyn ReputationRepository>) -> Self {
        self.reputation_repo = Some(repo);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn settings(mut self, settings: BotSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.reputation_repo
                .ok_or_else(|| ServiceError::validation("reputation_repo is required"))?,
            self.transport
                .ok_or_else(|| ServiceError::validation("transport is required"))?,
            self.settings,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
