//! Test helpers for integration tests
//!
//! Provides an engine harness over the in-memory store and the service
//! layer's fake transport, and an in-process API server driven over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use repbot_api::{create_app, AppState};
use repbot_common::AppConfig;
use repbot_core::value_objects::UserId;
use repbot_core::{ChatEvent, ReputationRecord, ReputationRepository};
use repbot_db::MemoryReputationRepository;
use repbot_service::services::testing::FakeTransport;
use repbot_service::{
    BotSettings, EventOutcome, LedgerService, ReputationEngine, ServiceContextBuilder,
    ServiceResult,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const BOT_USERNAME: &str = "RepBot";
pub const DASHBOARD_URL: &str = "https://dashboard.example.com";

// ============================================================================
// Engine harness
// ============================================================================

/// Reputation engine wired to a fake transport and an in-memory store
pub struct TestBot {
    pub engine: ReputationEngine,
    pub transport: Arc<FakeTransport>,
    pub repo: Arc<MemoryReputationRepository>,
}

impl TestBot {
    pub fn new() -> Result<Self> {
        Self::with_repo(Arc::new(MemoryReputationRepository::new()))
    }

    /// Build a bot over an existing store, e.g. one shared with a `TestServer`
    pub fn with_repo(repo: Arc<MemoryReputationRepository>) -> Result<Self> {
        let transport = Arc::new(FakeTransport::new());
        let ctx = ServiceContextBuilder::new()
            .reputation_repo(repo.clone())
            .transport(transport.clone())
            .settings(BotSettings::new(BOT_USERNAME, DASHBOARD_URL))
            .build()?;

        Ok(Self {
            engine: ReputationEngine::new(ctx),
            transport,
            repo,
        })
    }

    pub async fn handle(&self, event: ChatEvent) -> ServiceResult<EventOutcome> {
        self.engine.handle(event).await
    }

    /// Current score of `user`, `None` when no record exists
    pub async fn score(&self, user: UserId) -> Result<Option<i64>> {
        Ok(self.record(user).await?.map(|r| r.reputation))
    }

    pub async fn record(&self, user: UserId) -> Result<Option<ReputationRecord>> {
        let ledger = LedgerService::new(self.repo.as_ref());
        Ok(ledger.get(&user.ledger_key()).await?)
    }

    pub async fn record_count(&self) -> Result<usize> {
        Ok(self.repo.find_all().await?.len())
    }
}

// ============================================================================
// API server
// ============================================================================

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start an API server over the given in-memory store
    pub async fn start(repo: Arc<MemoryReputationRepository>) -> Result<Self> {
        let state = AppState::new(repo, test_config()?);
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }
}

/// Configuration for in-process servers; the store is in memory so the
/// database URL is never dialled
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused@localhost/unused".to_string()),
        "APP_ENV" => Some("development".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
