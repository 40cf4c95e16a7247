//! Bot process wiring
//!
//! Builds the Bot API client, the reputation store and the engine, then feeds
//! polled events into the engine until Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use repbot_common::{AppConfig, AppError};
use repbot_db::{create_pool, run_migrations, PgReputationRepository};
use repbot_service::{BotSettings, ReputationEngine, ServiceContextBuilder};
use tracing::{info, warn};

use crate::poller::{PollerConfig, UpdatePoller};
use crate::telegram::TelegramClient;

/// Run the bot until Ctrl-C
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let token = config.telegram.require_token()?;
    let client = Arc::new(TelegramClient::new(
        config.telegram.api_url.clone(),
        token,
        Duration::from_secs(config.telegram.poll_timeout_secs),
    )?);

    let bot_username = resolve_bot_username(&config, &client).await?;
    info!(bot_username = %bot_username, "Bot identity resolved");

    info!("Connecting to PostgreSQL...");
    let db_config = repbot_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        migrations_dir: config.database.migrations_dir.clone(),
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool, &db_config.migrations_dir)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let ctx = ServiceContextBuilder::new()
        .reputation_repo(Arc::new(PgReputationRepository::new(pool)))
        .transport(client.clone())
        .settings(BotSettings::from_config(&config.telegram, bot_username))
        .build()?;
    let engine = ReputationEngine::new(ctx);

    let poller = Arc::new(UpdatePoller::new(
        client,
        PollerConfig::from(&config.telegram),
    ));
    let events = poller
        .start()
        .map_err(AppError::internal)?;

    let stopper = poller.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        stopper.stop();
    });

    engine.run(events).await;

    info!("Bot stopped");
    Ok(())
}

/// Configured username, or the one the platform reports for the token
async fn resolve_bot_username(
    config: &AppConfig,
    client: &TelegramClient,
) -> Result<String, AppError> {
    if let Some(username) = config
        .telegram
        .bot_username
        .as_deref()
        .filter(|u| !u.is_empty())
    {
        return Ok(username.trim_start_matches('@').to_string());
    }

    let me = client.get_me().await?;
    me.username
        .ok_or_else(|| AppError::Config("bot account has no username".to_string()))
}
