//! Long-poll update poller
//!
//! Fetches updates in a background task and exposes them as a [`Stream`] of
//! chat events. Polling failures become `ChatEvent::PollingError` followed by
//! a back-off delay; `stop()` ends the stream.

use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use futures::Stream;
use repbot_common::TelegramConfig;
use repbot_core::events::ChatEvent;
use repbot_core::traits::TransportResult;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::telegram::mapping::update_to_event;
use crate::telegram::types::Update;

/// Where updates come from
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Updates with id >= `offset`, waiting up to `timeout_secs` for one
    async fn fetch_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> TransportResult<Vec<Update>>;
}

/// Configuration for the update poller
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Long-poll timeout passed to the platform
    pub poll_timeout_secs: u64,
    /// Delay after a failed poll
    pub retry_delay: Duration,
    /// Buffered events between poller and consumer
    pub buffer: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout_secs: 30,
            retry_delay: Duration::from_millis(3000),
            buffer: 256,
        }
    }
}

impl From<&TelegramConfig> for PollerConfig {
    fn from(config: &TelegramConfig) -> Self {
        Self {
            poll_timeout_secs: config.poll_timeout_secs,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            ..Default::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollerError {
    #[error("Update poller is already running")]
    AlreadyRunning,
}

pub struct UpdatePoller {
    source: Arc<dyn UpdateSource>,
    config: PollerConfig,
    running: Arc<AtomicBool>,
    shutdown: watch::Sender<bool>,
}

impl UpdatePoller {
    pub fn new(source: Arc<dyn UpdateSource>, config: PollerConfig) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            source,
            config,
            running: Arc::new(AtomicBool::new(false)),
            shutdown,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start polling in a background task
    ///
    /// # Errors
    /// Returns `PollerError::AlreadyRunning` if a poll loop is active
    pub fn start(&self) -> Result<EventStream, PollerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(PollerError::AlreadyRunning);
        }

        self.shutdown.send_replace(false);
        let shutdown = self.shutdown.subscribe();
        let (tx, rx) = mpsc::channel(self.config.buffer.max(1));

        let poll_loop = PollLoop {
            source: self.source.clone(),
            config: self.config.clone(),
            running: self.running.clone(),
        };
        tokio::spawn(poll_loop.run(tx, shutdown));

        info!("Update poller started");
        Ok(EventStream { rx })
    }

    /// Signal the poll loop to finish. Safe to call repeatedly.
    pub fn stop(&self) {
        if self.running.load(Ordering::SeqCst) {
            info!("Stopping update poller");
        }
        self.shutdown.send_replace(true);
    }
}

impl Drop for UpdatePoller {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
    }
}

impl std::fmt::Debug for UpdatePoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatePoller")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish()
    }
}

struct PollLoop {
    source: Arc<dyn UpdateSource>,
    config: PollerConfig,
    running: Arc<AtomicBool>,
}

impl PollLoop {
    async fn run(self, tx: mpsc::Sender<ChatEvent>, mut shutdown: watch::Receiver<bool>) {
        let mut offset: Option<i64> = None;

        while !*shutdown.borrow() {
            let result = tokio::select! {
                _ = shutdown.changed() => break,
                result = self.source.fetch_updates(offset, self.config.poll_timeout_secs) => result,
            };

            match result {
                Ok(updates) => {
                    debug!(count = updates.len(), "Received updates");
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        let Some(event) = update_to_event(update) else {
                            continue;
                        };
                        if tx.send(event).await.is_err() {
                            debug!("Event stream dropped");
                            self.running.store(false, Ordering::SeqCst);
                            return;
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Polling failed");
                    let event = ChatEvent::PollingError {
                        cause: e.to_string(),
                    };
                    if tx.send(event).await.is_err() {
                        break;
                    }

                    tokio::select! {
                        _ = shutdown.changed() => break,
                        () = tokio::time::sleep(self.config.retry_delay) => {}
                    }
                }
            }
        }

        self.running.store(false, Ordering::SeqCst);
        info!("Update poller stopped");
    }
}

/// Chat events produced by a running poller. Ends once the poller stops.
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::Receiver<ChatEvent>,
}

impl Stream for EventStream {
    type Item = ChatEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
