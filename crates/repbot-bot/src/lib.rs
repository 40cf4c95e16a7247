//! # repbot-bot
//!
//! Telegram side of the reputation bot: the Bot API client, the long-poll
//! update poller, and the runtime wiring them to the reputation engine.

pub mod poller;
pub mod runtime;
pub mod telegram;

pub use poller::{EventStream, PollerConfig, PollerError, UpdatePoller, UpdateSource};
pub use runtime::run;
pub use telegram::TelegramClient;
