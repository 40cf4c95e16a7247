//! Telegram Bot API transport

pub mod client;
pub mod mapping;
pub mod types;

pub use client::TelegramClient;
pub use mapping::update_to_event;
