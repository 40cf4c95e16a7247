//! Transport errors - failures talking to the chat platform

use thiserror::Error;

/// Chat transport errors. The engine logs them and keeps going.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error {code}: {description}")]
    Api { code: i64, description: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn api(code: i64, description: impl Into<String>) -> Self {
        Self::Api {
            code,
            description: description.into(),
        }
    }
}
