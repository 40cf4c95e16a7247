//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use repbot_common::AppError;
use repbot_core::{DomainError, TransportError};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Storage failure
    Domain(DomainError),

    /// Chat platform call failed
    Transport(TransportError),

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Transport(e) => write!(f, "Transport error: {e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Transport(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<TransportError> for ServiceError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Transport(e) => AppError::Transport(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ServiceError::validation("transport is required");
        assert_eq!(err.to_string(), "Validation error: transport is required");

        let err: ServiceError = TransportError::api(403, "bot was kicked").into();
        assert_eq!(err.to_string(), "Transport error: API error 403: bot was kicked");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err: ServiceError = DomainError::DatabaseError("pool timed out".to_string()).into();
        assert!(err.source().is_some());
        assert!(ServiceError::validation("x").source().is_none());
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::validation("bad").into();
        assert_eq!(app_err.status_code(), 400);

        let app_err: AppError = ServiceError::Transport(TransportError::Http("reset".to_string())).into();
        assert_eq!(app_err.status_code(), 502);

        let service_err: ServiceError = DomainError::DatabaseError("down".to_string()).into();
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 500);
        assert_eq!(app_err.error_code(), "DATABASE_ERROR");
    }
}
