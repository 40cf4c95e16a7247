//! Data transfer objects for API responses
//!
//! This module provides:
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod responses;

pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, ReputationResponse};
