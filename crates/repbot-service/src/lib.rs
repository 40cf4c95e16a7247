//! # repbot-service
//!
//! Application layer: the reputation event engine and the services it
//! drives (classifier, ledger, membership, notifications, avatars), plus
//! the DTOs served by the reporting API.

pub mod dto;
pub mod services;

pub use services::{
    BotSettings, Classifier, EventOutcome, LedgerService, ReputationEngine, ReputationProfile,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
