//! Business logic services
//!
//! The reputation event engine and the services it orchestrates.

pub mod avatar;
pub mod classifier;
pub mod context;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod membership;
pub mod notifier;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export all services for convenience
pub use avatar::AvatarResolver;
pub use classifier::Classifier;
pub use context::{BotSettings, ServiceContext, ServiceContextBuilder};
pub use engine::{EventOutcome, ReputationEngine};
pub use error::{ServiceError, ServiceResult};
pub use ledger::{LedgerService, ReputationProfile};
pub use membership::MembershipService;
pub use notifier::NotificationService;
