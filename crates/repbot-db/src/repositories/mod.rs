//! Repository implementations
//!
//! PostgreSQL and in-memory implementations of the reputation repository
//! trait defined in repbot-core.

mod error;
mod memory;
mod reputation;

pub use memory::MemoryReputationRepository;
pub use reputation::PgReputationRepository;
