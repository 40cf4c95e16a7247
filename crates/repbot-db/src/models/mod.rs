//! Database models - SQLx-compatible structs for PostgreSQL tables

mod reputation;

pub use reputation::ReputationModel;
