//! Ports - traits implemented by the infrastructure crates

mod repositories;
mod transport;

pub use repositories::{RepoResult, ReputationRepository};
pub use transport::{ChatTransport, TransportResult};
