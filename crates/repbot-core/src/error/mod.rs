//! Domain and transport error types

mod domain_error;
mod transport_error;

pub use domain_error::DomainError;
pub use transport_error::TransportError;
