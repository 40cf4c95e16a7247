//! Integration test utilities for the reputation bot
//!
//! This crate provides helpers for driving the reputation engine end to end
//! against a fake transport, and for exercising the REST API over HTTP.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
