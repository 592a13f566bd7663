//! Infrastructure adapters for appctl.
//!
//! This crate implements the ports defined in `appctl-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod remote;

// Re-export commonly used adapters
pub use remote::{ClientError, GraphqlClient, InMemoryControlPlane};
