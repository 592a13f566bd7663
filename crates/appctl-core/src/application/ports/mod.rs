//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `appctl-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RemoteOperations`: the control-plane API (organizations and apps)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The lifecycle entry points on `AppResourceService`)

pub mod output;

pub use output::RemoteOperations;

#[cfg(test)]
pub use output::MockRemoteOperations;
