//! Appctl Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the appctl
//! application lifecycle manager, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            appctl-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (AppResourceService)           │
//! │   create / read / update / delete /     │
//! │               import                    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: RemoteOperations)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appctl-adapters (Infrastructure)     │
//! │ (GraphqlClient, InMemoryControlPlane)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ResourceConfig, ResourceState, guards) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use appctl_core::{
//!     application::{AppResourceService, RemoteOperations, StateDirective},
//!     domain::ResourceConfig,
//! };
//!
//! # fn demo(remote: Box<dyn RemoteOperations>) {
//! // 1. Describe the desired application
//! let config = ResourceConfig::new("demo-app").with_organization("acme");
//!
//! // 2. Use application service (with an injected adapter)
//! let service = AppResourceService::new(remote);
//! let outcome = service.create(&config);
//!
//! // 3. Apply the directive to your own storage
//! if let StateDirective::Set(state) = &outcome.directive {
//!     println!("created {}", state.id);
//! }
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppResourceService, FailureKind, OperationOutcome, StateDirective,
        ports::RemoteOperations,
    };
    pub use crate::domain::{
        Diagnostic, Diagnostics, FieldValue, Operation, Organization, OrganizationRef,
        RemoteApplication, RemoteError, RemoteErrorEntry, RemoteResult, ResourceConfig,
        ResourceState, Severity,
    };
    pub use crate::error::{AppctlError, AppctlResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
