//! Core domain layer for appctl.
//!
//! This module contains the pure parts of application lifecycle management:
//! the records exchanged with callers and with the control plane, and the
//! rules applied to them. Remote calls are made by the application layer
//! through ports; nothing here performs I/O.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: observability belongs to the application and CLI layers
//! - **Immutable records**: All domain objects are Clone + PartialEq

// Public API - what the world sees
pub mod classifier;
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod immutability;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use classifier::{Classification, NOT_FOUND_MESSAGE, Sentinel};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use entities::{
    config::ResourceConfig,
    remote::{
        Organization, OrganizationRef, RemoteApplication, RemoteError, RemoteErrorEntry,
        RemoteResult,
    },
    state::ResourceState,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FieldValue, ImmutableField, Operation};

pub use validation::DomainValidator;
