//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to carry out the
//! application lifecycle: create, read, update, delete and import.

pub mod app_resource;
pub mod outcome;

pub use app_resource::AppResourceService;
pub use outcome::{FailureKind, OperationOutcome, StateDirective};
