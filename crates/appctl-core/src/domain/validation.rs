use crate::domain::{
    entities::{ResourceConfig, ResourceState},
    error::DomainError,
    immutability,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// Checks a plan against the persisted state. Returns every violation.
    pub fn validate_update(plan: &ResourceConfig, prior: &ResourceState) -> Vec<DomainError> {
        immutability::violations(plan, prior)
    }
}
