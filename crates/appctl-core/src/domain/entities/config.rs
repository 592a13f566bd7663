//! Desired configuration for an application.
//!
//! A `ResourceConfig` is what the caller *wants*. It may be incomplete: the
//! organization can be left [`FieldValue::Unknown`] and resolved to the
//! caller's default organization at creation time.

use crate::domain::{error::DomainError, value_objects::FieldValue};

/// Caller-declared shape of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Application name. Required; immutable once created.
    pub name: FieldValue<String>,
    /// Organization slug. `Unknown` means "use my default organization".
    pub organization: FieldValue<String>,
    /// Resolved organization identifier. Derived, never read from the caller.
    pub organization_id: FieldValue<String>,
}

impl ResourceConfig {
    /// Configuration for `name` with the organization left to be resolved.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: FieldValue::Value(name.into()),
            organization: FieldValue::Unknown,
            organization_id: FieldValue::Unknown,
        }
    }

    /// Pin the organization slug.
    pub fn with_organization(mut self, slug: impl Into<String>) -> Self {
        self.organization = FieldValue::Value(slug.into());
        self
    }

    /// Set the organization field to any tagged state.
    pub fn with_organization_field(mut self, organization: FieldValue<String>) -> Self {
        self.organization = organization;
        self
    }

    /// Required name, rejecting every state except a non-empty value.
    pub fn required_name(&self) -> Result<&str, DomainError> {
        match self.name.as_known() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(DomainError::MissingRequiredField { field: "name" }),
        }
    }
}
