//! Immutability guard.
//!
//! Compares proposed values against persisted state for fields that cannot
//! change once an application exists. Each field is checked on its own so
//! that several violations in one plan are all reported.

use crate::domain::{
    entities::{ResourceConfig, ResourceState},
    error::DomainError,
    value_objects::{FieldValue, ImmutableField},
};

/// Check a single field.
///
/// Only a known proposed value can violate; `Unknown` and `Null` mean the
/// caller has no opinion about the field.
pub fn check(
    field: ImmutableField,
    prior: &str,
    proposed: &FieldValue<String>,
) -> Result<(), DomainError> {
    match proposed {
        FieldValue::Value(value) if value != prior => Err(DomainError::ImmutableField {
            field,
            prior: prior.to_owned(),
            proposed: value.clone(),
        }),
        FieldValue::Value(_) | FieldValue::Unknown | FieldValue::Null => Ok(()),
    }
}

/// Check every guarded field of `plan` against `prior`.
///
/// Organization is checked before name; violations come back in that order.
pub fn violations(plan: &ResourceConfig, prior: &ResourceState) -> Vec<DomainError> {
    [
        check(
            ImmutableField::Organization,
            &prior.organization_slug,
            &plan.organization,
        ),
        check(ImmutableField::Name, &prior.name, &plan.name),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}
