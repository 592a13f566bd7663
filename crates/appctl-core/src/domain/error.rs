// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ImmutableField;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (collected into diagnostics, compared in tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Can't mutate {field} of existing app")]
    ImmutableField {
        field: ImmutableField,
        prior: String,
        proposed: String,
    },
}

impl DomainError {
    /// Longer, user-facing explanation used as diagnostic detail.
    pub fn detail(&self) -> String {
        match self {
            Self::MissingRequiredField { field } => {
                format!("The '{field}' attribute must be set to a non-empty value")
            }
            Self::ImmutableField {
                field,
                prior,
                proposed,
            } => format!("Can't switch {field} {prior} to {proposed}"),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{field}'"),
                "Application names are globally unique; pick a distinct one".into(),
            ],
            Self::ImmutableField { field, prior, .. } => vec![
                format!("Keep {field} set to '{prior}'"),
                "To move the app, delete it and create a new one".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::ImmutableField { .. } => ErrorCategory::Immutability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Immutability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immutable_field_messages() {
        let err = DomainError::ImmutableField {
            field: ImmutableField::Organization,
            prior: "acme".into(),
            proposed: "other-org".into(),
        };
        assert_eq!(err.to_string(), "Can't mutate org of existing app");
        assert_eq!(err.detail(), "Can't switch org acme to other-org");
        assert_eq!(err.category(), ErrorCategory::Immutability);
    }

    #[test]
    fn missing_field_suggests_a_value() {
        let err = DomainError::MissingRequiredField { field: "name" };
        assert!(err.suggestions().iter().any(|s| s.contains("name")));
    }
}
