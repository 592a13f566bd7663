//! Application layer errors.
//!
//! These errors represent lifecycle operations that did not complete. Rule
//! violations themselves are `DomainError` from `crate::domain`; here they
//! arrive already rendered as diagnostics.

use thiserror::Error;

use crate::domain::{Diagnostics, Operation};
use crate::error::ErrorCategory;

/// Errors that occur during lifecycle orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Rejected locally before any remote call (missing name, immutable field).
    #[error("{operation} rejected:\n  {diagnostics}")]
    Rejected {
        operation: Operation,
        diagnostics: Diagnostics,
    },

    /// Organization resolution or a remote call failed.
    #[error("{operation} failed:\n  {diagnostics}")]
    OperationFailed {
        operation: Operation,
        diagnostics: Diagnostics,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Rejected { operation, .. } => vec![
                format!("Fix the configuration and re-run {operation}"),
                "Name and organization cannot change after creation".into(),
            ],
            Self::OperationFailed { operation, .. } => {
                let mut suggestions = vec![
                    format!("The control plane rejected or did not answer the {operation} request"),
                    "Check your API token and endpoint, then retry".into(),
                ];
                suggestions.push(match operation {
                    // Tracking has already stopped.
                    Operation::Delete => {
                        "If the app still exists, re-adopt it with 'appctl import <NAME>'".into()
                    }
                    Operation::Read | Operation::Update => {
                        "Run 'appctl refresh' to reconcile local state with the remote app".into()
                    }
                    Operation::Create | Operation::Import => {
                        "Nothing was recorded locally; it is safe to re-run".into()
                    }
                });
                suggestions
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Rejected { .. } => ErrorCategory::Validation,
            Self::OperationFailed { .. } => ErrorCategory::Remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Diagnostic;

    fn failed(operation: Operation) -> ApplicationError {
        ApplicationError::OperationFailed {
            operation,
            diagnostics: Diagnostic::error("boom", "").into(),
        }
    }

    fn mentions(err: &ApplicationError, needle: &str) -> bool {
        err.suggestions().iter().any(|s| s.contains(needle))
    }

    #[test]
    fn failed_delete_suggests_import_not_refresh() {
        let err = failed(Operation::Delete);
        assert!(mentions(&err, "appctl import"));
        assert!(!mentions(&err, "appctl refresh"));
    }

    #[test]
    fn failed_read_suggests_refresh() {
        assert!(mentions(&failed(Operation::Read), "appctl refresh"));
    }

    #[test]
    fn failed_create_points_at_nothing_tracked() {
        let err = failed(Operation::Create);
        assert!(!mentions(&err, "appctl refresh"));
        assert!(mentions(&err, "re-run"));
    }
}
