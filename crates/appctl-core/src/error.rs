//! Unified error handling for appctl core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for appctl core operations.
///
/// This enum wraps all possible errors that can occur when using appctl-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum AppctlError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (lifecycle operations that failed).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl AppctlError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation
                | crate::domain::ErrorCategory::Immutability => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Remote failures may be transient; local rule violations never are.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::OperationFailed { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Remote,
}

/// Convenient result type alias.
pub type AppctlResult<T> = Result<T, AppctlError>;
