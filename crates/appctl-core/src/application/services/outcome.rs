//! Results returned by the lifecycle entry points.

use serde::Serialize;

use crate::{
    application::ApplicationError,
    domain::{Diagnostic, Diagnostics, Operation, ResourceState},
    error::AppctlResult,
};

/// What the caller must do with its persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "state", rename_all = "lowercase")]
pub enum StateDirective {
    /// Replace the persisted record with this state.
    Set(ResourceState),
    /// Stop tracking the application.
    Remove,
    /// Leave the persisted record as it is.
    Keep,
}

impl StateDirective {
    pub fn state(&self) -> Option<&ResourceState> {
        match self {
            Self::Set(state) => Some(state),
            Self::Remove | Self::Keep => None,
        }
    }
}

/// Which part of the error taxonomy stopped an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Local check failed; nothing was sent to the control plane.
    Validation,
    /// Organization lookup failed; nothing was mutated.
    Resolution,
    /// A remote call failed; the remote side may be partially changed.
    Remote,
}

/// Result of one lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutcome {
    pub operation: Operation,
    pub directive: StateDirective,
    pub diagnostics: Diagnostics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl OperationOutcome {
    pub(crate) fn set(operation: Operation, state: ResourceState) -> Self {
        Self {
            operation,
            directive: StateDirective::Set(state),
            diagnostics: Diagnostics::new(),
            failure: None,
        }
    }

    pub(crate) fn remove(operation: Operation) -> Self {
        Self {
            operation,
            directive: StateDirective::Remove,
            diagnostics: Diagnostics::new(),
            failure: None,
        }
    }

    pub(crate) fn keep(operation: Operation) -> Self {
        Self {
            operation,
            directive: StateDirective::Keep,
            diagnostics: Diagnostics::new(),
            failure: None,
        }
    }

    pub(crate) fn failed(
        operation: Operation,
        failure: FailureKind,
        diagnostics: impl Into<Diagnostics>,
    ) -> Self {
        Self {
            operation,
            directive: StateDirective::Keep,
            diagnostics: diagnostics.into(),
            failure: Some(failure),
        }
    }

    pub(crate) fn with_directive(mut self, directive: StateDirective) -> Self {
        self.directive = directive;
        self
    }

    pub(crate) fn with_diagnostics(mut self, diagnostics: Diagnostics, failure: FailureKind) -> Self {
        if diagnostics.has_error() {
            self.failure.get_or_insert(failure);
        }
        self.diagnostics.append(diagnostics);
        self
    }

    pub(crate) fn with_error(self, diagnostic: Diagnostic, failure: FailureKind) -> Self {
        self.with_diagnostics(diagnostic.into(), failure)
    }

    /// `true` if no error diagnostic was reported.
    pub fn is_success(&self) -> bool {
        !self.diagnostics.has_error()
    }

    /// The state to persist, if the operation produced one.
    pub fn state(&self) -> Option<&ResourceState> {
        self.directive.state()
    }

    /// Collapse into a `Result` for callers that do not handle diagnostics.
    ///
    /// The directive is returned on success; it may still be `Remove` (a
    /// refresh that found the app gone) or `Keep`.
    pub fn into_result(self) -> AppctlResult<StateDirective> {
        if self.is_success() {
            return Ok(self.directive);
        }
        let error = match self.failure {
            Some(FailureKind::Validation) => ApplicationError::Rejected {
                operation: self.operation,
                diagnostics: self.diagnostics,
            },
            Some(FailureKind::Resolution | FailureKind::Remote) | None => {
                ApplicationError::OperationFailed {
                    operation: self.operation,
                    diagnostics: self.diagnostics,
                }
            }
        };
        Err(error.into())
    }
}
