//! Error classifier: remote failures in, diagnostics out.

use crate::domain::{
    diagnostics::{Diagnostic, Diagnostics},
    entities::RemoteError,
};

/// Message the control plane returns when an application does not exist.
///
/// The trailing space is part of the message.
pub const NOT_FOUND_MESSAGE: &str = "Could not resolve ";

/// Which remote messages count as benign rather than as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Every entry is reported.
    None,
    /// Entries equal to [`NOT_FOUND_MESSAGE`] are suppressed.
    NotFound,
}

impl Sentinel {
    fn matches(self, message: &str) -> bool {
        match self {
            Self::None => false,
            Self::NotFound => message == NOT_FOUND_MESSAGE,
        }
    }
}

/// Outcome of classifying one remote failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub diagnostics: Diagnostics,
    /// `true` if at least one entry matched the active sentinel.
    pub sentinel_seen: bool,
}

/// Turn a remote failure into diagnostics.
///
/// Structured failures yield one diagnostic per entry, in order, keyed by the
/// entry message with its path as detail. Transport failures yield a single
/// diagnostic with `fallback_summary` and the raw error text, as does a
/// structured failure with no entries.
pub fn classify(error: &RemoteError, sentinel: Sentinel, fallback_summary: &str) -> Classification {
    match error {
        RemoteError::Failed(entries) if entries.is_empty() => Classification {
            diagnostics: Diagnostic::error(fallback_summary, "remote returned an empty error list")
                .into(),
            sentinel_seen: false,
        },
        RemoteError::Failed(entries) => {
            let mut classification = Classification::default();
            for entry in entries {
                if sentinel.matches(&entry.message) {
                    classification.sentinel_seen = true;
                    continue;
                }
                classification
                    .diagnostics
                    .push(Diagnostic::error(&entry.message, &entry.path));
            }
            classification
        }
        RemoteError::Transport(text) => Classification {
            diagnostics: Diagnostic::error(fallback_summary, text).into(),
            sentinel_seen: false,
        },
    }
}

/// Single-diagnostic reporting, used where a failure stops the operation
/// outright (organization resolution, creation).
pub fn summarize(error: &RemoteError, summary: &str) -> Diagnostic {
    Diagnostic::error(summary, error.to_string())
}
