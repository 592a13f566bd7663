//! Remote representations exchanged through the `RemoteOperations` port.
//!
//! These types mirror what the control plane returns. They are deliberately
//! lenient: any field the remote side omits deserializes to an empty string.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Organization returned by default-organization resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: String,
    pub slug: String,
    pub name: String,
}

/// Organization reference embedded in an application payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRef {
    pub id: String,
    pub slug: String,
}

/// An application as the control plane describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteApplication {
    pub id: String,
    pub name: String,
    pub organization: OrganizationRef,
    pub app_url: String,
    pub hostname: String,
    pub shared_ip_address: String,
}

/// One entry of a structured remote failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteErrorEntry {
    pub message: String,
    /// Location of the failing field, rendered like `app` or `app.secrets[0]`.
    pub path: String,
}

impl RemoteErrorEntry {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for RemoteErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Failure of a remote operation.
///
/// The control plane either answers with an ordered list of structured
/// errors, or the call never produced such an answer (connection refused,
/// unexpected status, undecodable body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("{}", join_entries(.0))]
    Failed(Vec<RemoteErrorEntry>),

    #[error("{0}")]
    Transport(String),
}

impl RemoteError {
    /// Single-entry structured failure.
    pub fn single(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Failed(vec![RemoteErrorEntry::new(message, path)])
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Entries of a structured failure; empty for transport errors.
    pub fn entries(&self) -> &[RemoteErrorEntry] {
        match self {
            Self::Failed(entries) => entries,
            Self::Transport(_) => &[],
        }
    }
}

fn join_entries(entries: &[RemoteErrorEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of a remote operation.
pub type RemoteResult<T> = Result<T, RemoteError>;
