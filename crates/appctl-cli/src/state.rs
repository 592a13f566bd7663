//! Local record of the tracked application.
//!
//! The file holds one [`ResourceState`] as JSON. Commands never edit it
//! directly; they hand the [`StateDirective`] returned by the core to
//! [`StateFile::apply`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use appctl_core::{application::StateDirective, domain::ResourceState};

use crate::error::{CliError, CliResult, IntoCli};

/// JSON file holding the tracked application.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the tracked state; a missing file is an error.
    pub fn load(&self) -> CliResult<ResourceState> {
        self.load_optional()?.ok_or_else(|| CliError::StateNotFound {
            path: self.path.clone(),
        })
    }

    /// Load the tracked state if the file exists.
    pub fn load_optional(&self) -> CliResult<Option<ResourceState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_cli_context(|| {
                    format!("Failed to read state file '{}'", self.path.display())
                });
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| CliError::StateCorrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }

    /// Fail if an application is already tracked here.
    pub fn ensure_vacant(&self) -> CliResult<()> {
        match self.load_optional()? {
            Some(existing) => Err(CliError::AlreadyTracked {
                name: existing.name,
                path: self.path.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Apply a directive: `Set` writes, `Remove` deletes, `Keep` does nothing.
    pub fn apply(&self, directive: &StateDirective) -> CliResult<()> {
        match directive {
            StateDirective::Set(state) => self.write(state),
            StateDirective::Remove => self.remove(),
            StateDirective::Keep => {
                debug!(path = %self.path.display(), "State left unchanged");
                Ok(())
            }
        }
    }

    fn write(&self, state: &ResourceState) -> CliResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create state directory '{}'", parent.display())
            })?;
        }

        let mut json = serde_json::to_string_pretty(state).map_err(io::Error::other)?;
        json.push('\n');

        // Atomic replace.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_cli_context(|| format!("Failed to write state to '{}'", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_cli_context(|| format!("Failed to replace '{}'", self.path.display()))?;

        debug!(path = %self.path.display(), id = %state.id, "State written");
        Ok(())
    }

    fn remove(&self) -> CliResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "State removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_cli_context(|| {
                format!("Failed to remove state file '{}'", self.path.display())
            }),
        }
    }
}
