//! Shared sandbox for driving the `appctl` binary.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Nothing listens on the discard port, so every request fails fast.
pub const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/graphql";

pub const TRACKED_STATE: &str = r#"{
  "id": "app_123",
  "name": "demo-app",
  "organization_slug": "acme",
  "organization_id": "org_1",
  "application_url": "https://demo-app.fly.dev",
  "hostname": "demo-app.fly.dev",
  "shared_ip_address": ""
}
"#;

/// Temporary working directory with its own config and state file.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[output]\nno_color = true\n").unwrap();
        Self { dir }
    }

    /// Sandbox whose state file already tracks `demo-app`.
    pub fn tracking() -> Self {
        let sandbox = Self::new();
        fs::write(sandbox.state_path(), TRACKED_STATE).unwrap();
        sandbox
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("appctl.state.json")
    }

    /// `appctl` isolated from the user's environment and network.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("appctl").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("NO_COLOR")
            .env_remove("RUST_LOG")
            .env_remove("APPCTL__API__TOKEN")
            .env_remove("APPCTL__API__ENDPOINT")
            .env_remove("APPCTL__STATE__PATH")
            .arg("--no-color")
            .arg("--config")
            .arg(self.config_path())
            .arg("--state")
            .arg(self.state_path())
            .args(["--endpoint", DEAD_ENDPOINT]);
        cmd
    }
}
