//! Adapter for the hostapd control utility (`hostapd_cli`).
//!
//! Each call spawns `hostapd_cli -p <ctrl_dir> <command> [args]`, waits for
//! it to exit, and returns stdout. Deadlines are left to `hostapd_cli`
//! itself, which gives up on an unresponsive control socket on its own.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::Error;

/// Default hostapd control socket directory.
pub const DEFAULT_CTRL_DIR: &str = "/run/hostapd";

/// Handle on the hostapd control utility.
#[derive(Debug, Clone)]
pub struct HostapdCli {
    /// Program to execute, looked up on `PATH` when not absolute.
    program: PathBuf,
    /// Control socket directory passed via `-p`.
    ctrl_dir: PathBuf,
}

impl Default for HostapdCli {
    fn default() -> Self {
        Self::new("hostapd_cli", DEFAULT_CTRL_DIR)
    }
}

impl HostapdCli {
    pub fn new(program: impl Into<PathBuf>, ctrl_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ctrl_dir: ctrl_dir.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn ctrl_dir(&self) -> &Path {
        &self.ctrl_dir
    }

    /// `hostapd_cli -p <dir> list_sta`: one associated station per line.
    pub async fn list_sta(&self) -> Result<String, Error> {
        self.run(&["list_sta"]).await
    }

    /// `hostapd_cli -p <dir> sta <mac>`: `key=value` attributes of one station.
    pub async fn sta(&self, mac: &str) -> Result<String, Error> {
        self.run(&["sta", mac]).await
    }

    /// `hostapd_cli -p <dir> deauthenticate <mac>`.
    pub async fn deauthenticate(&self, mac: &str) -> Result<String, Error> {
        self.run(&["deauthenticate", mac]).await
    }

    async fn run(&self, args: &[&str]) -> Result<String, Error> {
        let program = self.program.display().to_string();
        debug!(program, ?args, "running control command");

        let output = Command::new(&self.program)
            .arg("-p")
            .arg(&self.ctrl_dir)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::CommandFailed {
                program,
                args: args.join(" "),
                status: output.status.to_string(),
                stderr: stderr.trim().to_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!(bytes = stdout.len(), "control command finished");
        Ok(stdout)
    }
}
