//! Command handlers, one module per top-level subcommand.

pub mod config_cmd;
pub mod kick;
pub mod manual;
pub mod stations;

use apdash_config::Config;
use apdash_core::{AccessPoint, Dashboard, DeviceProber};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a dashboard command to its handler.
pub async fn dispatch<A: AccessPoint, P: DeviceProber>(
    cmd: Command,
    dashboard: &Dashboard<A, P>,
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Stations(args) => stations::handle(dashboard, &args, cfg, global).await,
        Command::Kick { mac } => kick::handle(dashboard, &mac, global).await,
        Command::Manual(args) => manual::handle(dashboard, args, global),
        // Config and Completions are handled before a dashboard exists
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not use the dashboard".into(),
        )),
    }
}
