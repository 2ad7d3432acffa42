//! CLI-aware configuration: the layered file/env config plus flag overrides.

use std::path::PathBuf;

use apdash_config::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config and apply global flag overrides on top.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = apdash_config::load_config(global.config.as_deref())?;
    apply_overrides(&mut cfg, global);
    Ok(cfg)
}

fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ms) = global.probe_timeout_ms {
        cfg.probe.timeout_ms = ms;
    }
    if let Some(ref path) = global.leases {
        cfg.leases.path.clone_from(path);
    }
    if let Some(ref path) = global.registry {
        cfg.registry.path.clone_from(path);
    }
}

/// The config file in effect: `--config` if given, else the default location.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(apdash_config::config_path)
}
