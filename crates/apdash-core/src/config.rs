// ── Runtime configuration ──
//
// Describes where each collaborator lives and how long probes may take.
// Never touches disk; `apdash-config` builds one from TOML + env.

use std::path::PathBuf;
use std::time::Duration;

use apdash_api::{DEFAULT_PROBE_TIMEOUT, DevicePaths};

/// Everything a [`Dashboard`](crate::Dashboard) needs to reach its collaborators.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// `hostapd_cli` executable.
    pub hostapd_cli: PathBuf,
    /// hostapd control socket directory.
    pub ctrl_dir: PathBuf,
    /// dnsmasq lease file.
    pub lease_path: PathBuf,
    /// Manual override registry (JSON).
    pub registry_path: PathBuf,
    /// Per-request deadline for device management API calls.
    pub probe_timeout: Duration,
    pub device_paths: DevicePaths,
    /// Fall back to the legacy settings endpoint when naming a device.
    pub legacy_fallback: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            hostapd_cli: PathBuf::from("hostapd_cli"),
            ctrl_dir: PathBuf::from(apdash_api::hostapd::DEFAULT_CTRL_DIR),
            lease_path: PathBuf::from("/var/lib/misc/dnsmasq.leases"),
            registry_path: PathBuf::from("/var/lib/apdash/manual.json"),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            device_paths: DevicePaths::default(),
            legacy_fallback: true,
        }
    }
}
