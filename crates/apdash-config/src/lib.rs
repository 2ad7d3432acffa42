//! Configuration for the apdash binary.
//!
//! Layered with `figment`: built-in defaults, then the TOML file, then
//! `APDASH_`-prefixed environment variables (sections nested with `__`,
//! e.g. `APDASH_PROBE__TIMEOUT_MS=800`). Translated to
//! `apdash_core::DashboardConfig` once loaded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use apdash_api::DevicePaths;
use apdash_core::DashboardConfig;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "APDASH_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl ConfigError {
    fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub hostapd: Hostapd,
    pub leases: Leases,
    pub registry: Registry,
    pub probe: Probe,
    pub display: DisplayOptions,
}

/// Access point control utility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Hostapd {
    pub cli: PathBuf,
    pub ctrl_dir: PathBuf,
}

impl Default for Hostapd {
    fn default() -> Self {
        Self {
            cli: "hostapd_cli".into(),
            ctrl_dir: apdash_api::hostapd::DEFAULT_CTRL_DIR.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Leases {
    pub path: PathBuf,
}

impl Default for Leases {
    fn default() -> Self {
        Self {
            path: "/var/lib/misc/dnsmasq.leases".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Registry {
    pub path: PathBuf,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            path: "/var/lib/apdash/manual.json".into(),
        }
    }
}

/// Device management API probing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Probe {
    /// Per-request deadline, milliseconds.
    pub timeout_ms: u64,
    pub device_info_path: String,
    pub wifi_config_path: String,
    pub wifi_clients_path: String,
    pub legacy_settings_path: String,
    /// Try the legacy settings endpoint when the device-info call yields no name.
    pub legacy_fallback: bool,
}

impl Default for Probe {
    fn default() -> Self {
        let paths = DevicePaths::default();
        Self {
            timeout_ms: 500,
            device_info_path: paths.device_info,
            wifi_config_path: paths.wifi_config,
            wifi_clients_path: paths.wifi_clients,
            legacy_settings_path: paths.legacy_settings,
            legacy_fallback: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Interval between refreshes in watch mode, seconds.
    pub refresh_secs: u64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { refresh_secs: 5 }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "apdash", "apdash").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("apdash");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Layered sources, without extracting.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load the full Config from file + environment.
///
/// An explicit `path` must exist; the default location may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) if !p.exists() => {
            return Err(ConfigError::NotFound { path: p.into() });
        }
        Some(p) => p.to_path_buf(),
        None => config_path(),
    };

    let config: Config = figment(&path).extract()?;
    Ok(config)
}

/// Render a config as TOML, as `config show` prints it.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Refresh interval for watch mode.
    pub fn refresh_interval(&self) -> Result<Duration, ConfigError> {
        if self.display.refresh_secs == 0 {
            return Err(ConfigError::validation("display.refresh_secs", "must be at least 1"));
        }
        Ok(Duration::from_secs(self.display.refresh_secs))
    }

    /// Build a `DashboardConfig`, validating values figment cannot check.
    pub fn to_dashboard_config(&self) -> Result<DashboardConfig, ConfigError> {
        if self.probe.timeout_ms == 0 {
            return Err(ConfigError::validation("probe.timeout_ms", "must be at least 1"));
        }

        let device_paths = DevicePaths {
            device_info: request_path("probe.device_info_path", &self.probe.device_info_path)?,
            wifi_config: request_path("probe.wifi_config_path", &self.probe.wifi_config_path)?,
            wifi_clients: request_path("probe.wifi_clients_path", &self.probe.wifi_clients_path)?,
            legacy_settings: request_path(
                "probe.legacy_settings_path",
                &self.probe.legacy_settings_path,
            )?,
        };

        Ok(DashboardConfig {
            hostapd_cli: self.hostapd.cli.clone(),
            ctrl_dir: self.hostapd.ctrl_dir.clone(),
            lease_path: self.leases.path.clone(),
            registry_path: self.registry.path.clone(),
            probe_timeout: Duration::from_millis(self.probe.timeout_ms),
            device_paths,
            legacy_fallback: self.probe.legacy_fallback,
        })
    }
}

fn request_path(field: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::validation(field, "must not be empty"));
    }
    if trimmed.contains("://") {
        return Err(ConfigError::validation(
            field,
            format!("expected a request path, got URL '{trimmed}'"),
        ));
    }
    Ok(format!("/{}", trimmed.trim_start_matches('/')))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_dashboard_defaults() {
        let dash = Config::default().to_dashboard_config().unwrap();
        let expected = DashboardConfig::default();
        assert_eq!(dash.hostapd_cli, expected.hostapd_cli);
        assert_eq!(dash.ctrl_dir, expected.ctrl_dir);
        assert_eq!(dash.lease_path, expected.lease_path);
        assert_eq!(dash.registry_path, expected.registry_path);
        assert_eq!(dash.probe_timeout, expected.probe_timeout);
        assert_eq!(dash.device_paths, expected.device_paths);
        assert!(dash.legacy_fallback);
    }

    #[test]
    fn file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [probe]
                timeout_ms = 300
                legacy_fallback = false

                [leases]
                path = "/tmp/leases"
                "#,
            )?;
            jail.set_env("APDASH_PROBE__TIMEOUT_MS", "900");
            jail.set_env("APDASH_REGISTRY__PATH", "/srv/manual.json");

            let cfg: Config = figment(Path::new("config.toml")).extract()?;
            assert_eq!(cfg.probe.timeout_ms, 900);
            assert!(!cfg.probe.legacy_fallback);
            assert_eq!(cfg.leases.path, PathBuf::from("/tmp/leases"));
            assert_eq!(cfg.registry.path, PathBuf::from("/srv/manual.json"));
            assert_eq!(cfg.display.refresh_secs, 5);
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/apdash.toml")));
        assert!(matches!(err, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn bad_type_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[probe]\ntimeout_ms = \"soon\"\n")?;
            let result = load_config(Some(Path::new("config.toml")));
            assert!(matches!(result, Err(ConfigError::Figment(_))));
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut cfg = Config::default();
        cfg.probe.timeout_ms = 0;
        assert!(matches!(
            cfg.to_dashboard_config(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn request_paths_are_normalized() {
        let mut cfg = Config::default();
        cfg.probe.device_info_path = "rpc/Shelly.GetDeviceInfo".into();
        cfg.probe.wifi_config_path = "http://x/rpc".into();
        assert!(cfg.to_dashboard_config().is_err());

        cfg.probe.wifi_config_path = " /rpc/WiFi.GetConfig ".into();
        let paths = cfg.to_dashboard_config().unwrap().device_paths;
        assert_eq!(paths.device_info, "/rpc/Shelly.GetDeviceInfo");
        assert_eq!(paths.wifi_config, "/rpc/WiFi.GetConfig");
    }

    #[test]
    fn zero_refresh_rejected() {
        let mut cfg = Config::default();
        cfg.display.refresh_secs = 0;
        assert!(cfg.refresh_interval().is_err());
        assert_eq!(
            Config::default().refresh_interval().ok(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn renders_as_toml() {
        let text = to_toml(&Config::default()).unwrap();
        assert!(text.contains("[probe]"));
        assert!(text.contains("timeout_ms = 500"));
    }
}
