//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use apdash_config::ConfigError;
use apdash_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(apdash::validation))]
    Validation { field: String, reason: String },

    // ── Manual registry ──────────────────────────────────────────────
    #[error("Manual registry is unusable: {message}")]
    #[diagnostic(
        code(apdash::registry),
        help(
            "Check permissions on the registry file, or point elsewhere with\n\
             --registry or APDASH_REGISTRY__PATH."
        )
    )]
    Registry { message: String },

    // ── Access point ─────────────────────────────────────────────────
    #[error("Access point command failed: {message}")]
    #[diagnostic(
        code(apdash::access_point),
        help("Check that hostapd is running and hostapd.ctrl_dir is correct.")
    )]
    AccessPoint { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(apdash::no_config),
        help("Default location: {default}")
    )]
    NoConfig { path: String, default: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(apdash::config),
        help("Run: apdash config show")
    )]
    Config { message: String },

    #[error("Internal error: {0}")]
    #[diagnostic(code(apdash::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(apdash::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationFailed { field, reason } => CliError::Validation { field, reason },

            e @ (CoreError::RegistryRead { .. }
            | CoreError::RegistryWrite { .. }
            | CoreError::RegistryFormat { .. }) => CliError::Registry {
                message: e.to_string(),
            },

            CoreError::AccessPoint { message } => CliError::AccessPoint { message },

            CoreError::Device { message } | CoreError::Internal(message) => {
                CliError::Internal(message)
            }
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NotFound { path } => CliError::NoConfig {
                path: path.display().to_string(),
                default: apdash_config::config_path().display().to_string(),
            },
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
