// ── Core error types ──
//
// Only failures a caller must act on become a `CoreError`: rejected user
// input, loss of manual-registry data, and failed access-point commands.
// Probe, lease, and station-listing failures are absorbed where they
// happen and never reach this type.

use std::path::Path;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── User input ───────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    ValidationFailed { field: String, reason: String },

    // ── Manual registry ──────────────────────────────────────────────
    #[error("Cannot read manual registry at {path}: {source}")]
    RegistryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write manual registry at {path}: {source}")]
    RegistryWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Manual registry at {path} is not valid: {source}")]
    RegistryFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ── Collaborators ────────────────────────────────────────────────
    #[error("Access point command failed: {message}")]
    AccessPoint { message: String },

    #[error("Device API error: {message}")]
    Device { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn registry_read(path: &Path, source: std::io::Error) -> Self {
        Self::RegistryRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn registry_write(path: &Path, source: std::io::Error) -> Self {
        Self::RegistryWrite {
            path: path.display().to_string(),
            source,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<apdash_api::Error> for CoreError {
    fn from(err: apdash_api::Error) -> Self {
        match err {
            apdash_api::Error::Spawn { .. } | apdash_api::Error::CommandFailed { .. } => {
                Self::AccessPoint {
                    message: err.to_string(),
                }
            }
            apdash_api::Error::ClientSetup(message) => Self::Internal(message),
            other => Self::Device {
                message: other.to_string(),
            },
        }
    }
}
