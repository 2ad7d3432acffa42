use thiserror::Error;

/// Top-level error type for the `apdash-api` crate.
///
/// Covers every failure mode of the two adapters: the HTTP device
/// management client and the hostapd control process. `apdash-core`
/// decides which of these are soft (absorbed) and which are surfaced.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    // ── Device API ──────────────────────────────────────────────────
    /// The device answered with a non-success status.
    #[error("Device API error (HTTP {status}) for {url}")]
    Status { status: u16, url: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Control process ─────────────────────────────────────────────
    /// The control utility could not be started.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The control utility ran but exited unsuccessfully.
    #[error("`{program} {args}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        args: String,
        status: String,
        stderr: String,
    },
}
