// Shared transport configuration for building reqwest::Client instances.
//
// The device client is the only HTTP consumer, but the timeout policy
// lives here so the prober never has to enforce deadlines itself.

use std::time::Duration;

/// Default per-request deadline for device management API calls.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Total request deadline (connect + headers + body).
    pub timeout: Duration,
    /// Connect deadline. Never longer than `timeout`.
    pub connect_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }
}

impl TransportConfig {
    /// Use the same deadline for connecting and for the whole request.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            connect_timeout: timeout,
        }
    }

    /// Timeout in whole milliseconds, for error reporting.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// Devices on the AP subnet are addressed directly, so system proxies
    /// are disabled.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout.min(self.timeout))
            .no_proxy()
            .user_agent(concat!("apdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                crate::error::Error::ClientSetup(format!("failed to build HTTP client: {e}"))
            })
    }
}
