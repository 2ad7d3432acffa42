// Device management API HTTP client
//
// Wraps `reqwest::Client` with per-device URL construction, strict
// status checking, and JSON decoding. Endpoint methods live in
// `rpc.rs` and `legacy.rs`; this module only covers transport mechanics.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Request paths of the device management API.
///
/// Defaults match the Shelly RPC surface; the legacy settings path covers
/// devices from before the RPC generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePaths {
    pub device_info: String,
    pub wifi_config: String,
    pub wifi_clients: String,
    pub legacy_settings: String,
}

impl Default for DevicePaths {
    fn default() -> Self {
        Self {
            device_info: "/rpc/Shelly.GetDeviceInfo".into(),
            wifi_config: "/rpc/WiFi.GetConfig".into(),
            wifi_clients: "/rpc/WiFi.ListAPClients".into(),
            legacy_settings: "/settings".into(),
        }
    }
}

/// HTTP client for a device's own management API.
///
/// Stateless across devices: every call names the target `address`
/// (`ip` or `ip:port`) and issues exactly one GET. The deadline is
/// enforced by the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
    paths: DevicePaths,
    timeout_ms: u64,
}

impl DeviceClient {
    /// Create a device client from a `TransportConfig`.
    pub fn new(paths: DevicePaths, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            paths,
            timeout_ms: transport.timeout_ms(),
        })
    }

    /// Create a device client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, paths: DevicePaths) -> Self {
        Self {
            http,
            paths,
            timeout_ms: 0,
        }
    }

    /// The configured request paths.
    pub fn paths(&self) -> &DevicePaths {
        &self.paths
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `http://{address}/{path}`.
    pub(crate) fn device_url(&self, address: &str, path: &str) -> Result<Url, Error> {
        let address = address.trim().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("http://{address}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    ///
    /// Anything but `200 OK` is an error, as is a body that does not
    /// decode into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| self.map_transport(e))?;
        trace!(url = %url, bytes = body.len(), "device response");

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            Error::Transport(err)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> DeviceClient {
        DeviceClient::with_client(reqwest::Client::new(), DevicePaths::default())
    }

    #[test]
    fn device_url_joins_address_and_path() {
        let url = client()
            .device_url("10.0.0.5", "/rpc/Shelly.GetDeviceInfo")
            .unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5/rpc/Shelly.GetDeviceInfo");
    }

    #[test]
    fn device_url_keeps_port() {
        let url = client().device_url("10.0.0.5:8001", "settings").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:8001/settings");
    }

    #[test]
    fn device_url_rejects_garbage() {
        assert!(client().device_url("not a host", "/x").is_err());
    }
}
