// ── Device prober ──
//
// Best-effort queries against a device's management API. Every failure
// (refused, timeout, bad status, bad JSON, unexpected shape) resolves to
// absent / false / empty here; nothing crosses this boundary as an error.

use std::future::Future;
use std::time::Duration;

use apdash_api::{DeviceClient, DevicePaths, TransportConfig};
use futures_util::FutureExt;
use tracing::{debug, trace};

use crate::error::CoreError;
use crate::model::{MacAddress, SubClient};
use crate::resolve::{Lookup, first_success};

/// Name and topology queries against a device, by address (`ip` or `ip:port`).
///
/// The three calls are independent and may run in any order or concurrently.
pub trait DeviceProber: Send + Sync {
    /// Human-readable device name, if the device reports one.
    fn get_name(&self, address: &str) -> impl Future<Output = Option<String>> + Send;

    /// Whether the device is currently acting as a range extender.
    fn is_extender(&self, address: &str) -> impl Future<Output = bool> + Send;

    /// Stations associated to the device's own access point.
    fn list_sub_clients(&self, address: &str) -> impl Future<Output = Vec<SubClient>> + Send;
}

/// [`DeviceProber`] over the HTTP device management API.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: DeviceClient,
    legacy_fallback: bool,
}

impl HttpProber {
    pub fn new(client: DeviceClient, legacy_fallback: bool) -> Self {
        Self {
            client,
            legacy_fallback,
        }
    }

    /// Build a prober whose every request is bounded by `timeout`.
    pub fn with_timeout(
        timeout: Duration,
        paths: DevicePaths,
        legacy_fallback: bool,
    ) -> Result<Self, CoreError> {
        let client = DeviceClient::new(paths, &TransportConfig::with_timeout(timeout))?;
        Ok(Self::new(client, legacy_fallback))
    }

    /// Outer `None`: the request failed. Inner `None`: the device answered
    /// without a usable name.
    async fn rpc_name(&self, address: &str) -> Option<Option<String>> {
        absorb(address, "device info", self.client.device_info(address).await)
            .map(|info| info.display_name())
    }

    async fn legacy_name(&self, address: &str) -> Option<Option<String>> {
        absorb(
            address,
            "legacy settings",
            self.client.legacy_settings(address).await,
        )
        .map(|settings| settings.display_name())
    }
}

impl DeviceProber for HttpProber {
    async fn get_name(&self, address: &str) -> Option<String> {
        // The legacy endpoint is only consulted when the RPC request fails,
        // not when it succeeds without a name.
        let mut chain: Vec<Lookup<'_, Option<String>>> = vec![self.rpc_name(address).boxed()];
        if self.legacy_fallback {
            chain.push(self.legacy_name(address).boxed());
        }
        let name = first_success(chain).await.flatten();
        trace!(address, name = name.as_deref(), "probed name");
        name
    }

    async fn is_extender(&self, address: &str) -> bool {
        absorb(address, "wifi config", self.client.wifi_config(address).await)
            .is_some_and(|cfg| cfg.range_extender_enabled())
    }

    async fn list_sub_clients(&self, address: &str) -> Vec<SubClient> {
        let Some(clients) = absorb(address, "ap clients", self.client.ap_clients(address).await)
        else {
            return Vec::new();
        };

        clients
            .into_iter()
            .filter_map(|c| {
                let mac = MacAddress::parse(&c.mac);
                match (mac, c.mport) {
                    (Some(mac), Some(management_port)) => Some(SubClient {
                        mac,
                        management_port,
                        since_secs: c.since.unwrap_or(0),
                    }),
                    _ => {
                        debug!(address, mac = %c.mac, "skipping sub-client without mac or port");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Turn a failed probe into "no data", logging why.
fn absorb<T>(address: &str, what: &str, result: Result<T, apdash_api::Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(address, what, error = %e, "probe failed");
            None
        }
    }
}
