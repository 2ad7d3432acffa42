// RPC-generation device endpoints
//
// Device identity, WiFi configuration, and the client table of the
// device's own access point (populated when it runs as a range extender).

use tracing::debug;

use crate::device::client::DeviceClient;
use crate::device::models::{ApClient, ApClientList, DeviceInfo, WifiConfig};
use crate::error::Error;

impl DeviceClient {
    /// Fetch device identity.
    ///
    /// `GET http://{address}/rpc/Shelly.GetDeviceInfo`
    pub async fn device_info(&self, address: &str) -> Result<DeviceInfo, Error> {
        let url = self.device_url(address, &self.paths().device_info)?;
        debug!(address, "fetching device info");
        self.get(url).await
    }

    /// Fetch the device's WiFi configuration.
    ///
    /// `GET http://{address}/rpc/WiFi.GetConfig`
    pub async fn wifi_config(&self, address: &str) -> Result<WifiConfig, Error> {
        let url = self.device_url(address, &self.paths().wifi_config)?;
        debug!(address, "fetching wifi config");
        self.get(url).await
    }

    /// List stations associated to the device's own access point.
    ///
    /// `GET http://{address}/rpc/WiFi.ListAPClients`
    pub async fn ap_clients(&self, address: &str) -> Result<Vec<ApClient>, Error> {
        let url = self.device_url(address, &self.paths().wifi_clients)?;
        debug!(address, "listing ap clients");
        let list: ApClientList = self.get(url).await?;
        Ok(list.clients())
    }
}
