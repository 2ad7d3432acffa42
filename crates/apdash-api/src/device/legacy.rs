// Legacy (pre-RPC) device endpoints

use tracing::debug;

use crate::device::client::DeviceClient;
use crate::device::models::LegacySettings;
use crate::error::Error;

impl DeviceClient {
    /// Fetch the legacy settings document.
    ///
    /// `GET http://{address}/settings`
    pub async fn legacy_settings(&self, address: &str) -> Result<LegacySettings, Error> {
        let url = self.device_url(address, &self.paths().legacy_settings)?;
        debug!(address, "fetching legacy settings");
        self.get(url).await
    }
}
