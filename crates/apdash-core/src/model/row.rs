// ── Reconciled output rows ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::mac::MacAddress;

/// Address shown for stations with neither a manual entry nor a lease.
pub const UNKNOWN_ADDRESS: &str = "-";

/// Name shown when no source produced one.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Name shown for an extender sub-client whose own probe failed.
pub const EXTENDER_CLIENT_NAME: &str = "Extender client";

/// Prefix marking a sub-client row as nested under the row above it.
pub const HIERARCHY_MARKER: &str = "└─ ";

/// Whether a row is a directly associated station or sits behind an extender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RowKind {
    Station,
    ExtenderClient,
}

/// Which source decided the row's address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RowOrigin {
    Manual,
    Dhcp,
    Extender,
}

/// One line of the reconciled device list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub mac: MacAddress,
    /// [`UNKNOWN_ADDRESS`], `ip`, or `ip:port` for sub-clients.
    pub address: String,
    pub display_name: String,
    pub kind: RowKind,
    pub origin: RowOrigin,
    pub signal: String,
    pub rx_bytes: String,
    pub tx_bytes: String,
    pub uptime: String,
    pub kickable: bool,
}

impl Row {
    pub fn has_address(&self) -> bool {
        self.address != UNKNOWN_ADDRESS
    }

    /// Link to the device's own web UI, when it has an address.
    pub fn web_url(&self) -> Option<String> {
        self.has_address().then(|| format!("http://{}", self.address))
    }
}
