// ── DHCP lease types ──

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// A DHCP-assigned address binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    pub mac: MacAddress,
    pub ip: String,
    /// Client-supplied hostname; `None` when the server recorded a placeholder.
    pub hostname: Option<String>,
}

/// Leases keyed by canonical hardware address.
pub type LeaseMap = HashMap<MacAddress, Lease>;
