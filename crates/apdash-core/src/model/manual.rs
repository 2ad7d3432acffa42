// ── Manual override types ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// A user-supplied binding of a hardware address to an address and name.
///
/// Authoritative over DHCP leases for the same `mac`. An empty `name`
/// means "address override only, keep probing for a name".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub mac: MacAddress,
    pub ip: String,
    #[serde(default)]
    pub name: String,
}

impl ManualEntry {
    /// The override name, if one was given.
    pub fn name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Manual entries keyed by canonical hardware address.
pub type ManualMap = BTreeMap<MacAddress, ManualEntry>;
