// ── Device probe results ──

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// A station associated to a range extender rather than to the AP itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubClient {
    pub mac: MacAddress,
    /// Port on the extender forwarding to the sub-client's management API.
    pub management_port: u16,
    pub since_secs: u64,
}

/// Everything learned about one device in a single reconciliation pass.
///
/// Never cached: the next refresh probes again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub name: Option<String>,
    pub is_extender: bool,
    pub sub_clients: Vec<SubClient>,
}
