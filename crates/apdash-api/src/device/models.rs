// Device management API response types
//
// Only the fields the dashboard reads are typed. Every one is optional:
// devices across firmware generations omit or null out fields freely. A
// read field of the wrong *type* still fails deserialization, which callers
// treat as absent data.

use serde::Deserialize;
use tracing::debug;

/// Treat empty / whitespace-only strings the same as missing ones.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

// ── Device info (RPC generation) ────────────────────────────────────

/// Body of the device-info RPC (`/rpc/Shelly.GetDeviceInfo`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceInfo {
    /// User-assigned device name. `null` until the owner sets one.
    #[serde(default)]
    pub name: Option<String>,
    /// Factory identifier, e.g. `shellyplusplugs-b0b21c123456`.
    #[serde(default)]
    pub id: Option<String>,
}

impl DeviceInfo {
    /// Display name: explicit name first, then the device identifier.
    pub fn display_name(&self) -> Option<String> {
        non_empty(self.name.as_ref())
            .or_else(|| non_empty(self.id.as_ref()))
            .map(str::to_owned)
    }
}

// ── WiFi configuration ──────────────────────────────────────────────

/// Body of the wifi-config RPC (`/rpc/WiFi.GetConfig`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WifiConfig {
    #[serde(default)]
    pub ap: Option<AccessPointConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessPointConfig {
    #[serde(default)]
    pub range_extender: Option<RangeExtenderConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeExtenderConfig {
    #[serde(default)]
    pub enable: Option<bool>,
}

impl WifiConfig {
    /// `ap.range_extender.enable`, defaulting to `false` when any level is missing.
    pub fn range_extender_enabled(&self) -> bool {
        self.ap
            .as_ref()
            .and_then(|ap| ap.range_extender.as_ref())
            .and_then(|re| re.enable)
            .unwrap_or(false)
    }
}

// ── Range extender clients ──────────────────────────────────────────

/// Body of the wifi-clients RPC (`/rpc/WiFi.ListAPClients`).
///
/// Entries stay raw so one malformed client cannot sink the whole list;
/// see [`ApClientList::clients`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApClientList {
    #[serde(default)]
    pub ap_clients: Vec<serde_json::Value>,
}

impl ApClientList {
    /// Decode each entry on its own, skipping the ones that do not fit.
    pub fn clients(self) -> Vec<ApClient> {
        self.ap_clients
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<ApClient>(entry) {
                Ok(client) => Some(client),
                Err(error) => {
                    debug!(%error, "skipping malformed ap client entry");
                    None
                }
            })
            .collect()
    }
}

/// One station associated to a device's own access point.
#[derive(Debug, Clone, Deserialize)]
pub struct ApClient {
    pub mac: String,
    /// Port on the extender that forwards to this client's management API.
    #[serde(default)]
    pub mport: Option<u16>,
    #[serde(default)]
    pub since: Option<u64>,
}

// ── Legacy settings (pre-RPC generation) ────────────────────────────

/// Body of the legacy settings endpoint (`/settings`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacySettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub device: Option<LegacyDevice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyDevice {
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
}

impl LegacySettings {
    /// Display name: `name`, then `device.hostname`, then `{type}-{mac suffix}`.
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = non_empty(self.name.as_ref()) {
            return Some(name.to_owned());
        }
        let device = self.device.as_ref()?;
        if let Some(hostname) = non_empty(device.hostname.as_ref()) {
            return Some(hostname.to_owned());
        }
        let device_type = non_empty(device.device_type.as_ref())?;
        let mac = non_empty(device.mac.as_ref())?;
        let suffix: String = {
            let chars: Vec<char> = mac.chars().collect();
            chars[chars.len().saturating_sub(6)..].iter().collect()
        };
        Some(format!("{device_type}-{suffix}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn device_info_prefers_name_over_id() {
        let info: DeviceInfo =
            serde_json::from_value(json!({ "name": "Kitchen-Plug", "id": "shellyplug-01" }))
                .unwrap();
        assert_eq!(info.display_name().as_deref(), Some("Kitchen-Plug"));
    }

    #[test]
    fn device_info_null_name_falls_back_to_id() {
        let info: DeviceInfo =
            serde_json::from_value(json!({ "name": null, "id": "shellyplug-01", "gen": 2 }))
                .unwrap();
        assert_eq!(info.display_name().as_deref(), Some("shellyplug-01"));
    }

    #[test]
    fn device_info_empty_name_falls_back_to_id() {
        let info: DeviceInfo =
            serde_json::from_value(json!({ "name": "  ", "id": "shellyplug-01" })).unwrap();
        assert_eq!(info.display_name().as_deref(), Some("shellyplug-01"));
    }

    #[test]
    fn device_info_without_name_or_id_is_absent() {
        let info: DeviceInfo = serde_json::from_value(json!({ "model": "SNSW-001" })).unwrap();
        assert_eq!(info.display_name(), None);
    }

    #[test]
    fn range_extender_flag_is_nested() {
        let on: WifiConfig =
            serde_json::from_value(json!({ "ap": { "range_extender": { "enable": true } } }))
                .unwrap();
        assert!(on.range_extender_enabled());

        let off: WifiConfig = serde_json::from_value(json!({ "ap": { "ssid": "x" } })).unwrap();
        assert!(!off.range_extender_enabled());

        let empty: WifiConfig = serde_json::from_value(json!({})).unwrap();
        assert!(!empty.range_extender_enabled());
    }

    #[test]
    fn range_extender_wrong_shape_fails_to_parse() {
        let result = serde_json::from_value::<WifiConfig>(json!({ "ap": "enabled" }));
        assert!(result.is_err());
    }

    #[test]
    fn ap_clients_parse_with_missing_optional_fields() {
        let list: ApClientList = serde_json::from_value(json!({
            "ts": 1_700_000_000.5,
            "ap_clients": [
                { "mac": "11:22:33:44:55:66", "ip": "192.168.33.2", "mport": 8001, "since": 120 },
                { "mac": "11:22:33:44:55:77" }
            ]
        }))
        .unwrap();
        let clients = list.clients();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].mport, Some(8001));
        assert_eq!(clients[1].mport, None);
    }

    #[test]
    fn ap_client_with_wrong_typed_field_is_skipped_alone() {
        let list: ApClientList = serde_json::from_value(json!({
            "ap_clients": [
                { "mac": "11:22:33:44:55:66", "mport": 8001, "since": 120 },
                { "mac": "11:22:33:44:55:77", "mport": 8002, "since": 12.5 },
                { "mport": 8003 },
                { "mac": "11:22:33:44:55:88", "ip": 7, "ip_static": "yes", "mport": 8004 }
            ]
        }))
        .unwrap();
        let ports: Vec<Option<u16>> = list.clients().iter().map(|c| c.mport).collect();
        assert_eq!(ports, vec![Some(8001), Some(8004)]);
    }

    #[test]
    fn unread_fields_of_any_type_do_not_fail_device_info() {
        let info: DeviceInfo = serde_json::from_value(json!({
            "name": "Porch",
            "mac": 12,
            "gen": "two",
            "ver": null,
            "model": ["SNSW"]
        }))
        .unwrap();
        assert_eq!(info.display_name().as_deref(), Some("Porch"));
    }

    #[test]
    fn legacy_settings_name_chain() {
        let named: LegacySettings = serde_json::from_value(json!({
            "name": "Garage",
            "device": { "hostname": "shelly1-A1B2C3" }
        }))
        .unwrap();
        assert_eq!(named.display_name().as_deref(), Some("Garage"));

        let hostname: LegacySettings = serde_json::from_value(json!({
            "name": null,
            "device": { "hostname": "shelly1-A1B2C3", "type": "SHSW-1" }
        }))
        .unwrap();
        assert_eq!(hostname.display_name().as_deref(), Some("shelly1-A1B2C3"));

        let synthesized: LegacySettings = serde_json::from_value(json!({
            "device": { "type": "SHSW-1", "mac": "A4CF12F4A1B2" }
        }))
        .unwrap();
        assert_eq!(synthesized.display_name().as_deref(), Some("SHSW-1-F4A1B2"));

        let bare: LegacySettings = serde_json::from_value(json!({ "device": {} })).unwrap();
        assert_eq!(bare.display_name(), None);
    }
}
