// ── Station domain types ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// A wireless client currently associated with the access point.
///
/// The attributes hostapd reports for a station are open-ended. The ones
/// the dashboard shows are typed; everything else is kept verbatim in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub mac: MacAddress,
    pub signal_dbm: Option<i32>,
    pub rx_bytes: Option<u64>,
    pub tx_bytes: Option<u64>,
    pub connected_secs: Option<u64>,
    pub extra: BTreeMap<String, String>,
}

impl Station {
    /// A station known only by its address (detail lookup failed).
    pub fn new(mac: MacAddress) -> Self {
        Self {
            mac,
            ..Self::default()
        }
    }

    /// Build a station from raw `key=value` attributes.
    ///
    /// Recognised keys whose value does not parse stay in `extra` so
    /// nothing hostapd reported is lost.
    pub fn from_attributes<K, V>(mac: MacAddress, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut station = Self::new(mac);
        for (key, value) in attrs {
            let (key, value) = (key.into(), value.into());
            let parsed = match key.as_str() {
                "signal" => value.parse().map(|v| station.signal_dbm = Some(v)).is_ok(),
                "rx_bytes" => value.parse().map(|v| station.rx_bytes = Some(v)).is_ok(),
                "tx_bytes" => value.parse().map(|v| station.tx_bytes = Some(v)).is_ok(),
                "connected_time" => value
                    .parse()
                    .map(|v| station.connected_secs = Some(v))
                    .is_ok(),
                _ => false,
            };
            if !parsed {
                station.extra.insert(key, value);
            }
        }
        station
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_become_typed_fields() {
        let station = Station::from_attributes(
            MacAddress::new("aa:bb:cc:00:00:01"),
            [
                ("signal", "-52"),
                ("rx_bytes", "1024"),
                ("tx_bytes", "2048"),
                ("connected_time", "360"),
                ("flags", "[AUTH][ASSOC][AUTHORIZED]"),
            ],
        );
        assert_eq!(station.signal_dbm, Some(-52));
        assert_eq!(station.rx_bytes, Some(1024));
        assert_eq!(station.tx_bytes, Some(2048));
        assert_eq!(station.connected_secs, Some(360));
        assert_eq!(
            station.extra.get("flags").map(String::as_str),
            Some("[AUTH][ASSOC][AUTHORIZED]")
        );
        assert!(!station.extra.contains_key("signal"));
    }

    #[test]
    fn unparseable_known_key_is_kept_raw() {
        let station =
            Station::from_attributes(MacAddress::new("aa:bb:cc:00:00:01"), [("signal", "n/a")]);
        assert_eq!(station.signal_dbm, None);
        assert_eq!(station.extra.get("signal").map(String::as_str), Some("n/a"));
    }
}
