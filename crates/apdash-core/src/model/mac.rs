// ── Hardware address ──
//
// Every source keys stations by MAC, but each spells it differently:
// hostapd prints lower-case colon form, dnsmasq may print upper case,
// devices report bare hex. `MacAddress` is the one canonical spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from any common format.
    /// Accepts colon-separated, dash-separated, or bare hex.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let lowered = raw.as_ref().trim().to_lowercase().replace('-', ":");
        if lowered.len() == 12 && lowered.chars().all(|c| c.is_ascii_hexdigit()) {
            let pairs: Vec<&str> = (0..12)
                .step_by(2)
                .filter_map(|i| lowered.get(i..i + 2))
                .collect();
            return Self(pairs.join(":"));
        }
        Self(lowered)
    }

    /// Normalize and validate: six two-digit hex octets.
    pub fn parse(raw: impl AsRef<str>) -> Option<Self> {
        let mac = Self::new(raw);
        mac.is_valid().then_some(mac)
    }

    /// Whether the normalized form is six two-digit hex octets.
    pub fn is_valid(&self) -> bool {
        let octets: Vec<&str> = self.0.split(':').collect();
        octets.len() == 6
            && octets
                .iter()
                .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for MacAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
