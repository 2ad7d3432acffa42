// ── Station source ──
//
// Reads the associated-station table through an `AccessPoint`
// collaborator and parses its textual output into `Station`s.

use std::future::Future;

use apdash_api::HostapdCli;
use futures_util::future::join_all;
use tracing::{debug, trace, warn};

use crate::error::CoreError;
use crate::model::{MacAddress, Station};

/// Control surface of the access point.
///
/// Returns raw collaborator output; parsing stays in this crate so
/// alternative control utilities only have to run commands.
pub trait AccessPoint: Send + Sync {
    /// Output of the station listing: one station per line.
    fn list_stations_raw(&self) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Output of the station detail command: `key=value` lines.
    fn station_detail_raw(
        &self,
        mac: &MacAddress,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Disassociate a station.
    fn deauthenticate(&self, mac: &MacAddress)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

impl AccessPoint for HostapdCli {
    async fn list_stations_raw(&self) -> Result<String, CoreError> {
        Ok(self.list_sta().await?)
    }

    async fn station_detail_raw(&self, mac: &MacAddress) -> Result<String, CoreError> {
        Ok(self.sta(mac.as_str()).await?)
    }

    async fn deauthenticate(&self, mac: &MacAddress) -> Result<(), CoreError> {
        let out = HostapdCli::deauthenticate(self, mac.as_str()).await?;
        trace!(mac = %mac, reply = out.trim(), "deauthenticate");
        Ok(())
    }
}

/// Current station set of the access point.
pub struct StationSource<A> {
    ap: A,
}

impl<A: AccessPoint> StationSource<A> {
    pub fn new(ap: A) -> Self {
        Self { ap }
    }

    pub fn access_point(&self) -> &A {
        &self.ap
    }

    /// List associated stations, in the order the access point reports them.
    ///
    /// A failed listing yields no stations. A failed detail lookup yields
    /// that station with only its address populated.
    pub async fn list_stations(&self) -> Vec<Station> {
        let listing = match self.ap.list_stations_raw().await {
            Ok(out) => out,
            Err(e) => {
                warn!(error = %e, "station listing failed");
                return Vec::new();
            }
        };

        let macs = parse_station_list(&listing);
        debug!(count = macs.len(), "listed stations");
        join_all(macs.into_iter().map(|mac| self.station(mac))).await
    }

    async fn station(&self, mac: MacAddress) -> Station {
        match self.ap.station_detail_raw(&mac).await {
            Ok(out) => parse_station_detail(mac, &out),
            Err(e) => {
                warn!(mac = %mac, error = %e, "station detail failed");
                Station::new(mac)
            }
        }
    }
}

// ── Parsers ──────────────────────────────────────────────────────────

/// Extract station addresses: lines containing `:` that normalize to a MAC.
pub fn parse_station_list(stdout: &str) -> Vec<MacAddress> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.contains(':'))
        .filter_map(|line| {
            let mac = MacAddress::parse(line);
            if mac.is_none() {
                trace!(line, "skipping non-station line");
            }
            mac
        })
        .collect()
}

/// Parse `key=value` lines into a station. Lines without `=` are skipped.
pub fn parse_station_detail(mac: MacAddress, stdout: &str) -> Station {
    let attrs = stdout
        .lines()
        .map(str::trim)
        .filter_map(|line| line.split_once('='));
    Station::from_attributes(mac, attrs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    const LIST_STA: &str = "aa:bb:cc:00:00:01\nAA:BB:CC:00:00:02\nSelected interface 'wlan0'\n\n";

    const STA_DETAIL: &str = "aa:bb:cc:00:00:01\n\
        flags=[AUTH][ASSOC][AUTHORIZED]\n\
        signal=-48\n\
        rx_bytes=123456\n\
        tx_bytes=654321\n\
        connected_time=3600\n\
        supported_rates=82 84 8b 96\n";

    struct FakeAp {
        listing: Result<String, String>,
        details: HashMap<String, String>,
    }

    impl AccessPoint for FakeAp {
        async fn list_stations_raw(&self) -> Result<String, CoreError> {
            self.listing
                .clone()
                .map_err(|message| CoreError::AccessPoint { message })
        }

        async fn station_detail_raw(&self, mac: &MacAddress) -> Result<String, CoreError> {
            self.details
                .get(mac.as_str())
                .cloned()
                .ok_or_else(|| CoreError::AccessPoint {
                    message: "no such station".into(),
                })
        }

        async fn deauthenticate(&self, _mac: &MacAddress) -> Result<(), CoreError> {
            Ok(())
        }
    }

    #[test]
    fn list_keeps_only_address_lines() {
        let macs = parse_station_list(LIST_STA);
        assert_eq!(
            macs,
            vec![
                MacAddress::new("aa:bb:cc:00:00:01"),
                MacAddress::new("aa:bb:cc:00:00:02"),
            ]
        );
    }

    #[test]
    fn detail_skips_lines_without_equals() {
        let station = parse_station_detail(MacAddress::new("aa:bb:cc:00:00:01"), STA_DETAIL);
        assert_eq!(station.signal_dbm, Some(-48));
        assert_eq!(station.rx_bytes, Some(123_456));
        assert_eq!(station.tx_bytes, Some(654_321));
        assert_eq!(station.connected_secs, Some(3600));
        assert_eq!(
            station.extra.get("supported_rates").map(String::as_str),
            Some("82 84 8b 96")
        );
        assert_eq!(station.extra.len(), 2);
    }

    #[tokio::test]
    async fn failed_detail_keeps_station_with_mac_only() {
        let source = StationSource::new(FakeAp {
            listing: Ok(LIST_STA.into()),
            details: HashMap::from([("aa:bb:cc:00:00:01".to_owned(), STA_DETAIL.to_owned())]),
        });

        let stations = source.list_stations().await;
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].signal_dbm, Some(-48));
        assert_eq!(
            stations[1],
            Station::new(MacAddress::new("aa:bb:cc:00:00:02"))
        );
    }

    #[tokio::test]
    async fn failed_listing_yields_no_stations() {
        let source = StationSource::new(FakeAp {
            listing: Err("socket gone".into()),
            details: HashMap::new(),
        });
        assert!(source.list_stations().await.is_empty());
    }
}
