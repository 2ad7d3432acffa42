// ── Dashboard facade ──
//
// Wires the identity sources, manual registry, and prober together and
// exposes the operations a presentation layer needs: the current row
// list, kicking a station, and editing manual entries.

use apdash_api::HostapdCli;
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::model::{MacAddress, ManualEntry, ManualMap, Row};
use crate::prober::{DeviceProber, HttpProber};
use crate::reconcile::reconcile;
use crate::registry::ManualRegistry;
use crate::sort::{ipv4_key, sort_rows};
use crate::source::{AccessPoint, LeaseFile, StationSource};

/// The main entry point for consumers.
///
/// Holds no per-refresh state: every [`rows()`](Self::rows) call reads
/// all sources afresh and probes devices again.
pub struct Dashboard<A, P> {
    stations: StationSource<A>,
    leases: LeaseFile,
    registry: ManualRegistry,
    prober: P,
}

impl Dashboard<HostapdCli, HttpProber> {
    /// Build a dashboard over `hostapd_cli`, the lease file, and the HTTP
    /// device API described by `config`.
    pub fn new(config: DashboardConfig) -> Result<Self, CoreError> {
        let prober = HttpProber::with_timeout(
            config.probe_timeout,
            config.device_paths,
            config.legacy_fallback,
        )?;
        let ap = HostapdCli::new(config.hostapd_cli, config.ctrl_dir);

        Ok(Self::with_parts(
            ap,
            prober,
            LeaseFile::new(config.lease_path),
            ManualRegistry::new(config.registry_path),
        ))
    }
}

impl<A: AccessPoint, P: DeviceProber> Dashboard<A, P> {
    pub fn with_parts(ap: A, prober: P, leases: LeaseFile, registry: ManualRegistry) -> Self {
        Self {
            stations: StationSource::new(ap),
            leases,
            registry,
            prober,
        }
    }

    pub fn registry(&self) -> &ManualRegistry {
        &self.registry
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Reconciled, sorted rows for every associated station.
    ///
    /// Never fails: an unreadable registry is logged and treated as empty.
    pub async fn rows(&self) -> Vec<Row> {
        let manual = self.registry.load().unwrap_or_else(|e| {
            warn!(error = %e, "manual registry unavailable, continuing without it");
            ManualMap::new()
        });
        let leases = self.leases.load();
        let stations = self.stations.list_stations().await;
        debug!(
            stations = stations.len(),
            leases = leases.len(),
            manual = manual.len(),
            "reconciling"
        );

        sort_rows(reconcile(&stations, &leases, &manual, &self.prober).await)
    }

    /// Current manual entries. Unlike [`rows()`](Self::rows), registry
    /// failures are returned.
    pub fn manual_entries(&self) -> Result<ManualMap, CoreError> {
        self.registry.load()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Ask the access point to disassociate `mac`.
    ///
    /// The outcome shows up in the next refresh; a failure is only logged.
    pub async fn kick(&self, mac: &MacAddress) {
        match self.stations.access_point().deauthenticate(mac).await {
            Ok(()) => info!(mac = %mac, "kick sent"),
            Err(e) => warn!(mac = %mac, error = %e, "kick failed"),
        }
    }

    /// Validate and store a manual entry, replacing any existing one.
    pub fn manual_add(&self, mac: &str, ip: &str, name: &str) -> Result<ManualEntry, CoreError> {
        let mac = parse_mac(mac)?;
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(CoreError::validation("ip", "must not be empty"));
        }
        if ipv4_key(ip).is_none() {
            return Err(CoreError::validation(
                "ip",
                "expected an IPv4 address, optionally with :port",
            ));
        }

        self.registry.upsert(&mac, ip, name.trim())
    }

    /// Remove the manual entry for `mac`. Returns whether one existed.
    pub fn manual_delete(&self, mac: &str) -> Result<bool, CoreError> {
        let mac = parse_mac(mac)?;
        self.registry.delete(&mac)
    }
}

fn parse_mac(raw: &str) -> Result<MacAddress, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::validation("mac", "must not be empty"));
    }
    MacAddress::parse(raw)
        .ok_or_else(|| CoreError::validation("mac", format!("'{raw}' is not a hardware address")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::model::{RowOrigin, SubClient, UNKNOWN_ADDRESS};

    #[derive(Default)]
    struct FakeAp {
        listing: String,
        fail_kick: bool,
        kicked: Mutex<Vec<String>>,
    }

    impl AccessPoint for FakeAp {
        async fn list_stations_raw(&self) -> Result<String, CoreError> {
            Ok(self.listing.clone())
        }

        async fn station_detail_raw(&self, _mac: &MacAddress) -> Result<String, CoreError> {
            Ok("signal=-50\n".into())
        }

        async fn deauthenticate(&self, mac: &MacAddress) -> Result<(), CoreError> {
            self.kicked.lock().unwrap().push(mac.to_string());
            if self.fail_kick {
                Err(CoreError::AccessPoint {
                    message: "no such station".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct NamedProber;

    impl DeviceProber for NamedProber {
        async fn get_name(&self, address: &str) -> Option<String> {
            Some(format!("dev@{address}"))
        }

        async fn is_extender(&self, _address: &str) -> bool {
            false
        }

        async fn list_sub_clients(&self, _address: &str) -> Vec<SubClient> {
            Vec::new()
        }
    }

    fn dashboard(dir: &TempDir, ap: FakeAp, leases: &str) -> Dashboard<FakeAp, NamedProber> {
        let lease_path = dir.path().join("dnsmasq.leases");
        std::fs::write(&lease_path, leases).unwrap();
        Dashboard::with_parts(
            ap,
            NamedProber,
            LeaseFile::new(lease_path),
            ManualRegistry::new(dir.path().join("manual.json")),
        )
    }

    #[tokio::test]
    async fn rows_are_reconciled_and_sorted() {
        let dir = TempDir::new().unwrap();
        let ap = FakeAp {
            listing: "aa:bb:cc:00:00:01\naa:bb:cc:00:00:02\naa:bb:cc:00:00:03\n".into(),
            ..FakeAp::default()
        };
        let leases = "0 aa:bb:cc:00:00:01 10.0.0.20 plug1 *\n\
                      0 aa:bb:cc:00:00:02 10.0.0.3 plug2 *\n";
        let dash = dashboard(&dir, ap, leases);
        dash.manual_add("AA:BB:CC:00:00:01", "10.0.0.10", "").unwrap();

        let rows = dash.rows().await;
        let addresses: Vec<&str> = rows.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["10.0.0.3", "10.0.0.10", UNKNOWN_ADDRESS]);
        assert_eq!(rows[1].origin, RowOrigin::Manual);
        assert_eq!(rows[1].display_name, "dev@10.0.0.10");
        assert_eq!(rows[0].signal, "-50");
    }

    #[tokio::test]
    async fn corrupt_registry_does_not_abort_refresh() {
        let dir = TempDir::new().unwrap();
        let ap = FakeAp {
            listing: "aa:bb:cc:00:00:01\n".into(),
            ..FakeAp::default()
        };
        let dash = dashboard(&dir, ap, "0 aa:bb:cc:00:00:01 10.0.0.2 plug *\n");
        std::fs::write(dash.registry().path(), "{ not json").unwrap();

        let rows = dash.rows().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].origin, RowOrigin::Dhcp);
        assert!(dash.manual_entries().is_err());
    }

    #[tokio::test]
    async fn failed_kick_is_not_surfaced() {
        let dir = TempDir::new().unwrap();
        let ap = FakeAp {
            fail_kick: true,
            ..FakeAp::default()
        };
        let dash = dashboard(&dir, ap, "");
        dash.kick(&MacAddress::new("aa:bb:cc:00:00:09")).await;

        let kicked = dash.stations.access_point().kicked.lock().unwrap().clone();
        assert_eq!(kicked, vec!["aa:bb:cc:00:00:09".to_owned()]);
    }

    #[test]
    fn manual_add_rejects_bad_input_without_writing() {
        let dir = TempDir::new().unwrap();
        let dash = dashboard(&dir, FakeAp::default(), "");

        for (mac, ip) in [
            ("", "10.0.0.1"),
            ("zz:zz", "10.0.0.1"),
            ("aa:bb:cc:00:00:01", "  "),
            ("aa:bb:cc:00:00:01", UNKNOWN_ADDRESS),
            ("aa:bb:cc:00:00:01", "http://10.0.0.5/"),
            ("aa:bb:cc:00:00:01", "10.0.0.5/24"),
            ("aa:bb:cc:00:00:01", "10.0.0.5 8080"),
            ("aa:bb:cc:00:00:01", "plug.lan"),
        ] {
            let err = dash.manual_add(mac, ip, "x").unwrap_err();
            assert!(matches!(err, CoreError::ValidationFailed { .. }), "{mac}/{ip}");
        }
        assert!(!dash.registry().path().exists());
    }

    #[test]
    fn manual_add_then_delete() {
        let dir = TempDir::new().unwrap();
        let dash = dashboard(&dir, FakeAp::default(), "");

        let entry = dash.manual_add("aa-bb-cc-00-00-01", " 10.0.0.5 ", " Fridge ").unwrap();
        assert_eq!(entry.mac.as_str(), "aa:bb:cc:00:00:01");
        assert_eq!(entry.ip, "10.0.0.5");
        assert_eq!(entry.name, "Fridge");
        assert_eq!(dash.manual_entries().unwrap().len(), 1);

        let ported = dash.manual_add("aa:bb:cc:00:00:02", "10.0.0.6:8080", "").unwrap();
        assert_eq!(ported.ip, "10.0.0.6:8080");
        assert!(dash.manual_delete("aa:bb:cc:00:00:02").unwrap());

        assert!(dash.manual_delete("AA:BB:CC:00:00:01").unwrap());
        assert!(!dash.manual_delete("aa:bb:cc:00:00:01").unwrap());
        assert!(dash.manual_entries().unwrap().is_empty());
    }
}
