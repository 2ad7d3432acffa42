// ── Reconciler ──
//
// Merges the station table, DHCP leases, and manual overrides into one
// row per station, enriched by device probes, plus one row per
// sub-client of every station that acts as a range extender.
//
// Precedence:
//   address  manual ip  >  lease ip  >  "-"
//   name     manual     manual name  >  probed name  >  "Unknown"
//            dhcp       probed name  >  lease hostname  >  "Unknown"

use std::fmt::Display;
use std::net::SocketAddrV4;

use futures_util::future::{join, join_all};
use tracing::debug;

use crate::model::{
    EXTENDER_CLIENT_NAME, HIERARCHY_MARKER, LeaseMap, MacAddress, ManualMap, ProbeResult, Row,
    RowKind, RowOrigin, Station, SubClient, UNKNOWN_ADDRESS, UNKNOWN_NAME,
};
use crate::prober::DeviceProber;
use crate::resolve::{Lookup, first_success, known};
use crate::sort::ipv4_key;

/// Reconcile all stations into rows, in station order.
///
/// Stations are probed concurrently; each station's rows (its own and
/// its sub-clients') are complete before they are placed in the output.
pub async fn reconcile<P: DeviceProber>(
    stations: &[Station],
    leases: &LeaseMap,
    manual: &ManualMap,
    prober: &P,
) -> Vec<Row> {
    let per_station = stations
        .iter()
        .map(|station| reconcile_station(station, leases, manual, prober));

    join_all(per_station).await.into_iter().flatten().collect()
}

/// Address and name candidates for one station, before any probing.
struct Identity<'a> {
    address: Option<&'a str>,
    origin: RowOrigin,
    manual_name: Option<&'a str>,
    lease_hostname: Option<&'a str>,
}

/// A stored address worth probing: `ip` or `ip:port`, never the placeholder.
fn usable_address(raw: &str) -> Option<&str> {
    let address = raw.trim();
    ipv4_key(address).map(|_| address)
}

fn identify<'a>(mac: &MacAddress, leases: &'a LeaseMap, manual: &'a ManualMap) -> Identity<'a> {
    if let Some(entry) = manual.get(mac) {
        return Identity {
            address: usable_address(&entry.ip),
            origin: RowOrigin::Manual,
            manual_name: entry.name(),
            lease_hostname: None,
        };
    }

    let lease = leases.get(mac);
    Identity {
        address: lease.and_then(|l| usable_address(&l.ip)),
        origin: RowOrigin::Dhcp,
        manual_name: None,
        lease_hostname: lease.and_then(|l| l.hostname.as_deref()),
    }
}

impl Identity<'_> {
    /// Name candidates in precedence order, around the probed name.
    fn name_chain(&self, probed: Option<String>) -> Vec<Lookup<'static, String>> {
        let manual = known(self.manual_name.map(str::to_owned));
        let lease = known(self.lease_hostname.map(str::to_owned));
        match self.origin {
            RowOrigin::Manual => vec![manual, known(probed)],
            RowOrigin::Dhcp | RowOrigin::Extender => vec![known(probed), lease],
        }
    }
}

async fn reconcile_station<P: DeviceProber>(
    station: &Station,
    leases: &LeaseMap,
    manual: &ManualMap,
    prober: &P,
) -> Vec<Row> {
    let identity = identify(&station.mac, leases, manual);

    let Some(address) = identity.address else {
        debug!(mac = %station.mac, "no address known, not probing");
        let name = first_success(identity.name_chain(None))
            .await
            .unwrap_or_else(|| UNKNOWN_NAME.to_owned());
        return vec![station_row(station, UNKNOWN_ADDRESS, name, identity.origin)];
    };

    let probe = probe_device(prober, address).await;
    let name = first_success(identity.name_chain(probe.name.clone()))
        .await
        .unwrap_or_else(|| UNKNOWN_NAME.to_owned());

    let mut rows = vec![station_row(station, address, name, identity.origin)];
    if probe.is_extender {
        debug!(mac = %station.mac, address, sub_clients = probe.sub_clients.len(), "range extender");
        rows.extend(sub_client_rows(prober, address, &probe.sub_clients).await);
    }
    rows
}

/// Probe a device's name and extender role concurrently.
async fn probe_device<P: DeviceProber>(prober: &P, address: &str) -> ProbeResult {
    let topology = async {
        if prober.is_extender(address).await {
            (true, prober.list_sub_clients(address).await)
        } else {
            (false, Vec::new())
        }
    };
    let (name, (is_extender, sub_clients)) = join(prober.get_name(address), topology).await;

    ProbeResult {
        name,
        is_extender,
        sub_clients,
    }
}

async fn sub_client_rows<P: DeviceProber>(
    prober: &P,
    parent_address: &str,
    sub_clients: &[SubClient],
) -> Vec<Row> {
    let rows = sub_clients.iter().map(|client| async move {
        let address = sub_client_address(parent_address, client.management_port);
        let name = prober
            .get_name(&address)
            .await
            .unwrap_or_else(|| EXTENDER_CLIENT_NAME.to_owned());
        extender_client_row(client, address, &name)
    });
    join_all(rows).await
}

/// `host:port` of a sub-client, reached through its extender's address.
fn sub_client_address(parent: &str, port: u16) -> String {
    let host = parent
        .parse::<SocketAddrV4>()
        .map_or_else(|_| parent.to_owned(), |sa| sa.ip().to_string());
    format!("{host}:{port}")
}

// ── Row builders ─────────────────────────────────────────────────────

fn display_or_empty<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn station_row(station: &Station, address: &str, display_name: String, origin: RowOrigin) -> Row {
    Row {
        mac: station.mac.clone(),
        address: address.to_owned(),
        display_name,
        kind: RowKind::Station,
        origin,
        signal: display_or_empty(station.signal_dbm),
        rx_bytes: display_or_empty(station.rx_bytes),
        tx_bytes: display_or_empty(station.tx_bytes),
        uptime: display_or_empty(station.connected_secs),
        kickable: true,
    }
}

fn extender_client_row(client: &SubClient, address: String, name: &str) -> Row {
    Row {
        mac: client.mac.clone(),
        address,
        display_name: format!("{HIERARCHY_MARKER}{name}"),
        kind: RowKind::ExtenderClient,
        origin: RowOrigin::Extender,
        signal: String::new(),
        rx_bytes: String::new(),
        tx_bytes: String::new(),
        uptime: String::new(),
        kickable: false,
    }
}
