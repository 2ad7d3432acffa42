// ── Lease source ──
//
// dnsmasq lease file: one lease per line,
// `<expiry> <mac> <ip> <hostname> <client-id>`. The file is a soft
// dependency: unreadable means "no leases", never an error.

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::model::{Lease, LeaseMap, MacAddress};

/// Hostname values dnsmasq writes when the client sent none.
const HOSTNAME_PLACEHOLDERS: &[&str] = &["*", "-"];

/// Read-only view of the DHCP lease store.
#[derive(Debug, Clone)]
pub struct LeaseFile {
    path: PathBuf,
}

impl LeaseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all leases, keyed by canonical MAC.
    pub fn load(&self) -> LeaseMap {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let leases = parse_leases(&contents);
                debug!(path = %self.path.display(), count = leases.len(), "loaded leases");
                leases
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "lease file unreadable");
                LeaseMap::new()
            }
        }
    }
}

/// Parse lease file contents. Malformed lines are skipped.
pub fn parse_leases(contents: &str) -> LeaseMap {
    contents.lines().filter_map(parse_line).map(|l| (l.mac.clone(), l)).collect()
}

fn parse_line(line: &str) -> Option<Lease> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (Some(mac), Some(ip), Some(hostname)) = (fields.get(1), fields.get(2), fields.get(3))
    else {
        if !line.trim().is_empty() {
            trace!(line, "skipping short lease line");
        }
        return None;
    };

    let Some(mac) = MacAddress::parse(mac) else {
        trace!(line, "skipping lease line without hardware address");
        return None;
    };

    if ip.parse::<Ipv4Addr>().is_err() {
        trace!(line, "skipping lease line without an IPv4 address");
        return None;
    }

    let hostname = (!HOSTNAME_PLACEHOLDERS.contains(hostname)).then(|| (*hostname).to_owned());
    Some(Lease {
        mac,
        ip: (*ip).to_owned(),
        hostname,
    })
}
