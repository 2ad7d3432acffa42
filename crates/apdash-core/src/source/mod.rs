// ── Identity sources ──
//
// Read-only adapters over the access point's station table and the DHCP
// lease store. Both absorb their own failures.

pub mod lease;
pub mod station;

pub use lease::{LeaseFile, parse_leases};
pub use station::{AccessPoint, StationSource, parse_station_detail, parse_station_list};
